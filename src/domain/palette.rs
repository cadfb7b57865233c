// Fixed display colors
use super::reading::FloatId;

pub const FLOAT_PALETTE: [&str; 7] = [
    "hsl(180, 85%, 35%)",
    "hsl(210, 85%, 45%)",
    "hsl(345, 85%, 45%)",
    "hsl(39, 95%, 55%)",
    "hsl(270, 85%, 55%)",
    "hsl(60, 85%, 45%)",
    "hsl(0, 85%, 55%)",
];

pub const TREND_BORDER_COLOR: &str = "hsl(210, 85%, 25%)";
pub const TREND_FILL_COLOR: &str = "hsla(210, 85%, 25%, 0.1)";

/// Color for the float at `index` in the distinct-id ordering.
pub fn color_for_index(index: usize) -> &'static str {
    FLOAT_PALETTE[index % FLOAT_PALETTE.len()]
}

pub fn assign_colors(float_ids: &[FloatId]) -> Vec<(FloatId, &'static str)> {
    float_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, color_for_index(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_after_seven() {
        assert_eq!(color_for_index(0), FLOAT_PALETTE[0]);
        assert_eq!(color_for_index(6), FLOAT_PALETTE[6]);
        assert_eq!(color_for_index(7), FLOAT_PALETTE[0]);
        assert_eq!(color_for_index(15), FLOAT_PALETTE[1]);
    }

    #[test]
    fn test_assign_colors_by_position() {
        let colors = assign_colors(&[42, 7, 99]);
        assert_eq!(colors[0], (42, FLOAT_PALETTE[0]));
        assert_eq!(colors[1], (7, FLOAT_PALETTE[1]));
        assert_eq!(colors[2], (99, FLOAT_PALETTE[2]));
    }
}
