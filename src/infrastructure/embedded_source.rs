// Built-in mock data set
use crate::application::reading_source::ReadingSource;
use crate::domain::reading::Reading;
use async_trait::async_trait;
use chrono::NaiveDate;

// (float id, temp, psal, pres, lat, lon, (y, m, d))
type MockRow = (i64, f64, f64, f64, f64, f64, (i32, u32, u32));

const MOCK_ROWS: [MockRow; 10] = [
    (7902246, 28.7, 34.6, 10.0, -1.0, 78.3, (2025, 1, 1)),
    (7902246, 28.9, 34.6, 12.0, -1.1, 78.4, (2025, 12, 31)),
    (7902247, 29.1, 34.8, 11.0, -2.5, 80.1, (2025, 1, 1)),
    (7902247, 29.3, 34.9, 14.0, -2.6, 80.2, (2025, 12, 31)),
    (7902248, 28.5, 34.5, 9.0, -1.5, 79.5, (2025, 1, 1)),
    (7902248, 28.6, 34.5, 11.0, -1.6, 79.6, (2025, 12, 31)),
    (7902249, 29.5, 35.1, 15.0, -3.0, 81.0, (2025, 1, 1)),
    (7902250, 28.1, 34.3, 8.0, -0.5, 77.0, (2025, 1, 1)),
    (7902251, 28.8, 34.7, 12.0, -2.0, 78.8, (2025, 1, 1)),
    (7902252, 29.0, 34.8, 13.0, -2.2, 79.0, (2025, 1, 1)),
];

/// The ten readings from seven floats the dashboard ships with.
pub fn mock_readings() -> Vec<Reading> {
    MOCK_ROWS
        .iter()
        .filter_map(|&(id, temp, psal, pres, lat, lon, (y, m, d))| {
            NaiveDate::from_ymd_opt(y, m, d)
                .map(|date| Reading::new(id, temp, psal, pres, lat, lon, date))
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource;

#[async_trait]
impl ReadingSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded mock data".to_string()
    }

    async fn load_readings(&self) -> anyhow::Result<Vec<Reading>> {
        Ok(mock_readings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregation::compute_summary_stats;

    #[tokio::test]
    async fn test_embedded_source_loads_mock_set() {
        let readings = EmbeddedSource.load_readings().await.unwrap();
        assert_eq!(readings.len(), 10);

        let stats = compute_summary_stats(&readings);
        assert_eq!(stats.distinct_float_count, 7);
        assert_eq!(stats.total_reading_count, 10);
    }
}
