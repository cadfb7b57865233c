// Rendering collaborator trait
use crate::domain::error::DashboardError;
use crate::domain::view::{ComparativeView, StatsSummary, TrajectoryChart, TrendChart};

/// Receives freshly built view models. Each call replaces whatever the
/// target element showed before; implementations never receive partial
/// updates.
pub trait DashboardRenderer {
    fn render_trend(&mut self, target: &str, chart: &TrendChart) -> Result<(), DashboardError>;

    fn render_trajectories(
        &mut self,
        target: &str,
        chart: &TrajectoryChart,
    ) -> Result<(), DashboardError>;

    /// `chart_target` shows the bar chart, `message_target` the text shown
    /// when the chart is suppressed. Exactly one of the two is visible.
    fn render_comparative(
        &mut self,
        chart_target: &str,
        message_target: &str,
        view: &ComparativeView,
    ) -> Result<(), DashboardError>;

    fn render_stats(&mut self, target: &str, stats: &StatsSummary) -> Result<(), DashboardError>;
}
