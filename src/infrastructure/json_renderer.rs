// Line-delimited JSON renderer
use crate::application::renderer::DashboardRenderer;
use crate::domain::error::DashboardError;
use crate::domain::view::{ComparativeView, StatsSummary, TrajectoryChart, TrendChart};
use crate::infrastructure::chart_mapper::{
    comparative_to_json, stats_to_json, trajectories_to_json, trend_to_json,
};
use serde_json::{json, Value};
use std::io::Write;

/// Writes one JSON document per view update:
/// `{"view": <handle>, "display": "block"|"none", "content": ...}`.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, view: &str, visible: bool, content: Value) -> Result<(), DashboardError> {
        let document = json!({
            "view": view,
            "display": if visible { "block" } else { "none" },
            "content": content,
        });

        serde_json::to_writer(&mut self.out, &document)
            .map_err(|e| DashboardError::Render(format!("{}: {}", view, e)))?;
        writeln!(self.out)
            .and_then(|_| self.out.flush())
            .map_err(|e| DashboardError::Render(format!("{}: {}", view, e)))
    }
}

impl<W: Write> DashboardRenderer for JsonRenderer<W> {
    fn render_trend(&mut self, target: &str, chart: &TrendChart) -> Result<(), DashboardError> {
        self.emit(target, true, trend_to_json(chart))
    }

    fn render_trajectories(
        &mut self,
        target: &str,
        chart: &TrajectoryChart,
    ) -> Result<(), DashboardError> {
        self.emit(target, true, trajectories_to_json(chart))
    }

    fn render_comparative(
        &mut self,
        chart_target: &str,
        message_target: &str,
        view: &ComparativeView,
    ) -> Result<(), DashboardError> {
        match view {
            ComparativeView::Chart(chart) => {
                self.emit(chart_target, true, comparative_to_json(chart))?;
                self.emit(message_target, false, Value::Null)
            }
            ComparativeView::Suppressed { message } => {
                self.emit(chart_target, false, Value::Null)?;
                self.emit(message_target, true, Value::String(message.clone()))
            }
        }
    }

    fn render_stats(&mut self, target: &str, stats: &StatsSummary) -> Result<(), DashboardError> {
        self.emit(target, true, stats_to_json(stats))
    }
}
