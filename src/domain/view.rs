// View models handed to the rendering collaborator
use super::aggregation::GeoPoint;
use super::reading::FloatId;
use chrono::NaiveDate;
use serde::Serialize;

pub fn float_label(float_id: FloatId) -> String {
    format!("Float {}", float_id)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub title: String,
    pub dataset_label: String,
    pub y_axis_title: String,
    pub labels: Vec<NaiveDate>,
    pub values: Vec<f64>,
    pub border_color: String,
    pub fill_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryDataset {
    pub float_id: FloatId,
    pub label: String,
    pub color: String,
    pub points: Vec<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryChart {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub datasets: Vec<TrajectoryDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativeChart {
    pub title: String,
    pub dataset_label: String,
    pub y_axis_title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

/// Bar chart of per-float averages, or the message shown in its place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ComparativeView {
    Chart(ComparativeChart),
    Suppressed { message: String },
}

impl ComparativeView {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, ComparativeView::Suppressed { .. })
    }
}

/// Pre-formatted labels for the stats bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub active_floats: String,
    pub data_points: String,
    pub avg_temperature: String,
    pub avg_salinity: String,
    pub avg_pressure: String,
    pub temperature_range: String,
    pub salinity_range: String,
    pub pressure_range: String,
    pub date_from: String,
    pub date_to: String,
}
