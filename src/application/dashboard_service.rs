// Dashboard service - Derives every view of the dashboard from the reading set
use crate::domain::aggregation::{
    compute_float_averages, compute_summary_stats, compute_trajectories, distinct_float_ids,
    select_series, ParameterRange, SummaryStats,
};
use crate::domain::dashboard::Dashboard;
use crate::domain::palette::{assign_colors, color_for_index, TREND_BORDER_COLOR, TREND_FILL_COLOR};
use crate::domain::reading::{FloatId, Parameter};
use crate::domain::reading_set::ReadingSet;
use crate::domain::view::{
    float_label, ComparativeChart, ComparativeView, StatsSummary, TrajectoryChart,
    TrajectoryDataset, TrendChart,
};
use crate::infrastructure::config::{render_template, LabelTemplates};
use std::collections::HashMap;

/// Fewer distinct floats than this and the comparative bar chart is
/// replaced by a message.
pub const MIN_FLOATS_FOR_COMPARISON: usize = 2;

const STATS_DATE_FORMAT: &str = "%B %-d, %Y";

/// Mutable per-session state. Only `DashboardService::select_parameter`
/// writes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub parameter: Parameter,
}

#[derive(Debug, Clone)]
pub struct DashboardService {
    readings: ReadingSet,
    float_ids: Vec<FloatId>,
    labels: LabelTemplates,
    session: SessionState,
}

impl DashboardService {
    pub fn new(readings: ReadingSet, labels: LabelTemplates) -> Self {
        let float_ids = distinct_float_ids(readings.as_slice());
        Self {
            readings,
            float_ids,
            labels,
            session: SessionState::default(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.session.parameter = parameter;
        self
    }

    pub fn readings(&self) -> &ReadingSet {
        &self.readings
    }

    pub fn float_ids(&self) -> &[FloatId] {
        &self.float_ids
    }

    pub fn selected_parameter(&self) -> Parameter {
        self.session.parameter
    }

    /// Switch the selected parameter and rebuild every view from the
    /// unchanged reading set.
    pub fn select_parameter(&mut self, parameter: Parameter) -> Dashboard {
        if parameter != self.session.parameter {
            tracing::debug!(
                "Parameter changed: {} -> {}",
                self.session.parameter,
                parameter
            );
        }
        self.session.parameter = parameter;
        self.build_dashboard()
    }

    pub fn build_dashboard(&self) -> Dashboard {
        let dashboard = Dashboard::new(
            self.session.parameter,
            self.build_trend(),
            self.build_trajectories(),
            self.build_comparative(),
            self.build_stats(),
        );

        tracing::debug!(
            parameter = %dashboard.parameter,
            points = dashboard.trend.values.len(),
            floats = self.float_ids.len(),
            comparative_suppressed = dashboard.comparative.is_suppressed(),
            "Dashboard derived"
        );

        dashboard
    }

    pub fn build_trend(&self) -> TrendChart {
        let parameter = self.session.parameter;
        let vars = template_vars(parameter);
        let series = select_series(self.readings.as_slice(), parameter);

        TrendChart {
            title: render_template(&self.labels.trend_title, &vars),
            dataset_label: parameter.label().to_string(),
            y_axis_title: render_template(&self.labels.trend_axis, &vars),
            labels: series.iter().map(|p| p.date).collect(),
            values: series.iter().map(|p| p.value).collect(),
            border_color: TREND_BORDER_COLOR.to_string(),
            fill_color: TREND_FILL_COLOR.to_string(),
        }
    }

    /// Positions do not depend on the selected parameter.
    pub fn build_trajectories(&self) -> TrajectoryChart {
        let trajectories = compute_trajectories(self.readings.as_slice());
        let datasets = trajectories
            .iter()
            .enumerate()
            .map(|(index, trajectory)| TrajectoryDataset {
                float_id: trajectory.float_id,
                label: float_label(trajectory.float_id),
                color: color_for_index(index).to_string(),
                points: trajectory.points.clone(),
            })
            .collect();

        TrajectoryChart {
            title: self.labels.trajectory_title.clone(),
            x_axis_title: "Longitude".to_string(),
            y_axis_title: "Latitude".to_string(),
            datasets,
        }
    }

    pub fn build_comparative(&self) -> ComparativeView {
        let parameter = self.session.parameter;
        let vars = template_vars(parameter);

        if self.float_ids.len() < MIN_FLOATS_FOR_COMPARISON {
            return ComparativeView::Suppressed {
                message: render_template(&self.labels.comparative_suppressed, &vars),
            };
        }

        let averages = compute_float_averages(self.readings.as_slice(), parameter);
        let axis = render_template(&self.labels.comparative_axis, &vars);

        ComparativeView::Chart(ComparativeChart {
            title: render_template(&self.labels.comparative_title, &vars),
            dataset_label: axis.clone(),
            y_axis_title: axis,
            labels: averages.iter().map(|a| float_label(a.float_id)).collect(),
            values: averages.iter().map(|a| a.value).collect(),
            colors: assign_colors(&self.float_ids)
                .into_iter()
                .map(|(_, color)| color.to_string())
                .collect(),
        })
    }

    pub fn build_stats(&self) -> StatsSummary {
        format_stats(&compute_summary_stats(self.readings.as_slice()))
    }
}

fn template_vars(parameter: Parameter) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    vars.insert("label".to_string(), parameter.label().to_string());
    vars.insert("unit".to_string(), parameter.unit().to_string());
    vars
}

/// Format summary statistics the way the stats bar shows them.
pub fn format_stats(stats: &SummaryStats) -> StatsSummary {
    let format_date = |date: Option<chrono::NaiveDate>| {
        date.map(|d| d.format(STATS_DATE_FORMAT).to_string())
            .unwrap_or_else(|| "n/a".to_string())
    };

    let format_range = |range: Option<ParameterRange>, unit: &str| {
        range
            .map(|r| format!("{:.1} to {:.1}{}", r.min, r.max, unit))
            .unwrap_or_else(|| "n/a".to_string())
    };

    StatsSummary {
        active_floats: stats.distinct_float_count.to_string(),
        data_points: stats.total_reading_count.to_string(),
        avg_temperature: format!("{:.1}°C", stats.mean_temperature),
        avg_salinity: format!("{:.1}", stats.mean_salinity),
        avg_pressure: format!("{:.1} dbar", stats.mean_pressure),
        temperature_range: format_range(stats.temperature_range, "°C"),
        salinity_range: format_range(stats.salinity_range, ""),
        pressure_range: format_range(stats.pressure_range, " dbar"),
        date_from: format_date(stats.earliest_date),
        date_to: format_date(stats.latest_date),
    }
}
