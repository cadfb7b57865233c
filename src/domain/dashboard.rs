// Dashboard domain model
use super::reading::Parameter;
use super::view::{ComparativeView, StatsSummary, TrajectoryChart, TrendChart};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub parameter: Parameter,
    pub trend: TrendChart,
    pub trajectories: TrajectoryChart,
    pub comparative: ComparativeView,
    pub stats: StatsSummary,
}

impl Dashboard {
    pub fn new(
        parameter: Parameter,
        trend: TrendChart,
        trajectories: TrajectoryChart,
        comparative: ComparativeView,
        stats: StatsSummary,
    ) -> Self {
        Self {
            parameter,
            trend,
            trajectories,
            comparative,
            stats,
        }
    }
}
