//! End-to-end checks of the aggregation and view-sync behaviour.
//!
//! Run with: cargo test --test dashboard_test

use chrono::NaiveDate;
use float_dashboard::application::dashboard_service::DashboardService;
use float_dashboard::application::view_sync::ViewSync;
use float_dashboard::domain::aggregation::{
    compute_float_averages, compute_summary_stats, compute_trajectories, distinct_float_ids,
    select_series,
};
use float_dashboard::domain::palette::FLOAT_PALETTE;
use float_dashboard::domain::reading::{Parameter, Reading};
use float_dashboard::domain::reading_set::ReadingSet;
use float_dashboard::infrastructure::config::{LabelTemplates, ViewConfig};
use float_dashboard::infrastructure::embedded_source::mock_readings;
use float_dashboard::infrastructure::json_renderer::JsonRenderer;
use serde_json::Value;

fn reading(float_id: i64, temperature: f64, day: u32) -> Reading {
    Reading::new(
        float_id,
        temperature,
        35.0,
        10.0,
        0.0,
        0.0,
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
    )
}

#[test]
fn mock_set_summary() {
    let stats = compute_summary_stats(&mock_readings());
    assert_eq!(stats.distinct_float_count, 7);
    assert_eq!(stats.total_reading_count, 10);
    assert_eq!(stats.earliest_date, NaiveDate::from_ymd_opt(2025, 1, 1));
    assert_eq!(stats.latest_date, NaiveDate::from_ymd_opt(2025, 12, 31));
}

#[test]
fn series_matches_input_for_every_parameter() {
    let readings = mock_readings();
    for parameter in Parameter::ALL {
        let series = select_series(&readings, parameter);
        assert_eq!(series.len(), readings.len());
        for (point, r) in series.iter().zip(&readings) {
            assert_eq!(point.date, r.date);
            assert_eq!(point.value, r.value_of(parameter));
        }
    }
}

#[test]
fn float_average_example() {
    let averages = compute_float_averages(&mock_readings(), Parameter::Temperature);
    let value = averages.get(7902246).unwrap();
    assert!((value - 28.8).abs() < 1e-9);
    assert_eq!(averages.len(), 7);
}

#[test]
fn colors_stable_when_first_appearance_order_is_kept() {
    // Same first-appearance order (1, 2, 3), different interleaving.
    let a = vec![reading(1, 1.0, 1), reading(2, 2.0, 2), reading(1, 3.0, 3), reading(3, 4.0, 4)];
    let b = vec![reading(1, 3.0, 3), reading(2, 2.0, 2), reading(3, 4.0, 4), reading(1, 1.0, 1)];
    assert_eq!(distinct_float_ids(&a), distinct_float_ids(&b));

    let colors = |readings: Vec<Reading>| {
        DashboardService::new(ReadingSet::new(readings), LabelTemplates::default())
            .build_trajectories()
            .datasets
            .into_iter()
            .map(|d| (d.float_id, d.color))
            .collect::<Vec<_>>()
    };
    assert_eq!(colors(a), colors(b));
}

#[test]
fn eighth_float_wraps_palette() {
    let readings: Vec<Reading> = (1..=8).map(|id| reading(id, 20.0, 1)).collect();
    let chart = DashboardService::new(ReadingSet::new(readings), LabelTemplates::default())
        .build_trajectories();
    assert_eq!(chart.datasets[7].color, FLOAT_PALETTE[0]);
    assert_eq!(compute_trajectories(&[]).len(), 0);
}

#[test]
fn salinity_switch_keeps_dates_and_positions() {
    let mut service = DashboardService::new(ReadingSet::new(mock_readings()), LabelTemplates::default());
    let before = service.build_dashboard();
    let after = service.select_parameter(Parameter::Salinity);

    assert_eq!(before.trend.labels, after.trend.labels);
    assert_ne!(before.trend.values, after.trend.values);
    assert_eq!(before.trajectories, after.trajectories);
}

#[test]
fn json_output_toggles_comparative_visibility() {
    let single = mock_readings()
        .into_iter()
        .filter(|r| r.float_id == 7902246)
        .collect::<Vec<_>>();

    for (readings, chart_display, message_display) in [
        (single, "none", "block"),
        (mock_readings(), "block", "none"),
    ] {
        let service = DashboardService::new(ReadingSet::new(readings), LabelTemplates::default());
        let mut sync = ViewSync::wire(service, JsonRenderer::new(Vec::new()), &ViewConfig::default());
        sync.render_all().unwrap();

        let out = String::from_utf8(sync.into_renderer().into_inner()).unwrap();
        let docs: Vec<Value> = out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        let display_of = |view: &str| {
            docs.iter()
                .find(|d| d["view"] == view)
                .map(|d| d["display"].as_str().unwrap().to_string())
                .unwrap()
        };

        assert_eq!(display_of("comparativeAnalysisChart"), chart_display);
        assert_eq!(display_of("comparativeAnalysisMessage"), message_display);
    }
}
