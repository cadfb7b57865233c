// Mapper to convert view models to chart-library configuration objects
use crate::domain::view::{ComparativeChart, StatsSummary, TrajectoryChart, TrendChart};
use serde_json::{json, Value};

pub fn trend_to_json(chart: &TrendChart) -> Value {
    let labels: Vec<String> = chart.labels.iter().map(|d| d.to_string()).collect();

    json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": chart.dataset_label,
                "data": chart.values,
                "borderColor": chart.border_color,
                "backgroundColor": chart.fill_color,
                "fill": true,
                "tension": 0.3,
            }],
        },
        "options": {
            "plugins": {
                "legend": { "display": false },
                "title": { "display": true, "text": chart.title },
            },
            "scales": {
                "y": {
                    "beginAtZero": false,
                    "title": { "display": true, "text": chart.y_axis_title },
                },
            },
        },
    })
}

pub fn trajectories_to_json(chart: &TrajectoryChart) -> Value {
    let datasets: Vec<Value> = chart
        .datasets
        .iter()
        .map(|dataset| {
            let points: Vec<Value> = dataset
                .points
                .iter()
                .map(|p| json!({ "x": p.longitude, "y": p.latitude }))
                .collect();
            json!({
                "label": dataset.label,
                "data": points,
                "backgroundColor": dataset.color,
            })
        })
        .collect();

    json!({
        "type": "scatter",
        "data": { "datasets": datasets },
        "options": {
            "plugins": {
                "legend": { "display": true, "position": "top" },
                "title": { "display": true, "text": chart.title },
            },
            "scales": {
                "x": { "title": { "display": true, "text": chart.x_axis_title } },
                "y": { "title": { "display": true, "text": chart.y_axis_title } },
            },
        },
    })
}

pub fn comparative_to_json(chart: &ComparativeChart) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": chart.labels,
            "datasets": [{
                "label": chart.dataset_label,
                "data": chart.values,
                "backgroundColor": chart.colors,
                "borderRadius": 5,
            }],
        },
        "options": {
            "plugins": {
                "legend": { "display": false },
                "title": { "display": true, "text": chart.title },
            },
            "scales": {
                "y": {
                    "beginAtZero": false,
                    "title": { "display": true, "text": chart.y_axis_title },
                },
            },
        },
    })
}

pub fn stats_to_json(stats: &StatsSummary) -> Value {
    json!({
        "activeFloatsStat": stats.active_floats,
        "dataPointsStat": stats.data_points,
        "avgTempStat": stats.avg_temperature,
        "avgSalinityStat": stats.avg_salinity,
        "avgPressureStat": stats.avg_pressure,
        "temperatureRange": stats.temperature_range,
        "salinityRange": stats.salinity_range,
        "pressureRange": stats.pressure_range,
        "date-from": stats.date_from,
        "date-to": stats.date_to,
    })
}
