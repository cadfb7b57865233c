// Pure aggregations over a reading slice
//
// None of these functions re-sort their input: per-float order is the
// order in which readings were supplied.
use super::reading::{FloatId, Parameter, Reading};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub float_id: FloatId,
    pub points: Vec<GeoPoint>,
}

/// Per-float trajectories in first-appearance order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Trajectories(Vec<Trajectory>);

impl Trajectories {
    pub fn get(&self, float_id: FloatId) -> Option<&Trajectory> {
        self.0.iter().find(|t| t.float_id == float_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trajectory> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatAverage {
    pub float_id: FloatId,
    pub value: f64,
}

/// Per-float means in first-appearance order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FloatAverages(Vec<FloatAverage>);

impl FloatAverages {
    pub fn get(&self, float_id: FloatId) -> Option<f64> {
        self.0
            .iter()
            .find(|a| a.float_id == float_id)
            .map(|a| a.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FloatAverage> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    fn include(range: Option<Self>, value: f64) -> Option<Self> {
        Some(match range {
            Some(r) => Self {
                min: r.min.min(value),
                max: r.max.max(value),
            },
            None => Self {
                min: value,
                max: value,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub distinct_float_count: usize,
    pub total_reading_count: usize,
    pub mean_temperature: f64,
    pub mean_salinity: f64,
    pub mean_pressure: f64,
    pub earliest_date: Option<NaiveDate>,
    pub latest_date: Option<NaiveDate>,
    pub temperature_range: Option<ParameterRange>,
    pub salinity_range: Option<ParameterRange>,
    pub pressure_range: Option<ParameterRange>,
}

/// Distinct float ids, each once, in order of first appearance.
pub fn distinct_float_ids(readings: &[Reading]) -> Vec<FloatId> {
    let mut seen = HashSet::new();
    readings
        .iter()
        .filter(|r| seen.insert(r.float_id))
        .map(|r| r.float_id)
        .collect()
}

pub fn select_series(readings: &[Reading], parameter: Parameter) -> Vec<SeriesPoint> {
    readings
        .iter()
        .map(|r| SeriesPoint {
            date: r.date,
            value: r.value_of(parameter),
        })
        .collect()
}

pub fn compute_trajectories(readings: &[Reading]) -> Trajectories {
    let mut positions: HashMap<FloatId, usize> = HashMap::new();
    let mut groups: Vec<Trajectory> = Vec::new();

    for r in readings {
        let idx = *positions.entry(r.float_id).or_insert_with(|| {
            groups.push(Trajectory {
                float_id: r.float_id,
                points: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].points.push(GeoPoint {
            longitude: r.longitude,
            latitude: r.latitude,
        });
    }

    Trajectories(groups)
}

pub fn compute_float_averages(readings: &[Reading], parameter: Parameter) -> FloatAverages {
    let mut totals: HashMap<FloatId, (f64, usize)> = HashMap::new();
    for r in readings {
        let entry = totals.entry(r.float_id).or_insert((0.0, 0));
        entry.0 += r.value_of(parameter);
        entry.1 += 1;
    }

    let averages = distinct_float_ids(readings)
        .into_iter()
        .map(|float_id| {
            let value = match totals.get(&float_id) {
                Some(&(sum, count)) if count > 0 => sum / count as f64,
                _ => 0.0,
            };
            FloatAverage { float_id, value }
        })
        .collect();

    FloatAverages(averages)
}

/// Single-pass summary. An empty slice yields zero counts, NaN means and
/// no date range.
pub fn compute_summary_stats(readings: &[Reading]) -> SummaryStats {
    let mut floats = HashSet::new();
    let mut temperature_sum = 0.0;
    let mut salinity_sum = 0.0;
    let mut pressure_sum = 0.0;
    let mut earliest: Option<NaiveDate> = None;
    let mut latest: Option<NaiveDate> = None;
    let mut temperature_range = None;
    let mut salinity_range = None;
    let mut pressure_range = None;

    for r in readings {
        floats.insert(r.float_id);
        temperature_sum += r.temperature;
        salinity_sum += r.salinity;
        pressure_sum += r.pressure;
        earliest = Some(earliest.map_or(r.date, |d| d.min(r.date)));
        latest = Some(latest.map_or(r.date, |d| d.max(r.date)));
        temperature_range = ParameterRange::include(temperature_range, r.temperature);
        salinity_range = ParameterRange::include(salinity_range, r.salinity);
        pressure_range = ParameterRange::include(pressure_range, r.pressure);
    }

    let n = readings.len() as f64;
    SummaryStats {
        distinct_float_count: floats.len(),
        total_reading_count: readings.len(),
        mean_temperature: temperature_sum / n,
        mean_salinity: salinity_sum / n,
        mean_pressure: pressure_sum / n,
        earliest_date: earliest,
        latest_date: latest,
        temperature_range,
        salinity_range,
        pressure_range,
    }
}
