// CSV file reading source
use crate::application::reading_source::ReadingSource;
use crate::domain::reading::Reading;
use crate::infrastructure::float_record::FloatRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

// Cell spellings pandas reads as missing
const MISSING_MARKERS: [&str; 12] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "#N/A", "NULL", "null", "None",
];

/// Reads a CSV file with a `FLOAT_ID,TEMP,PSAL,PRES,LAT,LON,DATE` header.
/// Rows with a missing or non-finite value are dropped.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub fn parse_csv_readings(body: &str) -> Result<Vec<Reading>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());
    let headers = reader.headers().context("Missing CSV header")?.clone();

    let mut readings = Vec::new();
    let mut skipped = 0usize;

    for (i, row) in reader.records().enumerate() {
        // header is line 1
        let line = i + 2;
        let row = row.with_context(|| format!("Malformed CSV row at line {}", line))?;

        if row.iter().any(|cell| MISSING_MARKERS.contains(&cell)) {
            tracing::warn!("Skipping CSV line {}: missing value", line);
            skipped += 1;
            continue;
        }

        let record: FloatRecord = row
            .deserialize(Some(&headers))
            .with_context(|| format!("Invalid float record at line {}", line))?;
        if !record.is_finite() {
            tracing::warn!("Skipping CSV line {}: missing value", line);
            skipped += 1;
            continue;
        }
        readings.push(
            record
                .into_reading()
                .with_context(|| format!("Invalid float record at line {}", line))?,
        );
    }

    if skipped > 0 {
        tracing::info!("Dropped {} incomplete CSV rows", skipped);
    }

    Ok(readings)
}

#[async_trait]
impl ReadingSource for CsvFileSource {
    fn describe(&self) -> String {
        format!("csv file {}", self.path.display())
    }

    async fn load_readings(&self) -> Result<Vec<Reading>> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        parse_csv_readings(&body)
    }
}
