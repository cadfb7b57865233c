// JSON file reading source
use crate::application::reading_source::ReadingSource;
use crate::domain::reading::Reading;
use crate::infrastructure::float_record::FloatRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a JSON array of float records (`FLOAT_ID`, `TEMP`, `PSAL`, `PRES`,
/// `LAT`, `LON`, `DATE`).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub fn parse_json_readings(body: &str) -> Result<Vec<Reading>> {
    let records: Vec<FloatRecord> =
        serde_json::from_str(body).context("Failed to parse float records")?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            record
                .into_reading()
                .with_context(|| format!("Invalid float record at index {}", i))
        })
        .collect()
}

#[async_trait]
impl ReadingSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }

    async fn load_readings(&self) -> Result<Vec<Reading>> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let readings = parse_json_readings(&body)?;
        tracing::debug!("Parsed {} readings from {}", readings.len(), self.path.display());
        Ok(readings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_readings_keeps_order() {
        let body = r#"[
            { "FLOAT_ID": 2, "TEMP": 29.1, "PSAL": 34.8, "PRES": 11, "LAT": -2.5, "LON": 80.1, "DATE": "2025-01-01" },
            { "FLOAT_ID": 1, "TEMP": 28.7, "PSAL": 34.6, "PRES": 10, "LAT": -1.0, "LON": 78.3, "DATE": "2025-01-02" }
        ]"#;

        let readings = parse_json_readings(body).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].float_id, 2);
        assert_eq!(readings[1].float_id, 1);
    }

    #[test]
    fn test_parse_json_readings_reports_bad_record() {
        let body = r#"[
            { "FLOAT_ID": 1, "TEMP": 1, "PSAL": 1, "PRES": 1, "LAT": 0, "LON": 0, "DATE": "2025/01/01" }
        ]"#;

        let err = parse_json_readings(body).unwrap_err();
        assert!(err.to_string().contains("index 0"));
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let path = std::env::temp_dir().join(format!(
            "float-dashboard-readings-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"[{ "FLOAT_ID": 5, "TEMP": 28.1, "PSAL": 34.3, "PRES": 8, "LAT": -0.5, "LON": 77.0, "DATE": "2025-01-01" }]"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        let readings = source.load_readings().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].salinity, 34.3);
    }

    #[tokio::test]
    async fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new("/nonexistent/float-dashboard.json");
        assert!(source.load_readings().await.is_err());
    }
}
