// Record shape shared by the JSON and CSV float data files
use crate::domain::error::DashboardError;
use crate::domain::reading::{parse_date, FloatId, Reading};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FloatRecord {
    #[serde(rename = "FLOAT_ID")]
    pub float_id: FloatId,
    #[serde(rename = "TEMP")]
    pub temperature: f64,
    #[serde(rename = "PSAL")]
    pub salinity: f64,
    #[serde(rename = "PRES")]
    pub pressure: f64,
    #[serde(rename = "LAT")]
    pub latitude: f64,
    #[serde(rename = "LON")]
    pub longitude: f64,
    #[serde(rename = "DATE")]
    pub date: String,
}

impl FloatRecord {
    /// False when any measurement or coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        [
            self.temperature,
            self.salinity,
            self.pressure,
            self.latitude,
            self.longitude,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    pub fn into_reading(self) -> Result<Reading, DashboardError> {
        let date = parse_date(&self.date)?;
        Ok(Reading::new(
            self.float_id,
            self.temperature,
            self.salinity,
            self.pressure,
            self.latitude,
            self.longitude,
            date,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_json() {
        let record: FloatRecord = serde_json::from_str(
            r#"{ "FLOAT_ID": 7902246, "TEMP": 28.7, "PSAL": 34.6, "PRES": 10, "LAT": -1.0, "LON": 78.3, "DATE": "2025-01-01" }"#,
        )
        .unwrap();

        let reading = record.into_reading().unwrap();
        assert_eq!(reading.float_id, 7902246);
        assert_eq!(reading.pressure, 10.0);
        assert_eq!(reading.date.to_string(), "2025-01-01");
    }

    #[test]
    fn test_record_is_finite() {
        let mut record: FloatRecord = serde_json::from_str(
            r#"{ "FLOAT_ID": 1, "TEMP": 1, "PSAL": 1, "PRES": 1, "LAT": 0, "LON": 0, "DATE": "2025-01-01" }"#,
        )
        .unwrap();
        assert!(record.is_finite());

        record.salinity = f64::NAN;
        assert!(!record.is_finite());
    }

    #[test]
    fn test_record_with_bad_date() {
        let record: FloatRecord = serde_json::from_str(
            r#"{ "FLOAT_ID": 1, "TEMP": 1, "PSAL": 1, "PRES": 1, "LAT": 0, "LON": 0, "DATE": "Jan 1 2025" }"#,
        )
        .unwrap();

        assert!(matches!(
            record.into_reading(),
            Err(DashboardError::InvalidDate { .. })
        ));
    }
}
