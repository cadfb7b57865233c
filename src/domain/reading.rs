// Reading domain model
use super::error::DashboardError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub type FloatId = i64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub float_id: FloatId,
    pub temperature: f64,
    pub salinity: f64,
    pub pressure: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
}

impl Reading {
    pub fn new(
        float_id: FloatId,
        temperature: f64,
        salinity: f64,
        pressure: f64,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            float_id,
            temperature,
            salinity,
            pressure,
            latitude,
            longitude,
            date,
        }
    }

    pub fn value_of(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Salinity => self.salinity,
            Parameter::Pressure => self.pressure,
        }
    }
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> Result<NaiveDate, DashboardError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| {
        DashboardError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

/// One of the measurable fields the user can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    #[default]
    Temperature,
    Salinity,
    Pressure,
}

impl Parameter {
    pub const ALL: [Parameter; 3] = [
        Parameter::Temperature,
        Parameter::Salinity,
        Parameter::Pressure,
    ];

    /// Column key used by the float data files
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::Temperature => "TEMP",
            Parameter::Salinity => "PSAL",
            Parameter::Pressure => "PRES",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Temperature => "Temperature",
            Parameter::Salinity => "Salinity",
            Parameter::Pressure => "Pressure",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Temperature => "°C",
            Parameter::Salinity => "PSU",
            Parameter::Pressure => "dbar",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for Parameter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temp" => Ok(Parameter::Temperature),
            "salinity" | "psal" => Ok(Parameter::Salinity),
            "pressure" | "pres" => Ok(Parameter::Pressure),
            _ => Err(DashboardError::UnknownParameter(s.trim().to_string())),
        }
    }
}
