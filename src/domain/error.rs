// Domain errors surfaced by the dashboard core
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown parameter: {0} (expected temperature, salinity or pressure)")]
    UnknownParameter(String),

    #[error("{feature} not wired: display element '{handle}' is missing")]
    MissingView {
        feature: &'static str,
        handle: &'static str,
    },

    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("render error: {0}")]
    Render(String),
}
