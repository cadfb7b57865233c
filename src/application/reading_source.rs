// Source trait for the session's reading set
use crate::domain::reading::Reading;
use async_trait::async_trait;

/// Supplies the readings a session works on. Called once at startup; the
/// result is never reloaded or mutated.
#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Short human-readable name, used in logs
    fn describe(&self) -> String;

    async fn load_readings(&self) -> anyhow::Result<Vec<Reading>>;
}
