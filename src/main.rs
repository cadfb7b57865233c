// Main entry point - Dependency injection and console setup
use std::path::PathBuf;

use anyhow::Context;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use float_dashboard::application::dashboard_service::DashboardService;
use float_dashboard::application::view_sync::ViewSync;
use float_dashboard::domain::reading::Parameter;
use float_dashboard::domain::reading_set::ReadingSet;
use float_dashboard::infrastructure::config::{load_dashboard_config, load_dashboard_config_from};
use float_dashboard::infrastructure::json_renderer::JsonRenderer;
use float_dashboard::infrastructure::source_factory::build_source;
use float_dashboard::presentation::console::run_console;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries rendered views
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,float_dashboard=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration, optionally from an explicit path
    let config = match std::env::args().nth(1) {
        Some(path) => load_dashboard_config_from(&PathBuf::from(path))?,
        None => load_dashboard_config()?,
    };
    let initial: Parameter = config
        .initial_parameter
        .parse()
        .context("Invalid initial_parameter in configuration")?;

    // Load the session's readings once
    let source = build_source(&config.source)?;
    let readings = source
        .load_readings()
        .await
        .with_context(|| format!("Failed to load readings from {}", source.describe()))?;
    if readings.is_empty() {
        tracing::warn!("Reading set is empty; averages and date range are undefined");
    }
    tracing::info!("Loaded {} readings from {}", readings.len(), source.describe());

    // Wire the service to the renderer
    let service =
        DashboardService::new(ReadingSet::new(readings), config.labels.clone()).with_parameter(initial);
    tracing::info!(
        floats = service.float_ids().len(),
        parameter = %initial,
        "Dashboard ready"
    );

    let mut sync = ViewSync::wire(service, JsonRenderer::new(std::io::stdout()), &config.views);
    sync.render_all()?;

    let stdin = BufReader::new(tokio::io::stdin());
    run_console(&mut sync, stdin, &config).await
}
