// Console event loop - the parameter selector control surface
use crate::application::renderer::DashboardRenderer;
use crate::application::view_sync::ViewSync;
use crate::infrastructure::config::DashboardConfig;
use crate::presentation::handlers::{handle_command, parse_command, Outcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Read commands line by line until `quit` or end of input.
pub async fn run_console<R, I>(
    sync: &mut ViewSync<R>,
    mut input: I,
    config: &DashboardConfig,
) -> anyhow::Result<()>
where
    R: DashboardRenderer,
    I: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Ignoring console line: {}", e);
                continue;
            }
        };
        let Some(command) = parse_command(line) else {
            continue;
        };
        tracing::debug!(?command, "Console command");

        if handle_command(command, sync, config)? == Outcome::Quit {
            break;
        }
    }

    tracing::info!("Console closed");
    Ok(())
}
