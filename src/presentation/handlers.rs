// Console command handlers
use crate::application::renderer::DashboardRenderer;
use crate::application::view_sync::{Feature, ViewSync};
use crate::domain::error::DashboardError;
use crate::domain::reading::Parameter;
use crate::domain::view::StatsSummary;
use crate::infrastructure::config::DashboardConfig;

const HELP: &str = "\
commands:
  temperature | salinity | pressure   select a parameter (TEMP, PSAL, PRES also work)
  select <parameter>                  same as above
  show                                re-render every view
  stats                               re-render the stats bar
  config                              print the effective configuration
  help                                this message
  quit                                leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(String),
    Show,
    Stats,
    Config,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Parse one console line. Blank lines yield `None`; any other single
/// word is treated as a parameter selection.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let first = words.next()?;

    let command = match first.to_lowercase().as_str() {
        "select" | "param" | "parameter" => Command::Select(words.collect::<Vec<_>>().join(" ")),
        "show" | "render" => Command::Show,
        "stats" => Command::Stats,
        "config" => Command::Config,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Select(line.trim().to_string()),
    };
    Some(command)
}

pub fn stats_report(stats: &StatsSummary) -> String {
    format!(
        "floats: {}  readings: {}  dates: {} - {}\n\
         temperature: avg {}, range {}\n\
         salinity: avg {}, range {}\n\
         pressure: avg {}, range {}",
        stats.active_floats,
        stats.data_points,
        stats.date_from,
        stats.date_to,
        stats.avg_temperature,
        stats.temperature_range,
        stats.avg_salinity,
        stats.salinity_range,
        stats.avg_pressure,
        stats.pressure_range
    )
}

pub fn handle_command<R: DashboardRenderer>(
    command: Command,
    sync: &mut ViewSync<R>,
    config: &DashboardConfig,
) -> anyhow::Result<Outcome> {
    match command {
        Command::Select(value) => match sync.on_parameter_change(&value) {
            Ok(dashboard) => {
                tracing::info!("Selected {}", dashboard.parameter);
            }
            Err(e @ DashboardError::UnknownParameter(_)) => {
                tracing::error!("{}", e);
                eprintln!("{}", HELP);
            }
            Err(e) => {
                tracing::error!("{}", e);
            }
        },
        Command::Show => {
            if let Err(e) = sync.render_all() {
                tracing::error!("{}", e);
            }
        }
        Command::Stats => {
            if !sync.is_wired(Feature::Stats) {
                tracing::warn!("Stats bar is not wired");
            } else {
                eprintln!("{}", stats_report(&sync.dashboard().stats));
            }
        }
        Command::Config => eprintln!("{}", config.to_toml()?),
        Command::Help => {
            let options: Vec<String> = Parameter::ALL.iter().map(|p| p.to_string()).collect();
            eprintln!("{}\ncurrent: {} (options: {})", HELP, sync.dashboard().parameter, options.join(", "));
        }
        Command::Quit => return Ok(Outcome::Quit),
    }

    Ok(Outcome::Continue)
}
