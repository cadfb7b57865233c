use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "FLOAT_DASHBOARD";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_initial_parameter")]
    pub initial_parameter: String,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub views: ViewConfig,
    #[serde(default)]
    pub labels: LabelTemplates,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_parameter: default_initial_parameter(),
            source: SourceSettings::default(),
            views: ViewConfig::default(),
            labels: LabelTemplates::default(),
        }
    }
}

impl DashboardConfig {
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Embedded,
    Json,
    Csv,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SourceSettings {
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Names of the display elements each feature renders into. An empty
/// name means the element is absent.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub parameter_selector: String,
    pub trend_chart: String,
    pub trajectory_chart: String,
    pub comparative_chart: String,
    pub comparative_message: String,
    pub stats_panel: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            parameter_selector: "parameterSelect".to_string(),
            trend_chart: "mainAnalysisChart".to_string(),
            trajectory_chart: "floatTrajectoriesChart".to_string(),
            comparative_chart: "comparativeAnalysisChart".to_string(),
            comparative_message: "comparativeAnalysisMessage".to_string(),
            stats_panel: "statsBar".to_string(),
        }
    }
}

impl ViewConfig {
    /// Look up a handle by its field name, treating blank names as missing.
    pub fn handle(&self, name: &str) -> Option<&str> {
        let value = match name {
            "parameter_selector" => &self.parameter_selector,
            "trend_chart" => &self.trend_chart,
            "trajectory_chart" => &self.trajectory_chart,
            "comparative_chart" => &self.comparative_chart,
            "comparative_message" => &self.comparative_message,
            "stats_panel" => &self.stats_panel,
            _ => return None,
        };
        let value = value.trim();
        (!value.is_empty()).then_some(value)
    }
}

/// Title templates; `${label}` and `${unit}` are replaced with the
/// selected parameter's display label and unit.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LabelTemplates {
    pub trend_title: String,
    pub trend_axis: String,
    pub trajectory_title: String,
    pub comparative_title: String,
    pub comparative_axis: String,
    pub comparative_suppressed: String,
}

impl Default for LabelTemplates {
    fn default() -> Self {
        Self {
            trend_title: "${label} Trend".to_string(),
            trend_axis: "${label} (${unit})".to_string(),
            trajectory_title: "Float Positions".to_string(),
            comparative_title: "Average ${label} by Float".to_string(),
            comparative_axis: "Average ${label} (${unit})".to_string(),
            comparative_suppressed:
                "Comparative analysis needs readings from at least two floats.".to_string(),
        }
    }
}

fn default_initial_parameter() -> String {
    "temperature".to_string()
}

/// Load `config/dashboard.{toml,..}` if present, then `FLOAT_DASHBOARD_*`
/// environment overrides (nested keys separated by `__`).
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    build_config(config::File::with_name("config/dashboard").required(false))
}

pub fn load_dashboard_config_from(path: &Path) -> anyhow::Result<DashboardConfig> {
    build_config(config::File::from(path).required(true))
}

fn build_config<S>(file: S) -> anyhow::Result<DashboardConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${name}` placeholders in a template string
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template() {
        let mut vars = HashMap::new();
        vars.insert("label".to_string(), "Salinity".to_string());
        vars.insert("unit".to_string(), "PSU".to_string());

        let result = render_template("Average ${label} (${unit})", &vars);

        assert_eq!(result, "Average Salinity (PSU)");
    }

    #[test]
    fn test_render_template_leaves_unknown_placeholders() {
        let vars = HashMap::new();
        assert_eq!(render_template("${label} Trend", &vars), "${label} Trend");
    }

    #[test]
    fn test_view_handle_blank_is_missing() {
        let mut views = ViewConfig::default();
        assert_eq!(views.handle("trend_chart"), Some("mainAnalysisChart"));

        views.comparative_message = "  ".to_string();
        assert_eq!(views.handle("comparative_message"), None);
        assert_eq!(views.handle("no_such_view"), None);
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "float-dashboard-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"
initial_parameter = "salinity"

[source]
kind = "csv"
path = "data/floats.csv"

[views]
stats_panel = ""
"#,
        )
        .unwrap();

        let config = load_dashboard_config_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.initial_parameter, "salinity");
        assert_eq!(config.source.kind, SourceKind::Csv);
        assert_eq!(config.source.path, Some(PathBuf::from("data/floats.csv")));
        assert_eq!(config.views.handle("stats_panel"), None);
        assert_eq!(config.views.handle("trend_chart"), Some("mainAnalysisChart"));
        assert_eq!(config.labels.trajectory_title, "Float Positions");
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = std::env::temp_dir().join(format!(
            "float-dashboard-env-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[labels]\ncomparative_title = \"From file\"\n").unwrap();

        // Only keys no other test asserts on are touched here
        unsafe {
            std::env::set_var("FLOAT_DASHBOARD_LABELS__COMPARATIVE_TITLE", "Mean ${label} per float");
            std::env::set_var("FLOAT_DASHBOARD_LABELS__COMPARATIVE_SUPPRESSED", "Single float");
        }
        let config = load_dashboard_config_from(&path);
        unsafe {
            std::env::remove_var("FLOAT_DASHBOARD_LABELS__COMPARATIVE_TITLE");
            std::env::remove_var("FLOAT_DASHBOARD_LABELS__COMPARATIVE_SUPPRESSED");
        }
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.labels.comparative_title, "Mean ${label} per float");
        assert_eq!(config.labels.comparative_suppressed, "Single float");
        assert_eq!(config.labels.trend_axis, "${label} (${unit})");
    }

    #[test]
    fn test_default_config_serializes_to_toml() {
        let rendered = DashboardConfig::default().to_toml().unwrap();
        assert!(rendered.contains("initial_parameter = \"temperature\""));
        assert!(rendered.contains("kind = \"embedded\""));
        assert!(!rendered.contains("path"));
    }
}
