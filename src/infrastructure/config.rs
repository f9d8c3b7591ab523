use crate::domain::selection::Role;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config/monitor";
pub const ENV_PREFIX: &str = "MONITOR";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MonitorConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatasetSettings {
    /// Dataset file; the built-in sample is used when absent
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionSettings {
    #[serde(default)]
    pub role: Role,
    pub active_enterprise_id: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Layered load: optional config file, then `MONITOR__SECTION__KEY` env overrides.
pub fn load_monitor_config(path: Option<&str>) -> anyhow::Result<MonitorConfig> {
    load_with_env_prefix(path, ENV_PREFIX)
}

fn load_with_env_prefix(path: Option<&str>, env_prefix: &str) -> anyhow::Result<MonitorConfig> {
    let file = match path {
        Some(path) => config::File::with_name(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_PATH).required(false),
    };

    let settings = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
