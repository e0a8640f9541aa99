use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// JSON fixture to load; the bundled fixture is used when unset
    pub fixture_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_states")]
    pub default_states: Vec<String>,
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_states: default_states(),
            default_sort: default_sort(),
            page_size: default_page_size(),
        }
    }
}

fn default_states() -> Vec<String> {
    ["NJ", "MI", "PA", "WV"].iter().map(|s| s.to_string()).collect()
}

fn default_sort() -> String { "priority".to_string() }

fn default_page_size() -> usize { 10 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment specific overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `GAMBIT_SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("GAMBIT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
