use shared_types::{AppConfig, FeatureFlags, ServerConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Safe to call
/// multiple times; only the first call has effect.
///
/// If the file is missing or unparseable, everything falls back to defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| read_config(CONFIG_PATH))
}

fn read_config(path: &str) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let config = parse_config(&contents).unwrap_or_else(|e| {
                tracing::warn!(path, error = %e, "Failed to parse config; using defaults");
                AppConfig::default()
            });
            tracing::info!(features = ?config.features, "Configuration loaded");
            config
        }
        Err(e) => {
            tracing::info!(path, error = %e, "Config file not found; using defaults");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_config()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        docs: false,
    };
    CONFIG.get().map(|c| &c.features).unwrap_or(&DEFAULT)
}

/// Get the `[server]` table. Returns defaults if `load_config()` hasn't been
/// called yet.
pub fn server_config() -> &'static ServerConfig {
    static DEFAULT: OnceLock<ServerConfig> = OnceLock::new();
    CONFIG
        .get()
        .map(|c| &c.server)
        .unwrap_or_else(|| DEFAULT.get_or_init(ServerConfig::default))
}

/// Listener address: `BIND_ADDR` wins over the `[server]` table.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR")
        .ok()
        .filter(|addr| !addr.trim().is_empty())
        .unwrap_or_else(|| server_config().bind_addr())
}
