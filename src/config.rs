use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    /// `0` lets the OS pick a free port.
    pub port: u16,
}

/// Defaults, overridden by an optional `configuration` file in the working directory,
/// overridden in turn by `APP_`-prefixed environment variables (`APP_APPLICATION__PORT=9000`).
pub fn get_configuration() -> Result<Settings, ConfigError> {
    Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 8000)?
        .set_default("log_level", "info")?
        .add_source(File::with_name("configuration").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
