use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub artifacts: ArtifactSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Paths of the fitted artifacts loaded at startup
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactSettings {
    #[serde(default = "default_scaler_path")]
    pub scaler_path: String,
    #[serde(default = "default_model_path")]
    pub model_path: String,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            scaler_path: default_scaler_path(),
            model_path: default_model_path(),
        }
    }
}

fn default_scaler_path() -> String {
    "artifacts/scaler.json".to_string()
}

fn default_model_path() -> String {
    "artifacts/calorie_model.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with FITNESS__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with FITNESS__)
            // e.g., FITNESS__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FITNESS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Substitute well-known environment variables in config values
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FITNESS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Substitute artifact path overrides from plain environment variables
///
/// Deployments that mount the artifacts elsewhere set SCALER_PATH and
/// MODEL_PATH directly; the prefixed forms also work.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let scaler_path = env::var("SCALER_PATH")
        .or_else(|_| env::var("FITNESS__ARTIFACTS__SCALER_PATH"))
        .ok();
    let model_path = env::var("MODEL_PATH")
        .or_else(|_| env::var("FITNESS__ARTIFACTS__MODEL_PATH"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(path) = scaler_path {
        builder = builder.set_override("artifacts.scaler_path", path)?;
    }
    if let Some(path) = model_path {
        builder = builder.set_override("artifacts.model_path", path)?;
    }

    builder.build()
}
