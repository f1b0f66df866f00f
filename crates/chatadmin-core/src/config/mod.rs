//! Application configuration schemas.
//!
//! Configuration is deserialized from TOML files via the `config` crate.
//! A `default` file carries the production values and an environment
//! overlay (`config/{env}.toml`) plus `CHATADMIN`-prefixed environment
//! variables can override them.

pub mod logging;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub use self::logging::LoggingConfig;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote plugin API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote plugin API settings.
///
/// The chat-bot plugin exposes its admin endpoints under a REST namespace;
/// a development install overrides `base_url` through the environment
/// overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the plugin REST namespace, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `CHATADMIN__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CHATADMIN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_base_url() -> String {
    "https://wpbulgaria.com/wp-json/wpb-chatbot/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}
