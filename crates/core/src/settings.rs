//! Command-line client settings
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `GALLERY_*` environment variables.

use crate::error::{CoreError, CoreResult};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "GALLERY";

/// Trait for validating loaded settings
pub trait ValidateConfig {
    fn validate(&self) -> Result<(), ConfigError>;
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the data and mutation services
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bearer credential from a previous sign-in
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Settings {
    /// Load from `path` (if given) and the process environment
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        Self::load_with_env(path, environment())
    }

    /// Load with an explicit environment source
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> CoreResult<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).map_err(invalid)?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Self = builder
            .add_source(env)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(invalid)?;

        settings.validate().map_err(invalid)?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured token, ignoring blank values
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}

impl ValidateConfig for Settings {
    fn validate(&self) -> Result<(), ConfigError> {
        validators::validate_not_empty(&self.api_url, "api_url")?;
        validators::validate_http_url(&self.api_url, "api_url")?;
        validators::validate_range(self.timeout_secs, 1, 600, "timeout_secs")
    }
}

/// `GALLERY_API_URL` style variables
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn invalid(err: ConfigError) -> CoreError {
    CoreError::invalid_config(err.to_string())
}

/// Common validation helpers
pub mod validators {
    use config::ConfigError;

    pub fn validate_not_empty(value: &str, field: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::Message(format!("{field}: cannot be empty")));
        }
        Ok(())
    }

    pub fn validate_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "{field}: must start with http:// or https://"
            )));
        }
        Ok(())
    }

    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<(), ConfigError> {
        if value < min || value > max {
            return Err(ConfigError::Message(format!(
                "{field}: must be between {min} and {max}"
            )));
        }
        Ok(())
    }
}
