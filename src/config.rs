//! Server configuration.
//!
//! Values come from an optional `config/default.yaml` and are overridden by
//! environment variables (`DATABASE_URL`, `APP_PORT`, `API_KEY`, ...). A
//! `.env` file is honoured when present.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3003;

/// Fatal configuration problems detected before the server starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing database configuration: set DATABASE_URL")]
    MissingDatabaseUrl,
    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

/// Configuration options for the catalog service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub app_port: u16,
    /// Shared secret gating the API. Unset or empty disables the check.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Directory uploaded images are written to and served from.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    /// When false, submitted files are ignored and `/uploads` is not served.
    #[serde(default = "default_uploads_enabled")]
    pub uploads_enabled: bool,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_uploads_enabled() -> bool {
    true
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

impl ServerConfig {
    /// Loads configuration from `config/default.yaml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Environment::default())
    }

    /// Loads configuration with `environment` layered over
    /// `config/default.yaml`.
    ///
    /// Environment values stay strings until deserialization so that a
    /// secret such as `007` is not reparsed as a number.
    pub fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(environment)
            .build()?;
        settings.try_deserialize::<Self>()?.validated()
    }

    /// Rejects configurations the server cannot start with.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.api_key.as_deref().is_some_and(|key| key.is_empty()) {
            self.api_key = None;
        }
        Ok(self)
    }

    /// The configured shared secret, if the check is enabled.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ServerConfig {
        ServerConfig {
            database_url: "catalog.db".into(),
            bind_address: default_bind_address(),
            app_port: DEFAULT_PORT,
            api_key: None,
            upload_dir: default_upload_dir(),
            uploads_enabled: true,
            templates_dir: default_templates_dir(),
        }
    }

    #[test]
    fn missing_database_url_is_fatal() {
        let config = ServerConfig {
            database_url: "  ".into(),
            ..sample()
        };
        assert!(matches!(
            config.validated(),
            Err(ConfigError::MissingDatabaseUrl)
        ));
    }

    #[test]
    fn empty_api_key_disables_the_check() {
        let config = ServerConfig {
            api_key: Some(String::new()),
            ..sample()
        }
        .validated()
        .unwrap();
        assert_eq!(config.api_key(), None);
    }

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let vars: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::default().source(Some(vars))
    }

    #[test]
    fn numeric_looking_api_key_is_loaded_verbatim() {
        for key in ["007", "1e3", "0x10"] {
            let config = ServerConfig::load_with(environment(&[
                ("DATABASE_URL", "catalog.db"),
                ("API_KEY", key),
            ]))
            .unwrap();
            assert_eq!(config.api_key(), Some(key));
        }
    }

    #[test]
    fn typed_values_are_parsed_from_environment_strings() {
        let config = ServerConfig::load_with(environment(&[
            ("DATABASE_URL", "catalog.db"),
            ("APP_PORT", "8080"),
            ("UPLOADS_ENABLED", "false"),
        ]))
        .unwrap();
        assert_eq!(config.app_port, 8080);
        assert!(!config.uploads_enabled);
        assert_eq!(config.database_url, "catalog.db");
    }

    #[test]
    fn load_without_database_url_fails() {
        let result = ServerConfig::load_with(environment(&[("API_KEY", "secret")]));
        assert!(matches!(result, Err(ConfigError::MissingDatabaseUrl)));
    }

    #[test]
    fn keeps_configured_api_key() {
        let config = ServerConfig {
            api_key: Some("secret".into()),
            ..sample()
        }
        .validated()
        .unwrap();
        assert_eq!(config.api_key(), Some("secret"));
    }
}
