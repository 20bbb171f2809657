//! Configuration management for the library server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Selects `dev_url` over `prod_url`
    pub development_mode: bool,
    pub dev_url: Option<String>,
    pub prod_url: Option<String>,
    /// Directory holding the fallback SQLite file
    pub data_dir: String,
    pub max_connections: u32,
    /// Log every SQL statement
    pub echo: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Nested keys use a double underscore: LIBRARY_SERVER__PORT
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "database.development_mode",
                env::var("DEVELOPMENT_MODE").ok().map(|v| parse_flag(&v)),
            )?
            .set_override_option("database.dev_url", env::var("DEV_DATABASE_URL").ok())?
            .set_override_option("database.prod_url", env::var("PROD_DATABASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

/// Only a case-insensitive "true" enables a flag.
fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            development_mode: false,
            dev_url: None,
            prod_url: None,
            data_dir: "/app/data".to_string(),
            max_connections: 5,
            echo: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
