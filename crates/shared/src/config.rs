//! Application configuration management.

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::AppError;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Legacy ERP database (budgets, purchase orders, users).
    pub database: DatabaseConfig,
    /// Attachment store (PDF blobs).
    pub attachments: AttachmentsConfig,
    /// JWT configuration.
    pub jwt: JwtConfig,
    /// Legacy ERP conventions.
    #[serde(default)]
    pub legacy: LegacyConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Attachment store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentsConfig {
    /// Attachment database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Static key expected in the `X-API-Key` header.
    ///
    /// When unset every attachment request is rejected.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl AttachmentsConfig {
    /// Returns the pool settings as a [`DatabaseConfig`].
    #[must_use]
    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.url.clone(),
            max_connections: self.max_connections,
            min_connections: self.min_connections,
        }
    }
}

/// JWT configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token expiration in seconds.
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_secs: u64,
}

fn default_access_token_expiry() -> u64 {
    1800 // 30 minutes
}

/// Conventions of the legacy ERP the API writes into.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyConfig {
    /// IANA timezone used to stamp audit dates and times.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "America/Santiago".to_string()
}

impl LegacyConfig {
    /// Parses the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the name is not a known IANA zone.
    pub fn tz(&self) -> Result<Tz, AppError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| AppError::Validation(format!("invalid timezone '{}': {e}", self.timezone)))
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("APROBACIONES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
