//! MongoDB configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MONGO_URL` - MongoDB connection string (may embed credentials)
//!
//! ## Optional
//! - `MONGO_DB_NAME` - Database name (default: `fraud_detection`)
//! - `MONGO_TLS_CA_FILE` - PEM bundle of trusted CA certificates
//! - `MONGO_SERVER_SELECTION_TIMEOUT_MS` - Server selection timeout (default: 10000)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Database used when `MONGO_DB_NAME` is unset.
pub const DEFAULT_DATABASE: &str = "fraud_detection";

const DEFAULT_SERVER_SELECTION_TIMEOUT_MS: u64 = 10_000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Connection settings for the Aegis user store.
///
/// Implements `Debug` manually to redact the connection string.
#[derive(Clone)]
pub struct MongoConfig {
    /// MongoDB connection string (may contain a password)
    pub url: SecretString,
    /// Database holding the `approved_users` collection
    pub database: String,
    /// Trusted CA bundle; the driver's built-in roots are used when unset
    pub tls_ca_file: Option<PathBuf>,
    /// How long the driver waits for a suitable server
    pub server_selection_timeout: Duration,
}

impl std::fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoConfig")
            .field("url", &"[REDACTED]")
            .field("database", &self.database)
            .field("tls_ca_file", &self.tls_ca_file)
            .field("server_selection_timeout", &self.server_selection_timeout)
            .finish()
    }
}

impl MongoConfig {
    /// Build configuration from a variable lookup, usually `std::env::var`.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `MONGO_URL` is missing or an optional
    /// variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let url = get("MONGO_URL")
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingEnvVar("MONGO_URL".to_string()))?;
        let database = get("MONGO_DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let tls_ca_file = get("MONGO_TLS_CA_FILE").map(PathBuf::from);
        let timeout_ms = match get("MONGO_SERVER_SELECTION_TIMEOUT_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "MONGO_SERVER_SELECTION_TIMEOUT_MS".to_string(),
                    e.to_string(),
                )
            })?,
            None => DEFAULT_SERVER_SELECTION_TIMEOUT_MS,
        };

        Ok(Self {
            url,
            database,
            tls_ca_file,
            server_selection_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
