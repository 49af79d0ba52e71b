//! Unified error handling for admin provisioning.

use thiserror::Error;

use aegis_core::UsernameError;

use crate::config::ConfigError;
use crate::db::RepositoryError;

/// Anything that can stop an admin account from being provisioned.
///
/// The CLI reports every variant the same way; the variants exist for
/// logging and tests.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Connection settings are missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Connecting, looking up or inserting failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// The supplied username cannot produce an admin name.
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    /// Hashing the password failed.
    #[error("Password hashing failed: {0}")]
    Password(#[from] bcrypt::BcryptError),
}
