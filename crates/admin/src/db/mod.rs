//! Database operations for the Aegis user store.
//!
//! # Database: `fraud_detection` (configurable via `MONGO_DB_NAME`)
//!
//! ## Collections
//!
//! - `approved_users` - Users allowed to sign in, including admins
//!
//! The collection is shared with the Aegis backend; this crate only ever
//! reads by `username` and inserts new admin documents.

pub mod approved_users;

use std::future::Future;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, Tls, TlsOptions};
use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use thiserror::Error;

use aegis_core::{AdminUserId, AdminUsername};

use crate::config::MongoConfig;
use crate::models::NewAdminUser;

pub use approved_users::MongoApprovedUserStore;

/// Name reported to the server in the connection handshake.
const APP_NAME: &str = "aegis-create-admin";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Error from the MongoDB driver (connection, auth, query or write).
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Storage operations the provisioner needs from the user store.
pub trait ApprovedUserStore {
    /// Look up an existing user by exact username match.
    ///
    /// Returns the document's ID if one exists.
    fn find_by_username(
        &self,
        username: &AdminUsername,
    ) -> impl Future<Output = Result<Option<AdminUserId>, RepositoryError>> + Send;

    /// Insert a new admin document and return its ID.
    fn insert(
        &self,
        user: &NewAdminUser,
    ) -> impl Future<Output = Result<AdminUserId, RepositoryError>> + Send;
}

/// Open a client and verify the server is reachable.
///
/// Applies the configured server-selection timeout and CA bundle, then
/// issues a `ping` so that bad credentials or an unreachable cluster fail
/// here rather than on the first query.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the connection string is invalid
/// or the server cannot be reached within the timeout.
pub async fn connect(config: &MongoConfig) -> Result<Database, RepositoryError> {
    let mut options = ClientOptions::parse(config.url.expose_secret()).await?;
    options.app_name = Some(APP_NAME.to_string());
    options.server_selection_timeout = Some(config.server_selection_timeout);

    if let Some(ca_file) = &config.tls_ca_file {
        tracing::debug!(ca_file = %ca_file.display(), "Using custom CA bundle");
        options.tls = Some(Tls::Enabled(
            TlsOptions::builder().ca_file_path(ca_file.clone()).build(),
        ));
    }

    let client = Client::with_options(options)?;
    client.database("admin").run_command(doc! { "ping": 1 }).await?;

    Ok(client.database(&config.database))
}
