//! Admin user domain types.
//!
//! These types carry a provisioning request from the CLI down to the store.

use chrono::{DateTime, Utc};
use secrecy::SecretString;

use aegis_core::{AdminUserId, AdminUsername, UserRole};

use crate::error::ProvisionError;
use crate::services::password::PasswordStorage;

/// Email stored when the operator does not supply one.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

/// An operator's request to provision an admin account.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminRequest {
    /// Derived admin username (`<input>_admin`).
    pub username: AdminUsername,
    /// Password exactly as the operator typed it.
    pub password: SecretString,
    /// Contact email, stored verbatim.
    pub email: String,
    /// How the password is written to the store.
    pub password_storage: PasswordStorage,
}

impl std::fmt::Debug for AdminRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .field("password_storage", &self.password_storage)
            .finish()
    }
}

impl AdminRequest {
    /// Build a request from raw CLI input.
    ///
    /// The email falls back to [`DEFAULT_ADMIN_EMAIL`]. The password is kept
    /// in plaintext form; use [`AdminRequest::with_password_storage`] to hash it.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::Username` if the base username is blank.
    pub fn new(
        username: &str,
        password: impl Into<String>,
        email: Option<String>,
    ) -> Result<Self, ProvisionError> {
        Ok(Self {
            username: AdminUsername::derive(username)?,
            password: SecretString::from(password.into()),
            email: email.unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            password_storage: PasswordStorage::default(),
        })
    }

    /// Select how the password is stored.
    #[must_use]
    pub fn with_password_storage(mut self, storage: PasswordStorage) -> Self {
        self.password_storage = storage;
        self
    }
}

/// A fully-resolved admin record ready to be inserted.
///
/// Implements `Debug` manually to redact the stored password.
#[derive(Clone)]
pub struct NewAdminUser {
    /// Derived admin username.
    pub username: AdminUsername,
    /// Password as it will be stored (plaintext or bcrypt hash).
    pub password: String,
    /// Contact email.
    pub email: String,
    /// Always [`UserRole::Admin`] for provisioned accounts.
    pub role: UserRole,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the account was approved; provisioned admins are approved on creation.
    pub approved_at: DateTime<Utc>,
}

impl std::fmt::Debug for NewAdminUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAdminUser")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .field("approved_at", &self.approved_at)
            .finish()
    }
}

/// An admin account that was just inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAdmin {
    /// Database ID of the new document.
    pub id: AdminUserId,
    /// Stored username.
    pub username: AdminUsername,
    /// Stored email.
    pub email: String,
    /// Stored role.
    pub role: UserRole,
}

/// Result of a successful provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// An account with the derived username was already present; nothing was written.
    AlreadyExists {
        /// The username that was looked up.
        username: AdminUsername,
        /// ID of the existing document.
        id: AdminUserId,
    },
    /// A new account was inserted.
    Created(CreatedAdmin),
}

impl ProvisionOutcome {
    /// Returns the admin username this outcome refers to.
    #[must_use]
    pub const fn username(&self) -> &AdminUsername {
        match self {
            Self::AlreadyExists { username, .. } => username,
            Self::Created(created) => &created.username,
        }
    }
}
