//! Admin account provisioning.
//!
//! Provisioning is check-then-insert: if `<username>_admin` is already in
//! `approved_users` the run succeeds without writing anything. Two runs racing
//! on the same name can both pass the check and both insert.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use aegis_core::{Email, UserRole};

use crate::config::MongoConfig;
use crate::db::{self, ApprovedUserStore, MongoApprovedUserStore};
use crate::error::ProvisionError;
use crate::models::{AdminRequest, CreatedAdmin, NewAdminUser, ProvisionOutcome};

/// Create an admin account using configuration from the environment.
///
/// Loads `.env` if present, then reads the process environment.
///
/// # Errors
///
/// Returns `ProvisionError` if configuration is missing, the database is
/// unreachable, or the lookup or insert fails.
pub async fn create_admin_user(request: &AdminRequest) -> Result<ProvisionOutcome, ProvisionError> {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    create_admin_user_from(|key| std::env::var(key).ok(), request).await
}

/// Create an admin account using configuration read through `lookup`.
///
/// Configuration is resolved before any connection is attempted, so a
/// missing `MONGO_URL` fails without touching the network.
///
/// # Errors
///
/// Same as [`create_admin_user`].
pub async fn create_admin_user_from<F>(
    lookup: F,
    request: &AdminRequest,
) -> Result<ProvisionOutcome, ProvisionError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = MongoConfig::from_lookup(lookup)?;
    create_admin_user_with(&config, request).await
}

/// Create an admin account against an explicit configuration.
///
/// # Errors
///
/// Same as [`create_admin_user`], minus configuration loading.
pub async fn create_admin_user_with(
    config: &MongoConfig,
    request: &AdminRequest,
) -> Result<ProvisionOutcome, ProvisionError> {
    info!(database = %config.database, "Connecting to MongoDB...");
    let database = db::connect(config).await?;
    let store = MongoApprovedUserStore::new(&database);

    provision_admin(&store, request, Utc::now()).await
}

/// Create an admin account in `store` unless one already exists.
///
/// Both `createdAt` and `approvedAt` are set to `now`.
///
/// # Errors
///
/// Returns `ProvisionError::Database` if the lookup or insert fails and
/// `ProvisionError::Password` if hashing fails.
pub async fn provision_admin<S>(
    store: &S,
    request: &AdminRequest,
    now: DateTime<Utc>,
) -> Result<ProvisionOutcome, ProvisionError>
where
    S: ApprovedUserStore,
{
    let username = &request.username;

    if let Some(id) = store.find_by_username(username).await? {
        info!(%username, %id, "Admin user already exists, nothing to do");
        return Ok(ProvisionOutcome::AlreadyExists {
            username: username.clone(),
            id,
        });
    }

    if let Err(e) = Email::parse(&request.email) {
        warn!(email = %request.email, error = %e, "Storing email that does not look valid");
    }

    let user = NewAdminUser {
        username: username.clone(),
        password: request.password_storage.encode(&request.password)?,
        email: request.email.clone(),
        role: UserRole::Admin,
        created_at: now,
        approved_at: now,
    };

    let id = store.insert(&user).await?;
    info!(%username, %id, storage = ?request.password_storage, "Admin user created");

    Ok(ProvisionOutcome::Created(CreatedAdmin {
        id,
        username: user.username,
        email: user.email,
        role: user.role,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use chrono::TimeZone;

    use aegis_core::{AdminUserId, AdminUsername};

    use super::*;
    use crate::db::RepositoryError;
    use crate::services::PasswordStorage;

    #[derive(Default)]
    struct RecordingStore {
        existing: Option<AdminUserId>,
        fail_lookup: bool,
        inserted: Mutex<Vec<NewAdminUser>>,
    }

    impl ApprovedUserStore for RecordingStore {
        async fn find_by_username(
            &self,
            _username: &AdminUsername,
        ) -> Result<Option<AdminUserId>, RepositoryError> {
            if self.fail_lookup {
                return Err(RepositoryError::DataCorruption("lookup failed".to_string()));
            }
            Ok(self.existing.clone())
        }

        async fn insert(&self, user: &NewAdminUser) -> Result<AdminUserId, RepositoryError> {
            let mut inserted = self.inserted.lock().unwrap();
            inserted.push(user.clone());
            Ok(AdminUserId::new(format!("id-{}", inserted.len())))
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
    }

    #[tokio::test]
    async fn test_inserts_admin_when_absent() {
        let store = RecordingStore::default();
        let request = AdminRequest::new("ops", "pw", Some("ops@aegis.io".into())).unwrap();

        let outcome = provision_admin(&store, &request, now()).await.unwrap();

        let ProvisionOutcome::Created(created) = outcome else {
            panic!("expected a created outcome");
        };
        assert_eq!(created.id.as_str(), "id-1");
        assert_eq!(created.username.as_str(), "ops_admin");
        assert_eq!(created.role, UserRole::Admin);

        let inserted = store.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        let user = &inserted[0];
        assert_eq!(user.password, "pw");
        assert_eq!(user.email, "ops@aegis.io");
        assert_eq!(user.created_at, now());
        assert_eq!(user.approved_at, now());
    }

    #[tokio::test]
    async fn test_existing_admin_is_not_rewritten() {
        let store = RecordingStore {
            existing: Some(AdminUserId::new("existing")),
            ..RecordingStore::default()
        };
        let request = AdminRequest::new("ops", "pw", None).unwrap();

        let outcome = provision_admin(&store, &request, now()).await.unwrap();

        assert_eq!(
            outcome,
            ProvisionOutcome::AlreadyExists {
                username: AdminUsername::derive("ops").unwrap(),
                id: AdminUserId::new("existing"),
            }
        );
        assert!(store.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_is_a_database_error() {
        let store = RecordingStore {
            fail_lookup: true,
            ..RecordingStore::default()
        };
        let request = AdminRequest::new("ops", "pw", None).unwrap();

        let err = provision_admin(&store, &request, now()).await.unwrap_err();

        assert!(matches!(err, ProvisionError::Database(_)));
        assert!(store.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bcrypt_storage_hashes_password() {
        let store = RecordingStore::default();
        let request = AdminRequest::new("ops", "pw", None)
            .unwrap()
            .with_password_storage(PasswordStorage::Bcrypt);

        provision_admin(&store, &request, now()).await.unwrap();

        let inserted = store.inserted.lock().unwrap();
        assert_ne!(inserted[0].password, "pw");
        assert!(bcrypt::verify("pw", &inserted[0].password).unwrap());
    }

    async fn provision_through<S: ApprovedUserStore>(
        store: &S,
        request: &AdminRequest,
    ) -> Result<ProvisionOutcome, ProvisionError> {
        provision_admin(store, request, now()).await
    }

    #[tokio::test]
    async fn test_generic_caller_needs_only_store_bound() {
        let store = RecordingStore::default();
        let request = AdminRequest::new("ops", "pw", None).unwrap();

        let outcome = provision_through(&store, &request).await.unwrap();

        assert!(matches!(outcome, ProvisionOutcome::Created(_)));
        assert_eq!(store.inserted.lock().unwrap().len(), 1);
    }
}
