//! Integration tests for Aegis admin provisioning.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aegis-integration-tests
//! ```
//!
//! The tests drive the provisioner against [`InMemoryApprovedUsers`], so no
//! MongoDB server is needed.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use aegis_admin::db::{ApprovedUserStore, RepositoryError};
use aegis_admin::models::NewAdminUser;
use aegis_core::{AdminUserId, AdminUsername};

/// In-memory stand-in for the `approved_users` collection.
///
/// Like the real collection it has no unique index: inserting the same
/// username twice stores two records.
#[derive(Debug, Default)]
pub struct InMemoryApprovedUsers {
    records: Mutex<Vec<(AdminUserId, NewAdminUser)>>,
    lookups: AtomicUsize,
}

impl InMemoryApprovedUsers {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `user`.
    #[must_use]
    pub fn with_existing(user: NewAdminUser) -> Self {
        let store = Self::new();
        store.push(user);
        store
    }

    /// Snapshot of every stored record, in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<NewAdminUser> {
        self.lock().iter().map(|(_, user)| user.clone()).collect()
    }

    /// Number of username lookups performed so far.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn push(&self, user: NewAdminUser) -> AdminUserId {
        let mut records = self.lock();
        let id = AdminUserId::new(format!("{:024x}", records.len() + 1));
        records.push((id.clone(), user));
        id
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(AdminUserId, NewAdminUser)>> {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ApprovedUserStore for InMemoryApprovedUsers {
    async fn find_by_username(
        &self,
        username: &AdminUsername,
    ) -> Result<Option<AdminUserId>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .lock()
            .iter()
            .find(|(_, user)| &user.username == username)
            .map(|(id, _)| id.clone()))
    }

    async fn insert(&self, user: &NewAdminUser) -> Result<AdminUserId, RepositoryError> {
        Ok(self.push(user.clone()))
    }
}
