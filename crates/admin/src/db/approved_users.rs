//! Approved-user repository backed by MongoDB.

use bson::{Document, doc};
use chrono::{DateTime, Utc};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use aegis_core::{AdminUserId, AdminUsername, UserRole};

use super::{ApprovedUserStore, RepositoryError};
use crate::models::NewAdminUser;

// =============================================================================
// Document Types
// =============================================================================

/// Stored shape of an approved user.
///
/// Field names are camelCase to match the documents the Aegis backend reads.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApprovedUserDocument {
    username: String,
    password: String,
    email: String,
    role: UserRole,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    approved_at: DateTime<Utc>,
}

impl From<&NewAdminUser> for ApprovedUserDocument {
    fn from(user: &NewAdminUser) -> Self {
        Self {
            username: user.username.as_str().to_owned(),
            password: user.password.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
            approved_at: user.approved_at,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for the `approved_users` collection.
#[derive(Debug, Clone)]
pub struct MongoApprovedUserStore {
    collection: Collection<ApprovedUserDocument>,
}

impl MongoApprovedUserStore {
    /// Collection holding approved users.
    pub const COLLECTION: &'static str = "approved_users";

    /// Create a repository over `database`.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(Self::COLLECTION),
        }
    }
}

impl ApprovedUserStore for MongoApprovedUserStore {
    async fn find_by_username(
        &self,
        username: &AdminUsername,
    ) -> Result<Option<AdminUserId>, RepositoryError> {
        // Other services write to this collection too, so only the _id is
        // projected instead of decoding the full document shape.
        let existing = self
            .collection
            .clone_with_type::<Document>()
            .find_one(doc! { "username": username.as_str() })
            .projection(doc! { "_id": 1 })
            .await?;

        existing
            .map(|document| {
                document.get("_id").map(AdminUserId::from).ok_or_else(|| {
                    RepositoryError::DataCorruption(format!(
                        "approved user '{username}' has no _id"
                    ))
                })
            })
            .transpose()
    }

    async fn insert(&self, user: &NewAdminUser) -> Result<AdminUserId, RepositoryError> {
        let document = ApprovedUserDocument::from(user);
        let result = self.collection.insert_one(&document).await?;

        Ok(AdminUserId::from(&result.inserted_id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn new_admin() -> NewAdminUser {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
        NewAdminUser {
            username: AdminUsername::derive("ops").unwrap(),
            password: "s3cret".to_string(),
            email: "ops@aegis.io".to_string(),
            role: UserRole::Admin,
            created_at: now,
            approved_at: now,
        }
    }

    #[test]
    fn test_document_field_names_and_types() {
        let document = bson::to_document(&ApprovedUserDocument::from(&new_admin())).unwrap();

        assert_eq!(document.get_str("username").unwrap(), "ops_admin");
        assert_eq!(document.get_str("password").unwrap(), "s3cret");
        assert_eq!(document.get_str("email").unwrap(), "ops@aegis.io");
        assert_eq!(document.get_str("role").unwrap(), "admin");
        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("created_at"));
    }

    #[test]
    fn test_timestamps_are_bson_datetimes() {
        let user = new_admin();
        let document = bson::to_document(&ApprovedUserDocument::from(&user)).unwrap();

        let created = document.get_datetime("createdAt").unwrap();
        let approved = document.get_datetime("approvedAt").unwrap();
        assert_eq!(created, approved);
        assert_eq!(created.to_chrono(), user.created_at);
    }

    #[test]
    fn test_document_decodes_back() {
        let document = bson::to_document(&ApprovedUserDocument::from(&new_admin())).unwrap();
        let decoded: ApprovedUserDocument = bson::from_document(document).unwrap();
        assert_eq!(decoded.role, UserRole::Admin);
        assert_eq!(decoded.username, "ops_admin");
    }
}
