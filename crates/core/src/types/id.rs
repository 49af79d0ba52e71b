//! Identifier of a stored approved-user document.

/// Database-assigned ID of an approved user.
///
/// Held as the hex form of the document's `_id` so that code outside the
/// storage layer never depends on BSON types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdminUserId(String);

impl AdminUserId {
    /// Create an ID from its string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AdminUserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

// BSON support (with mongodb feature)
#[cfg(feature = "mongodb")]
impl From<bson::oid::ObjectId> for AdminUserId {
    fn from(oid: bson::oid::ObjectId) -> Self {
        Self(oid.to_hex())
    }
}

#[cfg(feature = "mongodb")]
impl From<&bson::Bson> for AdminUserId {
    fn from(value: &bson::Bson) -> Self {
        match value {
            bson::Bson::ObjectId(oid) => Self::from(*oid),
            bson::Bson::String(s) => Self(s.clone()),
            other => Self(other.to_string()),
        }
    }
}
