//! Admin username type.

use core::fmt;

/// Errors that can occur when deriving an [`AdminUsername`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// The base username is empty or whitespace only.
    #[error("username cannot be empty")]
    Empty,
}

/// The stored username of an admin account.
///
/// Admin accounts live in the same collection as regular approved users, so
/// the admin name is always the operator-supplied base name with an `_admin`
/// suffix. The suffix is appended unconditionally; `root_admin` becomes
/// `root_admin_admin`.
///
/// ```
/// use aegis_core::AdminUsername;
///
/// let name = AdminUsername::derive("alice").unwrap();
/// assert_eq!(name.as_str(), "alice_admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdminUsername(String);

impl AdminUsername {
    /// Suffix appended to every admin account name.
    pub const SUFFIX: &'static str = "_admin";

    /// Derive the admin username from an operator-supplied base name.
    ///
    /// The base is used exactly as given, surrounding whitespace included.
    ///
    /// # Errors
    ///
    /// Returns [`UsernameError::Empty`] if the base is empty or whitespace only.
    pub fn derive(base: &str) -> Result<Self, UsernameError> {
        if base.trim().is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(format!("{base}{}", Self::SUFFIX)))
    }

    /// Returns the full admin username.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdminUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
