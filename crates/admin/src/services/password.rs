//! Password storage policy.

use secrecy::{ExposeSecret, SecretString};

/// bcrypt work factor for hashed admin passwords.
pub const BCRYPT_COST: u32 = 12;

/// How an admin password is written to the user store.
///
/// `Plain` keeps the format the login backend currently compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordStorage {
    /// Store the password verbatim.
    #[default]
    Plain,
    /// Store a bcrypt hash of the password.
    Bcrypt,
}

impl PasswordStorage {
    /// Produce the value to store for `password`.
    ///
    /// # Errors
    ///
    /// Returns `bcrypt::BcryptError` if hashing fails.
    pub fn encode(self, password: &SecretString) -> Result<String, bcrypt::BcryptError> {
        match self {
            Self::Plain => Ok(password.expose_secret().to_owned()),
            Self::Bcrypt => bcrypt::hash(password.expose_secret(), BCRYPT_COST),
        }
    }
}
