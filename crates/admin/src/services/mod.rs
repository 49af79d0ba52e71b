//! Business logic services for admin provisioning.
//!
//! # Services
//!
//! - `password` - Plaintext or bcrypt password storage
//! - `provisioner` - Check-then-insert creation of admin accounts

pub mod password;
pub mod provisioner;

pub use password::PasswordStorage;
pub use provisioner::{
    create_admin_user, create_admin_user_from, create_admin_user_with, provision_admin,
};
