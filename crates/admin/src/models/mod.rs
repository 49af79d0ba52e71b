//! Domain models for admin provisioning.

pub mod admin_user;

pub use admin_user::{
    AdminRequest, CreatedAdmin, DEFAULT_ADMIN_EMAIL, NewAdminUser, ProvisionOutcome,
};
