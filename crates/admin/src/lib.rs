//! Aegis Admin library.
//!
//! Provisions privileged accounts in the Aegis fraud-detection user store
//! (the `approved_users` MongoDB collection). The `create-admin` binary in
//! the `cli` crate is a thin wrapper around [`services::create_admin_user`]
//! and [`report`].
//!
//! # Security
//!
//! Accounts created here get the `admin` role and full dashboard access.
//! By default the password is stored exactly as supplied.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod report;
pub mod services;

pub use config::MongoConfig;
pub use error::ProvisionError;
pub use models::{AdminRequest, ProvisionOutcome};
