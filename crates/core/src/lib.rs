//! Aegis Core - Shared domain types.
//!
//! This crate provides the types shared by the Aegis admin tooling:
//! - `admin` - Configuration, MongoDB access and admin provisioning
//! - `cli` - The `create-admin` command-line tool
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. The
//! optional `mongodb` feature adds conversions to and from BSON values.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for usernames, emails, roles and IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
