//! Core types for Aegis.
//!
//! This module provides type-safe wrappers for the user-store domain.

pub mod email;
pub mod id;
pub mod role;
pub mod username;

pub use email::{Email, EmailError};
pub use id::AdminUserId;
pub use role::UserRole;
pub use username::{AdminUsername, UsernameError};
