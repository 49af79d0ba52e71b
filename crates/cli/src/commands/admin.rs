//! Admin user provisioning command.
//!
//! # Usage
//!
//! ```bash
//! create-admin alice 's3cure-pass' alice@example.com
//! ```
//!
//! # Environment Variables
//!
//! - `MONGO_URL` - MongoDB connection string for the Aegis user store
//! - `MONGO_DB_NAME` - Database name (default: `fraud_detection`)

use std::io::{self, Write};

use aegis_admin::report;
use aegis_admin::services::{PasswordStorage, create_admin_user};
use aegis_admin::{AdminRequest, ProvisionError};

/// Create an admin user and print the outcome to stdout.
///
/// Returns `true` if the admin now exists, whether created by this run or
/// already present.
pub async fn create_user(
    username: &str,
    password: &str,
    email: Option<String>,
    hash_password: bool,
) -> bool {
    let mut out = io::stdout();

    match run(&mut out, username, password, email, hash_password).await {
        Ok(success) => success,
        Err(e) => {
            tracing::error!("Failed to write report: {e}");
            false
        }
    }
}

async fn run<W: Write>(
    out: &mut W,
    username: &str,
    password: &str,
    email: Option<String>,
    hash_password: bool,
) -> io::Result<bool> {
    let storage = if hash_password {
        PasswordStorage::Bcrypt
    } else {
        PasswordStorage::Plain
    };

    let request = match AdminRequest::new(username, password, email) {
        Ok(request) => request.with_password_storage(storage),
        Err(e) => return fail(out, &e),
    };

    report::creating(out, &request.username)?;
    out.flush()?;

    let result = create_admin_user(&request).await;
    if let Err(e) = &result {
        tracing::error!(username = %request.username, "Command failed: {e}");
    }

    let success = report::outcome(out, &request, &result)?;
    report::summary(out, success)?;
    Ok(success)
}

fn fail<W: Write>(out: &mut W, err: &ProvisionError) -> io::Result<bool> {
    tracing::error!("Command failed: {err}");
    report::error(out, err)?;
    report::summary(out, false)?;
    Ok(false)
}
