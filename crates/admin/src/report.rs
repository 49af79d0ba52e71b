//! Operator-facing output of a provisioning run.
//!
//! Everything here writes plain lines to any `io::Write`; the CLI passes
//! stdout. Diagnostics go through `tracing` instead.

use std::io::{self, Write};

use secrecy::ExposeSecret;

use aegis_core::AdminUsername;

use crate::config::ConfigError;
use crate::error::ProvisionError;
use crate::models::{AdminRequest, ProvisionOutcome};

/// Print the banner shown before any work starts.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn creating<W: Write>(out: &mut W, username: &AdminUsername) -> io::Result<()> {
    writeln!(out, "Creating admin user: {username}...")
}

/// Print the result of a provisioning run and return whether it succeeded.
///
/// An already-existing admin counts as success. Every error is reported on a
/// single line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn outcome<W: Write>(
    out: &mut W,
    request: &AdminRequest,
    result: &Result<ProvisionOutcome, ProvisionError>,
) -> io::Result<bool> {
    match result {
        Ok(ProvisionOutcome::AlreadyExists { username, .. }) => {
            writeln!(out, "Admin user '{username}' already exists")?;
        }
        Ok(ProvisionOutcome::Created(created)) => {
            writeln!(out, "✓ Successfully created admin user: {}", created.username)?;
            writeln!(out, "  Email: {}", created.email)?;
            writeln!(out, "  Role: {}", created.role)?;
            writeln!(out)?;
            writeln!(out, "You can now log in with these credentials:")?;
            writeln!(out, "  Username: {}", created.username)?;
            writeln!(out, "  Password: {}", request.password.expose_secret())?;
        }
        Err(e) => error(out, e)?,
    }
    Ok(result.is_ok())
}

/// Print the single failure line for `error`.
///
/// A missing variable is reported before any work is attempted, so it gets a
/// plain `Error:` line; everything else is a failed creation.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn error<W: Write>(out: &mut W, error: &ProvisionError) -> io::Result<()> {
    match error {
        ProvisionError::Config(missing @ ConfigError::MissingEnvVar(_)) => {
            writeln!(out, "Error: {missing}")
        }
        _ => writeln!(out, "✗ Error creating admin user: {error}"),
    }
}

/// Print the closing line for the whole run.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn summary<W: Write>(out: &mut W, success: bool) -> io::Result<()> {
    writeln!(out)?;
    if success {
        writeln!(out, "✓ Admin user created successfully!")
    } else {
        writeln!(out, "✗ Failed to create admin user")
    }
}

/// Print usage help for `program`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn usage<W: Write>(out: &mut W, program: &str) -> io::Result<()> {
    writeln!(out, "Usage: {program} <username> <password> [email]")?;
    writeln!(out)?;
    writeln!(out, "Example:")?;
    writeln!(out, "  {program} admin secure_password admin@example.com")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use aegis_core::{AdminUserId, UserRole};

    use super::*;
    use crate::models::CreatedAdmin;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn request() -> AdminRequest {
        AdminRequest::new("ops", "pw123", Some("ops@aegis.io".into())).unwrap()
    }

    #[test]
    fn test_creating_banner() {
        let out = render(|w| creating(w, &request().username));
        assert_eq!(out, "Creating admin user: ops_admin...\n");
    }

    #[test]
    fn test_created_lists_credentials() {
        let request = request();
        let res = Ok(ProvisionOutcome::Created(CreatedAdmin {
            id: AdminUserId::new("abc"),
            username: request.username.clone(),
            email: request.email.clone(),
            role: UserRole::Admin,
        }));
        let mut success = false;
        let out = render(|w| {
            success = outcome(w, &request, &res)?;
            Ok(())
        });

        assert!(success);
        assert_eq!(
            out,
            "✓ Successfully created admin user: ops_admin\n  Email: ops@aegis.io\n  Role: admin\n\n\
             You can now log in with these credentials:\n  Username: ops_admin\n  Password: pw123\n"
        );
    }

    #[test]
    fn test_already_exists_is_success() {
        let request = request();
        let res = Ok(ProvisionOutcome::AlreadyExists {
            username: request.username.clone(),
            id: AdminUserId::new("abc"),
        });
        let mut success = false;
        let out = render(|w| {
            success = outcome(w, &request, &res)?;
            Ok(())
        });

        assert!(success);
        assert_eq!(out, "Admin user 'ops_admin' already exists\n");
    }

    #[test]
    fn test_missing_url_reported_as_not_set() {
        let request = request();
        let res = Err(ProvisionError::Config(ConfigError::MissingEnvVar(
            "MONGO_URL".to_string(),
        )));
        let mut success = true;
        let out = render(|w| {
            success = outcome(w, &request, &res)?;
            Ok(())
        });

        assert!(!success);
        assert_eq!(out, "Error: MONGO_URL environment variable not set\n");
    }

    #[test]
    fn test_other_errors_are_single_line_failure() {
        let res = Err(ProvisionError::Config(ConfigError::InvalidEnvVar(
            "MONGO_SERVER_SELECTION_TIMEOUT_MS".to_string(),
            "invalid digit found in string".to_string(),
        )));
        let mut success = true;
        let out = render(|w| {
            success = outcome(w, &request(), &res)?;
            Ok(())
        });

        assert!(!success);
        assert!(out.starts_with("✗ Error creating admin user: Configuration error: "));
        assert!(out.contains("MONGO_SERVER_SELECTION_TIMEOUT_MS"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_summary_lines() {
        assert_eq!(
            render(|w| summary(w, true)),
            "\n✓ Admin user created successfully!\n"
        );
        assert_eq!(
            render(|w| summary(w, false)),
            "\n✗ Failed to create admin user\n"
        );
    }

    #[test]
    fn test_usage_mentions_arguments() {
        let out = render(|w| usage(w, "create-admin"));
        assert!(out.starts_with("Usage: create-admin <username> <password> [email]\n"));
        assert!(out.contains("create-admin admin secure_password admin@example.com"));
    }
}
