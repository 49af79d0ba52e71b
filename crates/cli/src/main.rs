//! Aegis CLI - Admin account provisioning.
//!
//! # Usage
//!
//! ```bash
//! # Create admin "alice_admin" with the default email
//! create-admin alice 's3cure-pass'
//!
//! # Create admin with an explicit email, storing a bcrypt hash
//! create-admin alice 's3cure-pass' alice@example.com --hash-password
//! ```
//!
//! # Exit Codes
//!
//! - `0` - Admin created, or already present
//! - `1` - Missing arguments, configuration or database failure
//!
//! # Environment Variables
//!
//! - `MONGO_URL` - MongoDB connection string (required)
//! - `MONGO_DB_NAME` - Database name (default: `fraud_detection`)
//! - `MONGO_TLS_CA_FILE` - PEM CA bundle for TLS connections
//! - `MONGO_SERVER_SELECTION_TIMEOUT_MS` - Server selection timeout (default: 10000)
//! - `RUST_LOG` - Log filter (default: `aegis_admin=info,aegis_cli=info`)
//! - `LOG_FORMAT` - Set to `json` for JSON log lines on stderr

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

const PROGRAM: &str = "create-admin";

#[derive(Parser, Debug)]
#[command(name = "create-admin")]
#[command(author, version, about = "Create an admin user in the Aegis user store")]
struct Cli {
    /// Base username; the account is stored as `<username>_admin`
    #[arg(allow_hyphen_values = true)]
    username: String,

    /// Password for the new account
    #[arg(allow_hyphen_values = true)]
    password: String,

    /// Contact email (default: admin@example.com)
    #[arg(allow_hyphen_values = true)]
    email: Option<String>,

    /// Store a bcrypt hash instead of the password itself
    #[arg(long)]
    hash_password: bool,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => std::process::exit(reject_arguments(&e)),
    };

    let success = commands::admin::create_user(
        &cli.username,
        &cli.password,
        cli.email,
        cli.hash_password,
    )
    .await;

    std::process::exit(exit_code(success));
}

/// Initialize tracing on stderr so stdout carries only the operator report.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "aegis_admin=info,aegis_cli=info".into());

    let is_json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

/// Report an argument error and return the exit code to use.
fn reject_arguments(err: &clap::Error) -> i32 {
    let code = parse_failure_code(err.kind());
    if let Err(print_err) = err.print() {
        tracing::warn!("Failed to print argument error: {print_err}");
    }
    if code != 0 {
        if let Err(print_err) = aegis_admin::report::usage(&mut std::io::stdout(), PROGRAM) {
            tracing::warn!("Failed to print usage: {print_err}");
        }
    }
    code
}

/// `--help` and `--version` are successful runs; anything else is a usage error.
const fn parse_failure_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

const fn exit_code(success: bool) -> i32 {
    if success { 0 } else { 1 }
}
