//! flowctl - command-line client for managing configuration profiles.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Dispatch profile commands against the profile store.
//! - Render results and errors as stdout/stderr text and exit codes.
//!
//! Does NOT handle:
//! - Profile storage or settings resolution (see `crates/config`).
//!
//! Invariants:
//! - `.env` is loaded BEFORE CLI parsing so clap env defaults can read it.
//! - The core never prints; every user-facing message originates here.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use flowctl_config::ProfileStore;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Loads a local `.env` file unless `DOTENV_DISABLED` is set to "1" or
/// "true". A missing `.env` is not an error.
fn load_dotenv() {
    if std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("true")
        && std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("1")
    {
        dotenvy::dotenv().ok();
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // --profiles-path beats FLOWCTL_PROFILES_PATH (clap env fills the flag);
    // blank/whitespace values fall through to the default location
    let store = match cli.profiles_path {
        Some(ref path) if !path.to_string_lossy().trim().is_empty() => {
            ProfileStore::with_path(path.clone())
        }
        _ => ProfileStore::new()?,
    };

    // clap's env fill does not blank-filter: FLOWCTL_PROFILE="" arrives as
    // Some(""). Treat blank/whitespace as unset, like the profiles path.
    let profile = cli
        .profile
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());

    match cli.command {
        Commands::Profile { command } => commands::profile::run(command, profile, &store),
    }
}

fn main() {
    load_dotenv();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let exit_code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
