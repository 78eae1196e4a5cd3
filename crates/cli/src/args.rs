//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not load or save profiles (see `flowctl-config`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "flowctl")]
#[command(about = "flowctl - Manage workflow client configuration from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  flowctl profile ls\n  flowctl profile create staging --from default\n  flowctl profile set FLOWCTL_API_URL=https://orchestrator.example.com/api\n  flowctl -p staging profile inspect --show-sources\n"
)]
pub struct Cli {
    /// Profile to use for this invocation
    #[arg(short = 'p', long, global = true, env = "FLOWCTL_PROFILE")]
    pub profile: Option<String>,

    /// Path to the profiles file (overrides the default location).
    ///
    /// Can also be set via the FLOWCTL_PROFILES_PATH environment variable.
    #[arg(long, global = true, env = "FLOWCTL_PROFILES_PATH", value_name = "FILE")]
    pub profiles_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Commands for interacting with your flowctl profiles
    Profile {
        #[command(subcommand)]
        command: commands::profile::ProfileCommand,
    },
}
