//! Error types for the profile store.
//!
//! Responsibilities:
//! - Define error variants for profile store and resolver failures.
//! - Carry enough context (names, keys, paths) for user-facing messages.
//!
//! Does NOT handle:
//! - Printing or exit codes (the CLI crate owns those).
//!
//! Invariants:
//! - The store returns these errors; it never prints and never exits.
//! - Variants group into four categories: parse, not-found, already-exists,
//!   and I/O. Exit-code mapping in the CLI relies on this grouping.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by profile store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A `VAR=VAL` token did not split on exactly one `=`.
    #[error("Failed to parse argument '{token}'. Use the format 'VAR=VAL'.")]
    MalformedAssignment { token: String },

    /// The backing file exists but is not valid TOML in the expected shape.
    #[error("Failed to parse profiles file at {path}")]
    MalformedFile {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("Profile '{name}' not found.")]
    ProfileNotFound { name: String },

    /// A requested setting key is absent from the named profile.
    #[error("Variable '{key}' not found in profile '{profile}'.")]
    VariableNotFound { key: String, profile: String },

    #[error("Profile '{name}' already exists.")]
    ProfileAlreadyExists { name: String },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to {action} {path}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize profiles")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },
}

impl StoreError {
    /// True for the not-found category (missing profile or missing key).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::ProfileNotFound { .. } | StoreError::VariableNotFound { .. }
        )
    }

    /// True for the parse category (malformed token or backing file).
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            StoreError::MalformedAssignment { .. } | StoreError::MalformedFile { .. }
        )
    }
}
