//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   error categories.
//! - Map `StoreError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use flowctl_config::StoreError;

/// Structured exit codes for flowctl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure (e.g. file I/O).
    GeneralError = 1,

    /// Resource not found - profile name or setting key does not exist.
    ///
    /// Scripts should verify the name or create the missing profile.
    NotFound = 4,

    /// Validation error - malformed `VAR=VAL` token or unparseable
    /// profiles file.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Name collision on create or rename.
    ///
    /// Scripts should pick a different name or remove the existing profile.
    AlreadyExists = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&StoreError> for ExitCode {
    fn from(err: &StoreError) -> Self {
        if err.is_parse() {
            ExitCode::ValidationError
        } else if err.is_not_found() {
            ExitCode::NotFound
        } else if matches!(err, StoreError::ProfileAlreadyExists { .. }) {
            ExitCode::AlreadyExists
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns `ExitCode::GeneralError` if no `StoreError` is found in
    /// the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(store_err) = cause.downcast_ref::<StoreError>() {
                return ExitCode::from(store_err);
            }
        }
        ExitCode::GeneralError
    }
}
