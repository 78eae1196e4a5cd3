//! Active profile selection for one command invocation.
//!
//! Responsibilities:
//! - Pick the active profile name (CLI flag beats `FLOWCTL_PROFILE` beats
//!   `"default"`).
//! - Resolve its effective settings: defaults, overlaid with the profile's
//!   stored values, overlaid with environment overrides.
//!
//! Does NOT handle:
//! - Persistence. The context is built fresh per invocation and never saved.
//!
//! Invariants:
//! - Built once in the CLI layer and passed into core calls explicitly;
//!   nothing downstream of it reads the process environment.
//! - Environment values always win over stored profile values.

use crate::registry;
use crate::store::env_var_or_none;
use crate::types::{DEFAULT_PROFILE, ProfileSettings, ProfilesDocument};

/// Environment variable naming the active profile.
pub const PROFILE_ENV_VAR: &str = "FLOWCTL_PROFILE";

/// The profile selected for the current invocation, with its resolved
/// settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveProfileContext {
    /// Name of the active profile. May name a profile absent from the
    /// document (e.g. a stale `FLOWCTL_PROFILE`); stored values then
    /// contribute nothing.
    pub name: String,
    /// Effective settings: defaults <- stored profile values <- env.
    pub settings: ProfileSettings,
}

impl ActiveProfileContext {
    /// Selects the active profile from the process environment.
    ///
    /// `explicit` is the CLI `--profile` flag and takes precedence over
    /// `FLOWCTL_PROFILE`; with neither, the `"default"` profile is active.
    pub fn select(doc: &ProfilesDocument, explicit: Option<&str>) -> Self {
        Self::select_from_vars(doc, explicit, env_var_or_none)
    }

    /// Like [`Self::select`], with an injectable variable lookup.
    pub fn select_from_vars<F>(doc: &ProfilesDocument, explicit: Option<&str>, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = explicit
            .map(str::to_string)
            .or_else(|| var(PROFILE_ENV_VAR))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

        let mut settings = registry::default_settings();
        if let Some(stored) = doc.settings(&name) {
            for (key, value) in stored.iter() {
                settings.insert(key, value);
            }
        }
        // env wins over stored values, but only for variables actually set
        for (key, _) in registry::KNOWN_SETTINGS {
            if let Some(value) = var(key) {
                settings.insert(*key, value);
            }
        }

        Self { name, settings }
    }
}
