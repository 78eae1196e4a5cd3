//! Settings resolution: which values differ from defaults, and why.
//!
//! Responsibilities:
//! - Compare a profile's settings against defaults and environment
//!   overrides, attributing each overridden value to its source.
//! - Produce the full default listing for `--show-defaults` output.
//!
//! Does NOT handle:
//! - Reading the environment (callers pass snapshots in; see `registry`).
//! - Formatting or printing (the CLI renders the tuples).
//!
//! Invariants:
//! - Override listing follows the profile's insertion order; the defaults
//!   listing is alphabetical. The distinction is intentional and tested.
//! - Keys unknown to the defaults never panic; they are always reported
//!   as overridden.

use std::fmt;

use crate::types::ProfileSettings;

/// Where a displayed setting value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    /// Set by an environment variable.
    Env,
    /// Stored in the profile.
    Profile,
    /// The built-in default.
    Defaults,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SettingSource::Env => "env",
            SettingSource::Profile => "profile",
            SettingSource::Defaults => "defaults",
        };
        f.write_str(s)
    }
}

/// One displayed setting: key, effective value, and attributed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSetting {
    pub key: String,
    pub value: String,
    pub source: SettingSource,
}

/// Lists every setting in `current` whose value differs from the default,
/// in `current`'s insertion order.
///
/// A value equal to its default is not an override and is skipped
/// (comparison is by value). A key absent from `defaults` is always
/// considered overridden. The source is `Env` when the environment snapshot
/// carries the same key with the same value, otherwise `Profile`.
pub fn compute_overrides(
    current: &ProfileSettings,
    env: &ProfileSettings,
    defaults: &ProfileSettings,
) -> Vec<ResolvedSetting> {
    current
        .iter()
        .filter(|(key, value)| defaults.get(key) != Some(value))
        .map(|(key, value)| {
            let source = if env.get(key) == Some(value) {
                SettingSource::Env
            } else {
                SettingSource::Profile
            };
            ResolvedSetting {
                key: key.to_string(),
                value: value.to_string(),
                source,
            }
        })
        .collect()
}

/// Lists every default setting, in alphabetical key order.
///
/// The ordering deliberately differs from [`compute_overrides`]: a full
/// listing is stable regardless of how any profile was populated.
pub fn with_defaults(defaults: &ProfileSettings) -> Vec<ResolvedSetting> {
    let mut entries: Vec<ResolvedSetting> = defaults
        .iter()
        .map(|(key, value)| ResolvedSetting {
            key: key.to_string(),
            value: value.to_string(),
            source: SettingSource::Defaults,
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries
}
