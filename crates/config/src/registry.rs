//! The settings registry: known configuration keys and their defaults.
//!
//! Responsibilities:
//! - Declare every recognized configuration key with its built-in default.
//! - Produce settings snapshots: defaults, and defaults overlaid with
//!   environment values.
//!
//! Does NOT handle:
//! - Profile storage (see `types`/`store`) or override attribution
//!   (see `resolve`).
//!
//! Invariants:
//! - Snapshots always carry the complete key set; an unset environment
//!   variable contributes its default value.
//! - Empty or whitespace-only environment values are treated as unset.

use crate::store::env_var_or_none;
use crate::types::ProfileSettings;

/// Every recognized configuration key with its built-in default value.
///
/// All values are strings; typed interpretation happens at the point of
/// use, not here.
pub const KNOWN_SETTINGS: &[(&str, &str)] = &[
    ("FLOWCTL_API_URL", "http://127.0.0.1:4200/api"),
    ("FLOWCTL_API_KEY", ""),
    ("FLOWCTL_LOG_LEVEL", "INFO"),
    ("FLOWCTL_REQUEST_TIMEOUT", "30"),
    ("FLOWCTL_DEBUG_MODE", "false"),
];

/// The built-in default value for every known key.
pub fn default_settings() -> ProfileSettings {
    KNOWN_SETTINGS.iter().copied().collect()
}

/// The complete key set with environment values applied over defaults,
/// read from the process environment.
pub fn settings_from_env() -> ProfileSettings {
    settings_from_vars(env_var_or_none)
}

/// Like [`settings_from_env`], with an injectable variable lookup.
pub fn settings_from_vars<F>(var: F) -> ProfileSettings
where
    F: Fn(&str) -> Option<String>,
{
    KNOWN_SETTINGS
        .iter()
        .map(|(key, default)| {
            let value = var(key).unwrap_or_else(|| (*default).to_string());
            ((*key).to_string(), value)
        })
        .collect()
}
