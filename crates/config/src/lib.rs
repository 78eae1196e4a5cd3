//! Profile management for flowctl.
//!
//! This crate owns the profiles document (named sets of configuration
//! overrides persisted to a TOML file), the settings registry of known
//! keys and defaults, and the resolver that attributes effective values
//! to their source.

mod context;
mod error;
mod registry;
mod resolve;
mod store;
mod types;

pub use context::{ActiveProfileContext, PROFILE_ENV_VAR};
pub use error::StoreError;
pub use registry::{KNOWN_SETTINGS, default_settings, settings_from_env, settings_from_vars};
pub use resolve::{ResolvedSetting, SettingSource, compute_overrides, with_defaults};
pub use store::{PROFILES_PATH_ENV_VAR, ProfileStore, env_var_or_none};
pub use types::{DEFAULT_PROFILE, ProfileSettings, ProfilesDocument, RemoveOutcome};
