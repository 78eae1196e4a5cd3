//! Profile document types and in-memory transforms.
//!
//! Responsibilities:
//! - Define `ProfilesDocument` (profile name -> settings) and `ProfileSettings`
//!   (setting key -> string value).
//! - Implement every document transform: get, list, set, unset, create,
//!   remove, rename.
//!
//! Does NOT handle:
//! - File I/O or path resolution (see `store` module).
//! - Effective-value resolution or source attribution (see `resolve` module).
//!
//! Invariants:
//! - Profile names are unique (map keys) and iteration follows storage order.
//! - Per-profile key order is insertion order and survives serialization.
//! - Transforms are all-or-nothing: on any error the document is unchanged.
//! - `remove` never deletes the `"default"` profile; it resets it to empty.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Name of the mandatory profile present in every first-run document.
pub const DEFAULT_PROFILE: &str = "default";

/// Flat string key/value settings for one profile.
///
/// Values are stored verbatim as strings; numeric or boolean interpretation
/// is the caller's concern. Unknown keys are stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileSettings(IndexMap<String, String>);

impl ProfileSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts or overwrites a key, keeping the original position on overwrite.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProfileSettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Verb describing what [`ProfilesDocument::remove`] actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The profile was deleted from the document.
    Removed,
    /// The `"default"` profile was reset to empty instead of deleted.
    Reset,
}

impl RemoveOutcome {
    /// Past-tense verb used in user-facing messages.
    pub fn verb(self) -> &'static str {
        match self {
            RemoveOutcome::Removed => "Removed",
            RemoveOutcome::Reset => "Reset",
        }
    }
}

/// The full persisted profile state: an ordered map of profile name to
/// settings. Serialized as one TOML table per profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfilesDocument(IndexMap<String, ProfileSettings>);

impl Default for ProfilesDocument {
    /// The first-run document: a single empty `"default"` profile.
    fn default() -> Self {
        let mut profiles = IndexMap::new();
        profiles.insert(DEFAULT_PROFILE.to_string(), ProfileSettings::new());
        Self(profiles)
    }
}

impl ProfilesDocument {
    /// Profile names in storage order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn settings(&self, name: &str) -> Option<&ProfileSettings> {
        self.0.get(name)
    }

    /// Returns the named profiles, in storage order.
    ///
    /// Every requested name must exist; otherwise the first missing one is
    /// reported and nothing is returned. Callers that want "whatever exists"
    /// should filter `names` against [`Self::contains`] first.
    pub fn get_many(
        &self,
        names: &[String],
    ) -> Result<IndexMap<String, ProfileSettings>, StoreError> {
        for name in names {
            if !self.0.contains_key(name) {
                return Err(StoreError::ProfileNotFound { name: name.clone() });
            }
        }
        Ok(self
            .0
            .iter()
            .filter(|(name, _)| names.iter().any(|n| n == *name))
            .map(|(name, settings)| (name.clone(), settings.clone()))
            .collect())
    }

    /// Applies `VAR=VAL` assignment tokens to the named profile.
    ///
    /// All tokens are parsed before any value is written, so a malformed
    /// token aborts the whole operation with the document unchanged. If a
    /// key repeats, the last assignment wins. Returns the parsed pairs in
    /// token order for the caller to report.
    pub fn set_values(
        &mut self,
        profile_name: &str,
        assignments: &[String],
    ) -> Result<Vec<(String, String)>, StoreError> {
        let pairs = parse_assignments(assignments)?;

        let settings =
            self.0
                .get_mut(profile_name)
                .ok_or_else(|| StoreError::ProfileNotFound {
                    name: profile_name.to_string(),
                })?;
        for (key, value) in &pairs {
            settings.insert(key.clone(), value.clone());
        }
        Ok(pairs)
    }

    /// Removes the given keys from the named profile.
    ///
    /// Every key is checked before any is removed: if one is absent the
    /// operation fails naming the first missing key (in request order) and
    /// the profile keeps all of its entries.
    pub fn unset_values(&mut self, profile_name: &str, keys: &[String]) -> Result<(), StoreError> {
        let settings =
            self.0
                .get_mut(profile_name)
                .ok_or_else(|| StoreError::ProfileNotFound {
                    name: profile_name.to_string(),
                })?;

        for key in keys {
            if !settings.contains_key(key) {
                return Err(StoreError::VariableNotFound {
                    key: key.clone(),
                    profile: profile_name.to_string(),
                });
            }
        }
        for key in keys {
            settings.remove(key);
        }
        Ok(())
    }

    /// Creates a new profile, optionally copying an existing one.
    ///
    /// The copy is by value: later edits to either profile leave the other
    /// untouched.
    pub fn create(&mut self, name: &str, from_name: Option<&str>) -> Result<(), StoreError> {
        if self.0.contains_key(name) {
            return Err(StoreError::ProfileAlreadyExists {
                name: name.to_string(),
            });
        }

        let settings = match from_name {
            Some(from) => self
                .0
                .get(from)
                .cloned()
                .ok_or_else(|| StoreError::ProfileNotFound {
                    name: from.to_string(),
                })?,
            None => ProfileSettings::new(),
        };
        self.0.insert(name.to_string(), settings);
        Ok(())
    }

    /// Removes a profile, or resets `"default"` to empty.
    ///
    /// The `"default"` entry is never deleted: removing it clears its
    /// settings in place and reports [`RemoveOutcome::Reset`].
    pub fn remove(&mut self, name: &str) -> Result<RemoveOutcome, StoreError> {
        if !self.0.contains_key(name) {
            return Err(StoreError::ProfileNotFound {
                name: name.to_string(),
            });
        }

        if name == DEFAULT_PROFILE {
            self.0
                .insert(DEFAULT_PROFILE.to_string(), ProfileSettings::new());
            Ok(RemoveOutcome::Reset)
        } else {
            self.0.shift_remove(name);
            Ok(RemoveOutcome::Removed)
        }
    }

    /// Moves a profile's settings to a new name.
    ///
    /// The renamed profile takes the last position in storage order.
    /// Renaming `"default"` is permitted and does NOT recreate a `"default"`
    /// entry; only [`Self::remove`] has the reset behavior.
    pub fn rename(&mut self, name: &str, new_name: &str) -> Result<(), StoreError> {
        if !self.0.contains_key(name) {
            return Err(StoreError::ProfileNotFound {
                name: name.to_string(),
            });
        }
        if self.0.contains_key(new_name) {
            return Err(StoreError::ProfileAlreadyExists {
                name: new_name.to_string(),
            });
        }

        // contains_key checked above, so shift_remove always yields a value
        if let Some(settings) = self.0.shift_remove(name) {
            self.0.insert(new_name.to_string(), settings);
        }
        Ok(())
    }
}

impl FromIterator<(String, ProfileSettings)> for ProfilesDocument {
    fn from_iter<I: IntoIterator<Item = (String, ProfileSettings)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Splits `VAR=VAL` tokens, requiring exactly one `=` per token.
///
/// Either side may be empty (`A=` stores an empty value); a token with zero
/// or multiple `=` characters is malformed.
fn parse_assignments(assignments: &[String]) -> Result<Vec<(String, String)>, StoreError> {
    let mut pairs = Vec::with_capacity(assignments.len());
    for token in assignments {
        let mut parts = token.splitn(3, '=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(var), Some(value), None) => {
                pairs.push((var.to_string(), value.to_string()));
            }
            _ => {
                return Err(StoreError::MalformedAssignment {
                    token: token.clone(),
                });
            }
        }
    }
    Ok(pairs)
}
