//! Profile persistence: loading and saving the profiles file.
//!
//! Responsibilities:
//! - Resolve the backing file path (env override or platform default).
//! - Load the TOML profiles document and write it back atomically.
//!
//! Does NOT handle:
//! - Document transforms (see `types` module).
//! - Effective-value resolution (see `resolve` module).
//!
//! Invariants:
//! - A missing file is NOT an error: load returns a first-run document.
//! - Writes are atomic (temp file + rename); the file is never left in a
//!   partially written state.
//! - Saves replace the whole file; there are no in-place patches.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::types::ProfilesDocument;

/// File name of the profiles document inside the config directory.
const PROFILES_FILE_NAME: &str = "profiles.toml";

/// Environment variable overriding the profiles file location.
pub const PROFILES_PATH_ENV_VAR: &str = "FLOWCTL_PROFILES_PATH";

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Returns the default path to the profiles file.
///
/// - Linux/macOS: `~/.config/flowctl/profiles.toml`
/// - Windows: `%AppData%\flowctl\profiles.toml`
fn default_profiles_path() -> Result<PathBuf, StoreError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "flowctl").ok_or_else(|| {
        StoreError::ConfigDirUnavailable("no valid home directory".to_string())
    })?;
    Ok(proj_dirs.config_dir().join(PROFILES_FILE_NAME))
}

/// Loads and saves the profiles document at a fixed path.
///
/// The store holds no document state: every command loads fresh, transforms
/// in memory, and saves once.
pub struct ProfileStore {
    /// Path to the profiles file.
    path: PathBuf,
}

impl ProfileStore {
    /// Creates a store at the standard location.
    ///
    /// If `FLOWCTL_PROFILES_PATH` is set (and not empty/whitespace), it is
    /// used instead of the platform default.
    ///
    /// # Errors
    /// Returns an error if the platform config directory cannot be
    /// determined (should be rare).
    pub fn new() -> Result<Self, StoreError> {
        let path = match env_var_or_none(PROFILES_PATH_ENV_VAR) {
            Some(path_str) => PathBuf::from(path_str),
            None => default_profiles_path()?,
        };
        Ok(Self::with_path(path))
    }

    /// Creates a store with a specific profiles file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path to the profiles file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the profiles document from disk.
    ///
    /// A missing file yields the first-run document (a single empty
    /// `"default"` profile); only an unreadable or unparseable file is an
    /// error.
    pub fn load(&self) -> Result<ProfilesDocument, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "Profiles file not found, using first-run document"
                );
                return Ok(ProfilesDocument::default());
            }
            Err(e) => {
                return Err(StoreError::Io {
                    action: "read profiles file at",
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        toml::from_str(&content).map_err(|e| StoreError::MalformedFile {
            path: self.path.clone(),
            source: Box::new(e),
        })
    }

    /// Atomically saves the document to disk, replacing the whole file.
    ///
    /// Writes to a temporary file first, then renames it to the target
    /// path. The parent directory is created if it does not exist.
    pub fn save(&self, doc: &ProfilesDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                action: "create config directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string(doc).map_err(|e| StoreError::Serialize { source: e })?;

        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, content).map_err(|e| StoreError::Io {
            action: "write temporary profiles file at",
            path: temp_path.clone(),
            source: e,
        })?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Io {
            action: "rename temporary profiles file to",
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), "Profiles saved atomically");
        Ok(())
    }
}
