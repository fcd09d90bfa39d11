//! Layered key map loading.
//!
//! Key maps come from two JSON files with the same name: an application-wide
//! file under the application data directory and a per-user file under the
//! user data directory. The user file wins on any action both define.
//!
//! ```text
//! <application_data_directory>/<application_name>/keys.linux.json
//! <user_data_directory>/<application_name>/keys.linux.json
//! ```
//!
//! On Windows-family hosts the file is `keys.windows.json`.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::error::KeyMapError;
use crate::config::key_map::KeyMap;
use crate::utils::app_paths::{AppPaths, PathResolver};
use crate::utils::platform::{HostPlatform, Platform, PlatformDetector};

pub const UNIX_KEYS_FILE: &str = "keys.linux.json";
pub const WINDOWS_KEYS_FILE: &str = "keys.windows.json";

/// Reads and merges the application and user key maps
#[derive(Debug, Clone)]
pub struct KeysManager<P, D> {
    paths: P,
    platform: D,
}

impl KeysManager<AppPaths, HostPlatform> {
    /// A manager rooted at the host's standard directories
    pub fn from_system(application_name: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self::new(
            AppPaths::from_system(application_name)?,
            HostPlatform,
        ))
    }
}

impl<P: PathResolver, D: PlatformDetector> KeysManager<P, D> {
    pub fn new(paths: P, platform: D) -> Self {
        Self { paths, platform }
    }

    pub fn paths(&self) -> &P {
        &self.paths
    }

    /// Name of the key map file for the detected platform
    pub fn keys_filename(&self) -> &'static str {
        match self.platform.platform() {
            Platform::Unix => UNIX_KEYS_FILE,
            Platform::Windows => WINDOWS_KEYS_FILE,
        }
    }

    pub fn application_keys_path(&self) -> PathBuf {
        self.layer_path(self.paths.application_data_directory(), self.keys_filename())
    }

    pub fn user_keys_path(&self) -> PathBuf {
        self.layer_path(self.paths.user_data_directory(), self.keys_filename())
    }

    /// Retrieve the merged key map.
    ///
    /// Returns `Ok(None)` when neither file exists. When only one exists it is
    /// returned as read. A file that exists but cannot be read or parsed fails
    /// the whole call, even if the other layer is fine.
    pub fn retrieve(&self) -> Result<Option<KeyMap>, KeyMapError> {
        let filename = self.keys_filename();

        let application_keys = self.read_layer(
            &self.layer_path(self.paths.application_data_directory(), filename),
        )?;
        let user_keys =
            self.read_layer(&self.layer_path(self.paths.user_data_directory(), filename))?;

        Ok(match (application_keys, user_keys) {
            (Some(application_keys), Some(user_keys)) => {
                let merged = application_keys.overlay(user_keys);
                debug!(target: "keymap", "Merged key map has {} actions", merged.len());
                Some(merged)
            }
            (application_keys, user_keys) => application_keys.or(user_keys),
        })
    }

    /// Retrieve the merged key map laid over built-in `defaults`.
    pub fn retrieve_or(&self, defaults: KeyMap) -> Result<KeyMap, KeyMapError> {
        Ok(match self.retrieve()? {
            Some(keys) => defaults.overlay(keys),
            None => {
                debug!(target: "keymap", "No key map files found, using defaults");
                defaults
            }
        })
    }

    /// Read the application-wide key map, `Ok(None)` if there is none
    pub fn read_application_keys(&self) -> Result<Option<KeyMap>, KeyMapError> {
        self.read_layer(&self.application_keys_path())
    }

    /// Read the current user's key map, `Ok(None)` if there is none
    pub fn read_user_keys(&self) -> Result<Option<KeyMap>, KeyMapError> {
        self.read_layer(&self.user_keys_path())
    }

    fn layer_path(&self, root: &Path, filename: &str) -> PathBuf {
        root.join(self.paths.application_name()).join(filename)
    }

    fn read_layer(&self, path: &Path) -> Result<Option<KeyMap>, KeyMapError> {
        if !path.exists() {
            debug!(target: "keymap", "No key map at {}", path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(path).map_err(|source| {
            warn!(target: "keymap", "Cannot read key map {}: {}", path.display(), source);
            KeyMapError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // A top-level `null` carries no bindings and counts as an absent layer
        let keys: Option<KeyMap> = serde_json::from_str(&contents).map_err(|source| {
            warn!(target: "keymap", "Invalid key map {}: {}", path.display(), source);
            KeyMapError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let Some(keys) = keys else {
            debug!(target: "keymap", "Key map {} is null, skipping", path.display());
            return Ok(None);
        };

        info!(target: "keymap", "Loaded {} key bindings from {}", keys.len(), path.display());
        Ok(Some(keys))
    }
}
