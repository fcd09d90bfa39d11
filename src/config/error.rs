//! Error types for key map loading.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when reading a key map file.
///
/// A missing file is not an error; readers report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum KeyMapError {
    /// The file exists but is not a JSON object of bindings.
    #[error("failed to parse key map {path}: {source}")]
    Parse {
        /// Path to the malformed file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The file exists but could not be read.
    #[error("failed to read key map {path}: {source}")]
    Io {
        /// Path to the unreadable file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl KeyMapError {
    /// The file that caused the failure.
    pub fn path(&self) -> &Path {
        match self {
            KeyMapError::Parse { path, .. } | KeyMapError::Io { path, .. } => path,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, KeyMapError::Parse { .. })
    }
}
