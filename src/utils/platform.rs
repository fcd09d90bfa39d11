//! Host platform classification.
//!
//! The key map filename depends on whether the host belongs to the Unix
//! family. Detection sits behind [`PlatformDetector`] so callers and tests
//! can pin the platform instead of reading it from the running system.

use serde::{Deserialize, Serialize};

/// Platform identifiers treated as Unix-family. Covers both the names
/// reported by `std::env::consts::OS` and the Node-style names
/// (`darwin`, `sunos`) that show up in configuration written elsewhere.
const UNIX_IDENTIFIERS: &[&str] = &[
    "linux",
    "android",
    "macos",
    "darwin",
    "ios",
    "freebsd",
    "dragonfly",
    "netbsd",
    "openbsd",
    "solaris",
    "sunos",
    "illumos",
    "aix",
    "haiku",
    "redox",
];

/// Platform family, as far as key map selection is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Classify a platform identifier. Anything not known to be Unix-family
    /// is treated as Windows-family.
    pub fn from_identifier(identifier: &str) -> Self {
        if is_unix(identifier) {
            Platform::Unix
        } else {
            Platform::Windows
        }
    }

    /// The platform this binary is running on
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    pub fn is_unix(self) -> bool {
        self == Platform::Unix
    }
}

/// Whether a platform identifier names a Unix-family system
pub fn is_unix(identifier: &str) -> bool {
    let identifier = identifier.trim();
    UNIX_IDENTIFIERS
        .iter()
        .any(|unix| unix.eq_ignore_ascii_case(identifier))
}

/// Reports the platform family the key map should be chosen for
pub trait PlatformDetector {
    fn platform(&self) -> Platform;
}

/// A fixed platform, independent of the host
impl PlatformDetector for Platform {
    fn platform(&self) -> Platform {
        *self
    }
}

/// Queries the running system on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformDetector for HostPlatform {
    fn platform(&self) -> Platform {
        Platform::current()
    }
}
