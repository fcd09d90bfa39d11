use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Supplies the directory roots key map files are looked up under
pub trait PathResolver {
    /// Root of the application-wide settings
    fn application_data_directory(&self) -> &Path;

    /// Root of the current user's settings
    fn user_data_directory(&self) -> &Path;

    /// Subdirectory name shared by both roots
    fn application_name(&self) -> &str;
}

/// Directory layout for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPaths {
    pub application_data_directory: PathBuf,
    pub user_data_directory: PathBuf,
    pub application_name: String,
}

impl AppPaths {
    pub fn new(
        application_data_directory: impl Into<PathBuf>,
        user_data_directory: impl Into<PathBuf>,
        application_name: impl Into<String>,
    ) -> Self {
        Self {
            application_data_directory: application_data_directory.into(),
            user_data_directory: user_data_directory.into(),
            application_name: application_name.into(),
        }
    }

    /// Resolve the roots from the host's standard directories.
    ///
    /// The application layer lives under the data directory
    /// (`~/.local/share`, `~/Library/Application Support`, `%APPDATA%`) and the
    /// user layer under the config directory (`~/.config`, `%APPDATA%`).
    pub fn from_system(application_name: impl Into<String>) -> Result<Self> {
        let application_data_directory = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let user_data_directory = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(Self::new(
            application_data_directory,
            user_data_directory,
            application_name,
        ))
    }
}

impl PathResolver for AppPaths {
    fn application_data_directory(&self) -> &Path {
        &self.application_data_directory
    }

    fn user_data_directory(&self) -> &Path {
        &self.user_data_directory
    }

    fn application_name(&self) -> &str {
        &self.application_name
    }
}

impl<T: PathResolver + ?Sized> PathResolver for &T {
    fn application_data_directory(&self) -> &Path {
        (**self).application_data_directory()
    }

    fn user_data_directory(&self) -> &Path {
        (**self).user_data_directory()
    }

    fn application_name(&self) -> &str {
        (**self).application_name()
    }
}
