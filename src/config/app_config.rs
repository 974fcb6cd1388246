use std::path::{Path, PathBuf};

use crate::core::errors::{Result, UuEnvError};

/// Directory under the home directory used when `UU_HOME` is unset.
pub const DEFAULT_BASE_DIR: &str = ".uu";

/// Extension of every environment file.
pub const ENV_EXTENSION: &str = "properties";

/// Resolved locations of the environment files and the active file.
///
/// Built once at startup and handed to every operation by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_dir: PathBuf,
    /// `<base>/config/uu-client`, one `<name>.properties` per environment.
    pub env_dir: PathBuf,
    /// `<base>/config/uu-client.properties`.
    pub active_file: PathBuf,
}

impl AppConfig {
    /// Resolve the base directory from an explicit override or the home
    /// directory.
    ///
    /// An empty override counts as unset.
    pub fn resolve(uu_home: Option<&Path>, home: Option<&Path>) -> Result<Self> {
        let base_dir = match uu_home.filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => dir.to_path_buf(),
            None => home
                .map(|h| h.join(DEFAULT_BASE_DIR))
                .ok_or(UuEnvError::HomeNotFound)?,
        };
        Ok(Self::from_base(base_dir))
    }

    /// Load using `UU_HOME` (already read by clap) and the user's home.
    pub fn load(uu_home: Option<&Path>) -> Result<Self> {
        let home = dirs::home_dir();
        Self::resolve(uu_home, home.as_deref())
    }

    /// Derive the fixed layout below `base_dir`.
    pub fn from_base(base_dir: PathBuf) -> Self {
        let config_dir = base_dir.join("config");
        Self {
            env_dir: config_dir.join("uu-client"),
            active_file: config_dir.join(format!("uu-client.{ENV_EXTENSION}")),
            base_dir,
        }
    }

    /// Path an environment named `name` would live at.
    pub fn env_file(&self, name: &str) -> PathBuf {
        self.env_dir.join(format!("{name}.{ENV_EXTENSION}"))
    }
}
