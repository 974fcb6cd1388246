use std::path::Path;

use tracing::debug;

use crate::config::app_config::{AppConfig, ENV_EXTENSION};
use crate::core::errors::{Result, UuEnvError};
use crate::core::models::environment::Environment;
use crate::core::traits::env_store::EnvStore;

/// Environment store over the `uu-client` directory layout.
///
/// ```text
/// <base>/config/uu-client.properties      active file
/// <base>/config/uu-client/dev.properties  environment "dev"
/// <base>/config/uu-client/prod.properties environment "prod"
/// ```
///
/// Nothing is cached: every call goes back to the filesystem.
pub struct FileEnvStore<'a> {
    config: &'a AppConfig,
}

impl<'a> FileEnvStore<'a> {
    /// Create a store over the paths in `config`.
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Strip the `.properties` suffix from a directory entry name.
    ///
    /// Names without the suffix, or that are only the suffix, are kept as is.
    fn stem(file_name: &str) -> &str {
        match file_name.strip_suffix(&format!(".{ENV_EXTENSION}")) {
            Some(stem) if !stem.is_empty() => stem,
            _ => file_name,
        }
    }

    /// A name can only refer to a file directly inside the env directory.
    fn is_plain_name(name: &str) -> bool {
        !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
    }

    fn read_path(path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|source| UuEnvError::ReadFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl EnvStore for FileEnvStore<'_> {
    fn list(&self) -> Result<Vec<String>> {
        let dir = &self.config.env_dir;
        let read_dir_err = |source| UuEnvError::ReadDir {
            path: dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let file_name = entry.file_name();
            names.push(Self::stem(&file_name.to_string_lossy()).to_string());
        }
        names.sort();

        debug!(dir = %dir.display(), count = names.len(), "listed environments");
        Ok(names)
    }

    fn locate(&self, name: &str) -> Option<Environment> {
        if !Self::is_plain_name(name) {
            debug!(name, "rejected environment name");
            return None;
        }

        let path = self.config.env_file(name);
        let found = path.is_file();
        debug!(name, path = %path.display(), found, "looked up environment");

        found.then(|| Environment {
            name: name.to_string(),
            path,
        })
    }

    fn read(&self, env: &Environment) -> Result<Vec<u8>> {
        Self::read_path(&env.path)
    }

    fn read_active(&self) -> Result<Vec<u8>> {
        Self::read_path(&self.config.active_file)
    }

    fn activate(&self, env: &Environment) -> Result<()> {
        let to = &self.config.active_file;
        let bytes = std::fs::copy(&env.path, to).map_err(|source| UuEnvError::CopyFile {
            from: env.path.clone(),
            to: to.clone(),
            source,
        })?;
        debug!(from = %env.path.display(), to = %to.display(), bytes, "copied environment");
        Ok(())
    }
}
