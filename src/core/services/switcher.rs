use crate::core::errors::{Result, UuEnvError};
use crate::core::models::environment::Environment;
use crate::core::traits::env_store::EnvStore;

/// Lists, previews and activates environments through an `EnvStore`.
pub struct Switcher<S: EnvStore> {
    pub store: S,
}

impl<S: EnvStore> Switcher<S> {
    /// Names of all available environments.
    pub fn list(&self) -> Result<Vec<String>> {
        self.store.list()
    }

    /// Contents of the active configuration file.
    pub fn current(&self) -> Result<Vec<u8>> {
        self.store.read_active()
    }

    /// Look up `name` and return it with its contents.
    ///
    /// # Errors
    ///
    /// `EnvironmentNotFound` if no `<name>.properties` exists.
    pub fn preview(&self, name: &str) -> Result<(Environment, Vec<u8>)> {
        let env = self.require(name)?;
        let content = self.store.read(&env)?;
        Ok((env, content))
    }

    /// Make `name` the active environment.
    ///
    /// The active file is left untouched when `name` does not exist.
    pub fn change(&self, name: &str) -> Result<Environment> {
        let env = self.require(name)?;
        self.store.activate(&env)?;
        Ok(env)
    }

    fn require(&self, name: &str) -> Result<Environment> {
        self.store
            .locate(name)
            .ok_or_else(|| UuEnvError::EnvironmentNotFound {
                name: name.to_string(),
            })
    }
}
