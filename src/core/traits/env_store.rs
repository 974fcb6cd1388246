use crate::core::errors::Result;
use crate::core::models::environment::Environment;

/// Port for the environment files and the active configuration file.
pub trait EnvStore {
    /// Names of all environments currently present.
    fn list(&self) -> Result<Vec<String>>;

    /// Find an environment by name. Returns `None` if its file is absent.
    fn locate(&self, name: &str) -> Option<Environment>;

    /// Raw contents of an environment file.
    fn read(&self, env: &Environment) -> Result<Vec<u8>>;

    /// Raw contents of the active configuration file.
    fn read_active(&self) -> Result<Vec<u8>>;

    /// Overwrite the active configuration file with `env`'s contents.
    fn activate(&self, env: &Environment) -> Result<()>;
}
