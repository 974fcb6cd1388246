use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::switcher::Switcher;
use crate::core::traits::env_store::EnvStore;

/// Execute `uu-env --show`: print the active configuration file.
pub fn execute<S: EnvStore>(switcher: &Switcher<S>) -> Result<()> {
    let content = switcher.current()?;
    output::header("Current environment:");
    output::contents(&content)?;
    Ok(())
}
