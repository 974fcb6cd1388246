use tracing::info;

use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::switcher::Switcher;
use crate::core::traits::env_store::EnvStore;

/// Execute `uu-env <env>`: copy the environment over the active file.
pub fn execute<S: EnvStore>(switcher: &Switcher<S>, name: &str) -> Result<()> {
    let env = switcher.change(name)?;
    info!(env = %env.name, "environment activated");
    output::success(&format!("Using a copy of {}", env.path.display()));
    Ok(())
}
