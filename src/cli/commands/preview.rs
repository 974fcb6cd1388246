use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::switcher::Switcher;
use crate::core::traits::env_store::EnvStore;

/// Execute `uu-env --preview <env>`.
pub fn execute<S: EnvStore>(switcher: &Switcher<S>, name: &str) -> Result<()> {
    let (env, content) = switcher.preview(name)?;
    output::header(&format!("Environment specified in {}:", env.path.display()));
    output::contents(&content)?;
    Ok(())
}
