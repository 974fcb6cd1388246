use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::switcher::Switcher;
use crate::core::traits::env_store::EnvStore;

/// Execute `uu-env --list`.
pub fn execute<S: EnvStore>(switcher: &Switcher<S>) -> Result<()> {
    let names = switcher.list()?;
    output::success("Available environments:");
    println!("{}", names.join(" "));
    Ok(())
}
