mod adapters;
mod cli;
mod config;
mod core;

use std::io;

use clap::Parser;
use tracing::debug;

use crate::adapters::env_stores::file_env_store::FileEnvStore;
use crate::adapters::prompt::line_prompter::LinePrompter;
use crate::cli::{Cli, Command};
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::switcher::Switcher;

fn main() {
    let args = Cli::parse();

    if args.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    cli::logging::init(args.verbose);

    if let Err(e) = run(&args) {
        cli::output::error(&format!("ERROR: {e}"));
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> Result<()> {
    let command = args.command()?;
    let config = AppConfig::load(args.home.as_deref())?;
    debug!(?command, base = %config.base_dir.display(), "resolved configuration");

    let switcher = Switcher {
        store: FileEnvStore::new(&config),
    };

    match command {
        Command::List => cli::commands::list::execute(&switcher),
        Command::ShowCurrent => cli::commands::show::execute(&switcher),
        Command::Preview(name) => cli::commands::preview::execute(&switcher, &name),
        Command::Change(name) => cli::commands::change::execute(&switcher, &name),
        Command::Interactive => {
            let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
            cli::commands::interactive::execute(&switcher, &mut prompter)
        }
    }
}
