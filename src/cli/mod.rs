pub mod commands;
pub mod logging;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::core::errors::{Result, UuEnvError};

/// Switch the active uu-client configuration between environments.
///
/// With no flags and no environment name, asks what to do.
#[derive(Parser, Debug)]
#[command(name = "uu-env", about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Environment to switch to (or to preview with --preview)
    pub env: Option<String>,

    /// List available environments
    #[arg(short, long)]
    pub list: bool,

    /// Show current environment
    #[arg(short, long)]
    pub show: bool,

    /// Preview an environment
    #[arg(short, long)]
    pub preview: bool,

    /// Print version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Log lookups and file operations to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Base directory holding config/uu-client (default: ~/.uu)
    #[arg(long, env = "UU_HOME", value_name = "DIR", hide_env_values = true)]
    pub home: Option<PathBuf>,
}

/// The operation selected by the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    ShowCurrent,
    Preview(String),
    Change(String),
    Interactive,
}

impl Cli {
    /// Decide which operation to run.
    ///
    /// Flags win over the positional name, first match in the order
    /// list, show, preview.
    pub fn command(&self) -> Result<Command> {
        if self.list {
            return Ok(Command::List);
        }
        if self.show {
            return Ok(Command::ShowCurrent);
        }
        if self.preview {
            return self
                .env
                .clone()
                .map(Command::Preview)
                .ok_or(UuEnvError::MissingEnvironmentName);
        }
        Ok(match &self.env {
            Some(name) => Command::Change(name.clone()),
            None => Command::Interactive,
        })
    }
}
