use std::path::PathBuf;

/// All domain errors for uu-env.
///
/// Each variant carries the path or name involved so the message printed
/// by `main` is enough to fix the problem.
#[derive(Debug, thiserror::Error)]
pub enum UuEnvError {
    #[error(
        "Environment '{name}' does not exist\n\n  \
         Use 'uu-env --list' to list available environments"
    )]
    EnvironmentNotFound { name: String },

    #[error(
        "No environment given to preview\n\n  \
         Usage: uu-env --preview <env>"
    )]
    MissingEnvironmentName,

    #[error(
        "Could not determine the home directory\n\n  \
         Set UU_HOME to the directory holding config/uu-client.properties."
    )]
    HomeNotFound,

    #[error("Failed to read environment directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read selection: {source}")]
    Prompt { source: std::io::Error },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, UuEnvError>;
