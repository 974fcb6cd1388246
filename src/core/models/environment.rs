use std::path::PathBuf;

/// A named configuration profile backed by `<name>.properties`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub name: String,
    pub path: PathBuf,
}
