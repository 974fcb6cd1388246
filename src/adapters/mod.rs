pub mod env_stores;
pub mod prompt;
