pub mod env_store;
pub mod prompter;
