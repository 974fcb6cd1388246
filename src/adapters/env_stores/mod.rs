pub mod file_env_store;
