//! Configuration management for the dotpath command-line tool.
//!
//! This crate provides the settings types and the loader that resolves them
//! from builder overrides, environment variables and a JSON settings file.

pub mod constants;
mod loader;
mod paths;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use paths::default_config_path;
pub use types::{Config, OutputFormat};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
