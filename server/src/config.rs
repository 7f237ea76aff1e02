//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CREATIONS_PATH: &str = "data/creations.json";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {value:?}")]
    InvalidPort { value: String },
    #[error("CREATIONS_PATH is set but empty")]
    EmptyCreationsPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub creations_path: PathBuf,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `CREATIONS_PATH`: JSON file of saved creations, default `data/creations.json`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a variable is present but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. `from_env` is this over
    /// `std::env::var`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a variable is present but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw.clone() })?,
        };

        let creations_path = match lookup("CREATIONS_PATH") {
            None => PathBuf::from(DEFAULT_CREATIONS_PATH),
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyCreationsPath),
            Some(raw) => PathBuf::from(raw.trim()),
        };

        Ok(Self { port, creations_path })
    }
}
