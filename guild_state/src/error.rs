//! Error type shared by the guildhall crates.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by state construction, crisis generation and config loading.
///
/// Lookups that simply find nothing (unknown puzzle, missing player) are not
/// errors and surface as `None`/`false` instead.
#[derive(Debug, Error)]
pub enum GuildError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GuildError>;
