//! Error types for the cinegraph-api crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
