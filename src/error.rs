use std::io;
use thiserror::Error;

use crate::config::settings::ConfigError;

/// Top-level application error
///
/// Git command failures never reach this type; they are rendered in-line as
/// part of the report. Only faults that stop the program outright end up here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
