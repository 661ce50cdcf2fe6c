use std::{io, path::PathBuf};

use tabkeep_domain::AmountError;
use thiserror::Error;

/// Outcome of a storage read or write that did not succeed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("`{0}` does not exist")]
    NotFound(PathBuf),
    #[error("`{path}` is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] tabkeep_config::ConfigError),
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),
    #[error("No entry ids left to assign")]
    IdSpaceExhausted,
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
