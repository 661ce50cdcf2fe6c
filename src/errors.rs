use std::io;

use tabkeep_core::CoreError;
use thiserror::Error;

pub type CommandResult = Result<(), CommandError>;

/// Failures surfaced by command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Missing or unusable arguments; the shell answers with the usage text.
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("could not run pager `{pager}`: {source}")]
    Pager {
        pager: &'static str,
        #[source]
        source: io::Error,
    },
}

impl CommandError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        CommandError::InvalidArguments(message.into())
    }
}
