use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the shell. None of them is fatal to the session: the
/// dispatcher renders every variant through the active output sink.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Parsing error: {0}")]
    Parse(#[from] shell_words::ParseError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Missing or malformed arguments. The message already names the command.
    #[error("{0}")]
    Usage(String),

    /// The operation ran but could not complete. The message names the command.
    #[error("{0}")]
    Operation(String),

    #[error("{action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ShellError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn operation(message: impl Into<String>) -> Self {
        Self::Operation(message.into())
    }

    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
