use std::{path::PathBuf, process::ExitStatus};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for pti-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{message}")]
    #[diagnostic(code(pti::invalid_argument))]
    InvalidArgument { message: String },

    #[error("failed to access '{path}'")]
    #[diagnostic(code(pti::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no repository root found at or above '{start}'")]
    #[diagnostic(
        code(pti::root_not_found),
        help("run pti inside a git repository, or pass --root <dir>")
    )]
    RootNotFound { start: PathBuf },

    #[error("failed to start `{program}`")]
    #[diagnostic(code(pti::spawn))]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    #[diagnostic(code(pti::process))]
    Process { command: String, status: ExitStatus },

    #[error("failed to serialize {what}")]
    #[diagnostic(code(pti::serialize))]
    Serialize {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error tied to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error for the named value
    pub fn serialize(what: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Serialize {
            what: what.into(),
            source,
        }
    }
}
