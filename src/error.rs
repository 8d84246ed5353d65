use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between reading the command line and the
/// external tool exiting. The variant is what callers and the process exit
/// code act on; the payload only feeds the rendered message.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing arguments: {0}")]
    MissingArgs(String),

    #[error("source path '{path}' is invalid: {reason}")]
    InvalidSource { path: String, reason: String },

    #[error("invalid target path '{path}': {reason}")]
    InvalidTarget { path: String, reason: String },

    #[error("source and target paths are the same")]
    SamePath,

    #[error("unrecognized file format or ambiguous operation: {0}")]
    UnknownFormat(String),

    #[error("required tool not found: {0}, ensure it is installed and on your PATH")]
    ToolNotFound(String),

    #[error("operation failed: {tool} exited with code {code}")]
    OperationFailed { tool: String, code: i32 },

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("not enough disk space")]
    NotEnoughSpace,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingArgs(_) => 1,
            Error::InvalidSource { .. } => 2,
            Error::InvalidTarget { .. } => 3,
            Error::SamePath => 4,
            Error::UnknownFormat(_) => 5,
            Error::ToolNotFound(_) => 6,
            Error::OperationFailed { .. } => 7,
            Error::PermissionDenied(_) => 8,
            Error::NotEnoughSpace => 9,
            Error::Io(_) => 99,
        }
    }
}
