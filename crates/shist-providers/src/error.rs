use std::path::PathBuf;
use thiserror::Error;

/// Result type for shist-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while locating or reading a history file
#[derive(Error, Debug)]
pub enum Error {
    /// The history file could not be opened or read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A structured history block could not be decoded
    #[error("malformed history block in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: BlockError,
    },

    /// No reader is available for the current platform
    #[error("unsupported shell / platform")]
    UnsupportedPlatform,

    /// The requested shell has no reader
    #[error("unknown shell: {0}")]
    UnknownShell(String),

    /// No default history path could be derived (no home directory)
    #[error("cannot determine default history file for {0}")]
    NoDefaultPath(&'static str),
}

/// Position and cause of an undecodable fish history block
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct BlockError {
    pub line: usize,
    pub reason: String,
}

impl BlockError {
    pub(crate) fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
