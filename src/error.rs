//! Error types for the cidls directory lister.

use std::path::PathBuf;
use thiserror::Error;

/// Per-entry hashing errors
///
/// These never abort a listing; they are rendered in place of the CID.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("insufficient permissions")]
    InsufficientPermissions,

    #[error("no such file")]
    NoSuchFile,

    #[error("is a directory")]
    IsDirectory,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid multihash: {0}")]
    Multihash(String),
}

impl HashError {
    /// Errors the listing reports as a bare red message rather than `ERROR: ...`
    pub fn is_access_error(&self) -> bool {
        matches!(self, HashError::InsufficientPermissions | HashError::NoSuchFile)
    }
}

/// Top-level errors that stop a listing
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Directory {} does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Permission denied for directory {}, try using sudo?", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{} is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Error reading directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error expanding tilde: home directory is unavailable")]
    HomeDirUnavailable,

    #[error("unable to get current directory: {0}")]
    CurrentDir(std::io::Error),

    #[error("Invalid CID version. Use 0 or 1.")]
    InvalidCidVersion(String),

    #[error("Failed to start hashing pool: {0}")]
    WorkerSpawn(String),

    #[error("Hashing task for {0} panicked")]
    WorkerPanicked(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ListingError {
    /// True when stdout was closed early, e.g. `cidls | head`
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ListingError::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

impl From<config::ConfigError> for ListingError {
    fn from(err: config::ConfigError) -> Self {
        ListingError::ConfigError(err.to_string())
    }
}
