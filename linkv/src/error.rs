//! Error types for store operations.

use std::io;
use std::path::PathBuf;

use crate::Key;

/// Errors returned by backend operations and snapshot I/O.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// `delete` on a key that has no entry.
    #[error("{0} not found")]
    NotFound(Key),

    /// An optional capability the backend does not provide.
    #[error("{0} is not supported by this backend")]
    Unsupported(&'static str),

    /// Reading or writing the snapshot file failed.
    #[error("snapshot I/O failed for {}", path.display())]
    Snapshot {
        /// Snapshot file involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing to an output sink failed.
    #[error("output write failed")]
    Output(#[from] io::Error),
}

impl StoreError {
    pub(crate) fn snapshot(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| StoreError::Snapshot { path, source }
    }
}

/// Result alias for store operations.
pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// A snapshot line that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// No comma separating key and value.
    #[error("missing ',' between key and value")]
    MissingComma,

    /// The key field is not a valid integer.
    #[error("invalid key {0:?}")]
    InvalidKey(String),

    /// The line is not valid UTF-8.
    #[error("record is not valid UTF-8")]
    InvalidUtf8,
}
