//! Error types for the directory walker.

use std::path::PathBuf;

/// Errors that can occur while comparing two directory trees.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// Directory traversal failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON file could not be decoded.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: dsd_types::TypeError,
    },

    /// The structural comparison of a file pair failed.
    #[error("failed to compare {path}: {source}")]
    Diff {
        path: PathBuf,
        #[source]
        source: dsd_diff::DiffError,
    },
}

/// Convenience alias for walker results.
pub type WalkResult<T> = Result<T, WalkError>;
