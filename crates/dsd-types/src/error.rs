use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building nodes from external input.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for data model results.
pub type TypeResult<T> = Result<T, TypeError>;
