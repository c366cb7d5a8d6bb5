//! Error types for the diff crate.

use std::fmt;

use dsd_types::{NodeKind, Path};

/// Which input of a comparison an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The baseline (left) input.
    Left,
    /// The compared (right) input.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur during a structural comparison.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// A comparison root was a scalar instead of a mapping or sequence.
    #[error("{side} root is not a composite value (got {kind})")]
    NotComposite { side: Side, kind: NodeKind },

    /// The inputs nest deeper than the configured limit.
    #[error("nesting exceeds {limit} levels at '{path}'")]
    DepthExceeded { path: Path, limit: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
