//! Structural differ for dsdiff.
//!
//! Compares two nested [`Node`](dsd_types::Node) trees and reports every
//! discrepancy as a path-qualified [`Difference`]: added and deleted fields,
//! kind changes, and scalar value changes. Floats are compared with a
//! relative tolerance anchored on the baseline (left) value.
//!
//! # Key Types
//!
//! - [`Differ`] -- Configured comparison (exclusions, tolerance, depth limit)
//! - [`Difference`] / [`ChangeKind`] -- One reported discrepancy
//! - [`StructDiff`] -- Ordered list of differences with summary counts
//! - [`Tolerance`] -- Float equality thresholds

pub mod difference;
pub mod differ;
pub mod error;
pub mod tolerance;

pub use difference::{ChangeKind, Difference, StructDiff};
pub use differ::{compare, diff_nodes, Differ, Exclusions, DEFAULT_MAX_DEPTH};
pub use error::{DiffError, DiffResult, Side};
pub use tolerance::Tolerance;
