//! Data model for dsdiff.
//!
//! Decoders turn domain files into [`Node`] trees; the differ in `dsd-diff`
//! walks two such trees and reports discrepancies located by a [`Path`].
//!
//! # Key Types
//!
//! - [`Node`] — Closed tagged variant: mapping, sequence, or scalar
//! - [`Mapping`] — Insertion-ordered field map with unique keys
//! - [`Scalar`] — Leaf value (bool, int, float, string, null, binary)
//! - [`NodeKind`] — Runtime kind used for type-mismatch detection
//! - [`Path`] / [`PathSegment`] — Location of a value inside a tree

pub mod decode;
pub mod error;
pub mod node;
pub mod path;

pub use decode::read_json_file;
pub use error::{TypeError, TypeResult};
pub use node::{Mapping, Node, NodeKind, Scalar};
pub use path::{Path, PathSegment};
