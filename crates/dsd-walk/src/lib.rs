//! Baseline-versus-test directory comparison.
//!
//! Walks a baseline directory and checks every file against the file at the
//! same relative path under a test directory. JSON files are decoded and
//! compared structurally; any other file must match byte for byte. Files
//! only the test directory has are reported too, and a file pair that fails
//! to decode is recorded without stopping the walk.
//!
//! # Key Types
//!
//! - [`DirReport`] -- Per-file outcomes for a whole tree
//! - [`FileReport`] / [`FileOutcome`] -- Result for one file

pub mod error;
pub mod report;
pub mod walk;

pub use error::{WalkError, WalkResult};
pub use report::{DirReport, FileOutcome, FileReport};
pub use walk::compare_dirs;
