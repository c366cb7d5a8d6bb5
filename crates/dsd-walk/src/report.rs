//! Directory comparison results.

use std::path::PathBuf;

use dsd_diff::StructDiff;
use serde::Serialize;

/// Outcome for one file of either tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", content = "changes", rename_all = "kebab-case")]
pub enum FileOutcome {
    /// The test file matches the baseline.
    Identical,
    /// No file at the same relative path in the test tree.
    Missing,
    /// A test file with no counterpart in the baseline tree.
    MissingInBaseline,
    /// Both JSON files decoded but their structures differ.
    Different(StructDiff),
    /// A non-JSON file whose bytes differ.
    ContentMismatch,
    /// The pair could not be read, decoded, or compared.
    Error(String),
}

/// A file and its outcome.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FileReport {
    /// Path relative to the tree root.
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, outcome: FileOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }
}

/// Outcomes for every file in both trees: baseline walk order, then extra test files.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DirReport {
    pub files: Vec<FileReport>,
}

impl DirReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when both trees hold the same files with identical content.
    pub fn is_clean(&self) -> bool {
        self.files
            .iter()
            .all(|f| matches!(f.outcome, FileOutcome::Identical))
    }

    pub fn missing(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Missing))
    }

    /// Test files the baseline does not have.
    pub fn missing_in_baseline(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::MissingInBaseline))
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Error(_)))
    }

    /// Files that exist on both sides but differ.
    pub fn mismatched(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| {
            matches!(
                f.outcome,
                FileOutcome::Different(_) | FileOutcome::ContentMismatch
            )
        })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
