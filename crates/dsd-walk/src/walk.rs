//! Walk a baseline tree and a test tree and compare them file by file.

use std::fs;
use std::path::{Path, PathBuf};

use dsd_diff::Differ;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{WalkError, WalkResult};
use crate::report::{DirReport, FileOutcome, FileReport};

/// Compare every regular file under `baseline` with its counterpart under
/// `test`, then report the files only `test` has.
///
/// A file pair that cannot be read, decoded, or compared is recorded as
/// [`FileOutcome::Error`] and the walk goes on. Only traversal errors abort.
pub fn compare_dirs(
    baseline: impl AsRef<Path>,
    test: impl AsRef<Path>,
    differ: &Differ,
) -> WalkResult<DirReport> {
    let baseline = baseline.as_ref();
    let test = test.as_ref();
    let mut report = DirReport::new();

    for entry in WalkDir::new(baseline).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = relative_path(entry.path(), baseline);
        let test_path = test.join(&relative);

        let outcome = if !test_path.is_file() {
            FileOutcome::Missing
        } else {
            let compared = if is_json(entry.path()) {
                compare_json(entry.path(), &test_path, differ)
            } else {
                compare_bytes(entry.path(), &test_path)
            };
            compared.unwrap_or_else(|e| {
                warn!(path = %relative.display(), error = %e, "file comparison failed");
                FileOutcome::Error(e.to_string())
            })
        };

        debug!(path = %relative.display(), outcome = outcome_name(&outcome), "compared file");
        report.files.push(FileReport::new(relative, outcome));
    }

    if test.is_dir() {
        for entry in WalkDir::new(test).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = relative_path(entry.path(), test);
            if !baseline.join(&relative).is_file() {
                debug!(path = %relative.display(), "missing in baseline");
                report
                    .files
                    .push(FileReport::new(relative, FileOutcome::MissingInBaseline));
            }
        }
    } else {
        debug!(path = %test.display(), "test directory absent");
    }

    info!(
        files = report.len(),
        missing = report.missing().count(),
        extra = report.missing_in_baseline().count(),
        mismatched = report.mismatched().count(),
        failed = report.failed().count(),
        "directory comparison complete"
    );
    Ok(report)
}

fn relative_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn compare_json(baseline: &Path, test: &Path, differ: &Differ) -> WalkResult<FileOutcome> {
    let decode = |path: &Path| {
        dsd_types::read_json_file(path).map_err(|source| WalkError::Decode {
            path: path.to_path_buf(),
            source,
        })
    };
    let left = decode(baseline)?;
    let right = decode(test)?;

    let diff = differ
        .compare(&left, &right)
        .map_err(|source| WalkError::Diff {
            path: baseline.to_path_buf(),
            source,
        })?;

    Ok(if diff.is_empty() {
        FileOutcome::Identical
    } else {
        FileOutcome::Different(diff)
    })
}

fn compare_bytes(baseline: &Path, test: &Path) -> WalkResult<FileOutcome> {
    let read = |path: &Path| {
        fs::read(path).map_err(|source| WalkError::Io {
            path: path.to_path_buf(),
            source,
        })
    };
    Ok(if read(baseline)? == read(test)? {
        FileOutcome::Identical
    } else {
        FileOutcome::ContentMismatch
    })
}

fn outcome_name(outcome: &FileOutcome) -> &'static str {
    match outcome {
        FileOutcome::Identical => "identical",
        FileOutcome::Missing => "missing",
        FileOutcome::MissingInBaseline => "missing-in-baseline",
        FileOutcome::Different(_) => "different",
        FileOutcome::ContentMismatch => "content-mismatch",
        FileOutcome::Error(_) => "error",
    }
}
