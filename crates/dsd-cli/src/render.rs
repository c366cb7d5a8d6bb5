//! Human and machine rendering of comparison results.

use std::io::{self, Write};

use colored::Colorize;
use dsd_diff::{ChangeKind, Difference, StructDiff};
use dsd_walk::{DirReport, FileOutcome};

use crate::cli::OutputFormat;

pub struct RenderOptions {
    pub format: OutputFormat,
    pub skip_segments: Vec<String>,
    pub color: bool,
}

/// `path: kind, detail detail`, with skipped segments removed from the path.
pub fn format_difference(d: &Difference, opts: &RenderOptions) -> String {
    let path = d.path().join_filtered("/", &opts.skip_segments);
    let kind = d.kind().as_str();
    let kind = if opts.color {
        match d.kind() {
            ChangeKind::Added => kind.green().to_string(),
            ChangeKind::Deleted => kind.red().to_string(),
            ChangeKind::TypeModified => kind.magenta().to_string(),
            ChangeKind::ValueModified => kind.yellow().to_string(),
        }
    } else {
        kind.to_string()
    };
    format!("{path}: {kind}, {}", d.details().join(" "))
}

pub fn render_diff<W: Write>(out: &mut W, diff: &StructDiff, opts: &RenderOptions) -> io::Result<()> {
    match opts.format {
        OutputFormat::Text => write_differences(out, diff, opts, ""),
        OutputFormat::Json => write_json(out, diff),
    }
}

pub fn render_dir_report<W: Write>(
    out: &mut W,
    report: &DirReport,
    opts: &RenderOptions,
) -> io::Result<()> {
    if opts.format == OutputFormat::Json {
        return write_json(out, report);
    }

    for file in &report.files {
        let name = file.path.display().to_string();
        let name = if opts.color { name.bold().to_string() } else { name };
        match &file.outcome {
            FileOutcome::Identical => {}
            FileOutcome::Missing => writeln!(out, "{name} missing in test")?,
            FileOutcome::MissingInBaseline => writeln!(out, "{name} missing in baseline")?,
            FileOutcome::Error(message) => writeln!(out, "Error on {name}: {message}")?,
            FileOutcome::ContentMismatch => writeln!(out, "Content differs on {name}")?,
            FileOutcome::Different(diff) => {
                writeln!(out, "Differences on {name}")?;
                write_differences(out, diff, opts, "  ")?;
            }
        }
    }
    Ok(())
}

fn write_differences<W: Write>(
    out: &mut W,
    diff: &StructDiff,
    opts: &RenderOptions,
    indent: &str,
) -> io::Result<()> {
    for d in diff {
        writeln!(out, "{indent}{}", format_difference(d, opts))?;
    }
    Ok(())
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsd_diff::diff_nodes;
    use dsd_types::Node;
    use dsd_walk::FileReport;
    use serde_json::json;

    fn text() -> RenderOptions {
        RenderOptions {
            format: OutputFormat::Text,
            skip_segments: vec!["Value".into(), "Alphabetic".into()],
            color: false,
        }
    }

    fn sample_diff() -> StructDiff {
        let a = Node::from(json!({"00100010": {"vr": "PN", "Value": [{"Alphabetic": "Doe"}]}}));
        let b = Node::from(json!({"00100010": {"vr": "PN", "Value": [{"Alphabetic": "Roe"}]}}));
        diff_nodes(&a, &b).unwrap()
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn wrapper_segments_are_dropped() {
        let diff = sample_diff();
        assert_eq!(
            format_difference(&diff.changes[0], &text()),
            r#"00100010/0: value-modified, "Doe" "Roe""#
        );
    }

    #[test]
    fn nothing_skipped_without_skip_segments() {
        let diff = sample_diff();
        let opts = RenderOptions { skip_segments: Vec::new(), ..text() };
        assert_eq!(
            format_difference(&diff.changes[0], &opts),
            r#"00100010/Value/0/Alphabetic: value-modified, "Doe" "Roe""#
        );
    }

    #[test]
    fn text_diff_one_line_per_record() {
        let a = Node::from(json!({"x": 1, "y": 2}));
        let b = Node::from(json!({"y": 3, "z": 4}));
        let diff = diff_nodes(&a, &b).unwrap();
        let out = rendered(|w| render_diff(w, &diff, &text()));
        assert_eq!(out, "x: deleted, 1\ny: value-modified, 2 3\nz: added, 4\n");
    }

    #[test]
    fn json_diff_is_parseable() {
        let diff = sample_diff();
        let opts = RenderOptions { format: OutputFormat::Json, ..text() };
        let out = rendered(|w| render_diff(w, &diff, &opts));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["kind"], "value-modified");
        assert_eq!(value[0]["path"], json!(["00100010", "Value", 0, "Alphabetic"]));
    }

    #[test]
    fn dir_report_text() {
        let report = DirReport {
            files: vec![
                FileReport::new("same.json", FileOutcome::Identical),
                FileReport::new("gone.json", FileOutcome::Missing),
                FileReport::new("meta.json", FileOutcome::Different(sample_diff())),
                FileReport::new("image.nii", FileOutcome::ContentMismatch),
            ],
        };
        let out = rendered(|w| render_dir_report(w, &report, &text()));
        assert_eq!(
            out,
            "gone.json missing in test\n\
             Differences on meta.json\n  \
             00100010/0: value-modified, \"Doe\" \"Roe\"\n\
             Content differs on image.nii\n"
        );
    }

    #[test]
    fn dir_report_text_extra_and_failed_files() {
        let report = DirReport {
            files: vec![
                FileReport::new("a.json", FileOutcome::Error("failed to decode a.json".into())),
                FileReport::new("b.json", FileOutcome::Missing),
                FileReport::new("new.dcm", FileOutcome::MissingInBaseline),
            ],
        };
        let out = rendered(|w| render_dir_report(w, &report, &text()));
        assert_eq!(
            out,
            "Error on a.json: failed to decode a.json
             b.json missing in test
             new.dcm missing in baseline
"
        );
    }

    #[test]
    fn dir_report_json_tags_new_outcomes() {
        let report = DirReport {
            files: vec![
                FileReport::new("a.json", FileOutcome::Error("bad".into())),
                FileReport::new("new.dcm", FileOutcome::MissingInBaseline),
            ],
        };
        let opts = RenderOptions { format: OutputFormat::Json, ..text() };
        let out = rendered(|w| render_dir_report(w, &report, &opts));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["files"][0]["outcome"], json!({"status": "error", "changes": "bad"}));
        assert_eq!(value["files"][1]["outcome"]["status"], "missing-in-baseline");
    }
}
