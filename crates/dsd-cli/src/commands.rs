use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use dsd_types::read_json_file;
use tracing::info;

use crate::cli::*;
use crate::config::DiffConfig;
use crate::render::{self, RenderOptions};

/// Result of a successful run, mapped to the process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No differences: exit 0.
    Clean,
    /// At least one difference: exit 1.
    Differences,
}

impl Outcome {
    fn from_clean(clean: bool) -> Self {
        if clean {
            Self::Clean
        } else {
            Self::Differences
        }
    }

    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Clean => ExitCode::SUCCESS,
            Self::Differences => ExitCode::from(1),
        }
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<Outcome> {
    let config = match &cli.config {
        Some(path) => DiffConfig::load(path)?,
        None => DiffConfig::default(),
    };
    let opts = RenderOptions {
        format: cli.format,
        skip_segments: config.skip_segments.clone(),
        color: !cli.no_color && io::stdout().is_terminal(),
    };
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Files(args) => cmd_files(args, config, &opts, &mut out),
        Command::Dirs(args) => cmd_dirs(args, config, &opts, &mut out),
    }
}

fn cmd_files<W: Write>(
    args: FilesArgs,
    config: DiffConfig,
    opts: &RenderOptions,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let differ = config.with_exclusions(args.exclude).to_differ();

    let left = read_json_file(&args.a).with_context(|| format!("decoding {}", args.a.display()))?;
    let right = read_json_file(&args.b).with_context(|| format!("decoding {}", args.b.display()))?;

    let diff = differ
        .compare(&left, &right)
        .with_context(|| format!("comparing {} and {}", args.a.display(), args.b.display()))?;
    info!(changes = diff.len(), "files compared");

    render::render_diff(out, &diff, opts)?;
    Ok(Outcome::from_clean(diff.is_empty()))
}

fn cmd_dirs<W: Write>(
    args: DirsArgs,
    config: DiffConfig,
    opts: &RenderOptions,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let differ = config.with_exclusions(args.exclude).to_differ();

    let report = dsd_walk::compare_dirs(&args.baseline, &args.test, &differ).with_context(|| {
        format!(
            "comparing {} against {}",
            args.test.display(),
            args.baseline.display()
        )
    })?;

    render::render_dir_report(out, &report, opts)?;
    Ok(Outcome::from_clean(report.is_clean()))
}
