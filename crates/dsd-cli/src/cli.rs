use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dsdiff",
    about = "Structural differences between decoded data sets",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Never color the output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// TOML file with exclusions, skipped path segments, and tolerances
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON files
    Files(FilesArgs),
    /// Compare every file of a baseline directory with a test directory
    Dirs(DirsArgs),
}

#[derive(Args)]
pub struct FilesArgs {
    /// Baseline file
    pub a: PathBuf,
    /// File compared against the baseline
    pub b: PathBuf,
    /// Field name to skip at any depth
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,
}

#[derive(Args)]
pub struct DirsArgs {
    pub baseline: PathBuf,
    pub test: PathBuf,
    /// Field name to skip at any depth in JSON files
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,
}
