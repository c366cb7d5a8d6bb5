use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod render;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    let color = !cli.no_color && std::io::stderr().is_terminal();

    match commands::run_command(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("{}", error_line(&e, color));
            ExitCode::from(2)
        }
    }
}

fn error_line(e: &anyhow::Error, color: bool) -> String {
    let label = if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    };
    format!("{label} {e:#}")
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn plain_error_line_has_no_escape_codes() {
        let e = Err::<(), _>(anyhow::anyhow!("not found"))
            .context("reading a.json")
            .unwrap_err();
        let line = error_line(&e, false);
        assert_eq!(line, "error: reading a.json: not found");
        assert!(!line.contains('\x1b'));
    }
}
