//! multini: canonical dump tool for INI-like profile stores.
//!
//! Loads one or more files (or paths whose final segment is a shell glob)
//! into a single store and prints the canonical dump to stdout, suitable
//! for byte-for-byte comparison against a checked-in exemplar.

use std::process::ExitCode;

use clap::Parser;

use multini::profile::{Mode, Profile};

mod app;

use app::{exit_code, setup_tracing};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "multini",
    version,
    about = "Load INI-like profile sources and print a canonical dump"
)]
struct Cli {
    /// Files to load, or paths whose final segment is a shell glob
    #[arg(required = true)]
    paths: Vec<String>,

    /// Treat repeated sections with distinct `Id` keys as separate instances
    #[arg(long)]
    extended: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let mode = if cli.extended {
        Mode::Extended
    } else {
        Mode::Legacy
    };
    let mut profile = Profile::new(mode);
    let mut failures = 0usize;

    for path in &cli.paths {
        match profile.load(path) {
            Ok(outcome) => {
                for error in &outcome.errors {
                    tracing::error!("{error}");
                }
                failures += outcome.errors.len();
            }
            Err(error) => {
                tracing::error!("{error}");
                failures += 1;
            }
        }
    }

    print!("{}", profile.dump());

    if failures > 0 {
        exit_code::LOAD_ERROR
    } else {
        exit_code::SUCCESS
    }
}
