use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "linehist",
    version,
    about = "Line-length histogram and comment tally for Haskell-style sources",
    long_about = None
)]
pub struct Args {
    /// Files to scan, in order
    #[arg(value_name = "PATH", required = true, value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Skip a path entirely (exact match, never opened); may be repeated
    #[arg(long = "ignore", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub ignore: Vec<PathBuf>,

    /// Exclude comment lines from the blank/length classification
    #[arg(long = "skip-comments", action = ArgAction::SetTrue)]
    pub skip_comments: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if command execution fails.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
