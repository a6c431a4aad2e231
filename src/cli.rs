//! CLI argument definitions.
//!
//! Precheck is invoked with zero arguments by an automation system; the
//! pipeline itself has no configuration surface. The only flag is the
//! `--debug` logging switch, plus clap's generated `--help` and `--version`.

use clap::Parser;

/// Precheck - Fail-fast runner for build pipeline checks.
///
/// Runs ./run_all_tests, then ./check_formatting, stopping at the first
/// failure and exiting with that step's status.
#[derive(Debug, Parser)]
#[command(name = "precheck")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
