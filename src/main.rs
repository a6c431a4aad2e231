//! Precheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use precheck::cli::Cli;
use precheck::pipeline::{standard_pipeline, PipelineRunner, ShellExecutor};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so a plain run adds nothing to the steps' own output
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("precheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("precheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Precheck starting with args: {:?}", cli);

    let mut runner = PipelineRunner::new(ShellExecutor);

    match runner.run(&standard_pipeline()) {
        Ok(outcome) => ExitCode::from(outcome.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
