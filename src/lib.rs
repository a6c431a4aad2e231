//! Precheck - Fail-fast sequential runner for build pipeline checks.
//!
//! Precheck runs a fixed, ordered pair of external commands from the current
//! directory: `./run_all_tests`, then `./check_formatting`. Execution is
//! strictly sequential and fail-fast: the first step that exits non-zero (or
//! cannot start) ends the run, and its exit status becomes the process exit
//! status. Step output is inherited directly; precheck adds nothing to it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`pipeline`] - Step definitions and the sequential runner
//! - [`shell`] - Shell command execution
//!
//! # Example
//!
//! ```
//! use precheck::pipeline::{standard_pipeline, PipelineRunner, StepExecutor, StepOutcome};
//! use precheck::Result;
//!
//! // An executor that pretends every step succeeds
//! struct AlwaysOk;
//! impl StepExecutor for AlwaysOk {
//!     fn execute(&mut self, _step: &precheck::pipeline::Step) -> Result<StepOutcome> {
//!         Ok(StepOutcome::success())
//!     }
//! }
//!
//! let mut runner = PipelineRunner::new(AlwaysOk);
//! let outcome = runner.run(&standard_pipeline()).unwrap();
//! assert_eq!(outcome.exit_code, 0);
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod shell;

pub use error::{PrecheckError, Result};
