//! Step definitions and the sequential fail-fast runner.

pub mod runner;
pub mod step;

pub use runner::{
    PipelineOutcome, PipelineRunner, ShellExecutor, StepExecutor, StepOutcome, StepReport,
    StepStatus,
};
pub use step::{standard_pipeline, Step};
