//! Sequential fail-fast pipeline execution.
//!
//! The runner walks the pipeline strictly in order. Each step blocks until
//! its command terminates; the first non-zero status halts the run and the
//! remaining steps are never invoked. There are no retries, timeouts, or
//! recovery paths: failure is terminal for the whole run.

use crate::error::Result;
use crate::pipeline::step::Step;
use crate::shell;
use std::time::Duration;

/// Status of a step in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step is waiting to run.
    Pending,

    /// Step is currently executing.
    Running,

    /// Step completed successfully.
    Completed,

    /// Step failed.
    Failed,

    /// Step was skipped because an earlier step failed.
    Skipped,
}

impl StepStatus {
    /// Check if this is a terminal state (no more changes expected).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StepStatus::Completed | StepStatus::Failed | StepStatus::Skipped
        )
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Pending => "pending",
            StepStatus::Running => "running",
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}

/// Result of executing a single step.
#[derive(Debug, Clone, Copy)]
pub struct StepOutcome {
    /// Exit code of the step command.
    pub code: i32,

    /// Whether the step exited zero.
    pub success: bool,

    /// Execution duration.
    pub duration: Duration,
}

impl StepOutcome {
    /// Outcome of a step that exited zero.
    pub fn success() -> Self {
        Self {
            code: 0,
            success: true,
            duration: Duration::ZERO,
        }
    }

    /// Outcome of a step that exited with the given non-zero code.
    pub fn failure(code: i32) -> Self {
        Self {
            code,
            success: false,
            duration: Duration::ZERO,
        }
    }
}

/// Executes a single step to completion.
///
/// This is the seam between the runner's control flow and real process
/// spawning; tests substitute a recording implementation to assert which
/// steps were invoked.
pub trait StepExecutor {
    /// Run the step's command and report its outcome.
    ///
    /// A non-zero exit is an `Ok` outcome with `success == false`; `Err` is
    /// reserved for the executor itself failing to run anything at all.
    fn execute(&mut self, step: &Step) -> Result<StepOutcome>;
}

/// Production executor: runs step commands through the shell with
/// inherited stdio.
#[derive(Debug, Default)]
pub struct ShellExecutor;

impl StepExecutor for ShellExecutor {
    fn execute(&mut self, step: &Step) -> Result<StepOutcome> {
        let status = shell::run_inherited(&step.command)?;
        Ok(StepOutcome {
            code: status.code,
            success: status.success,
            duration: status.duration,
        })
    }
}

/// Per-step record in a finished pipeline run.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Step name.
    pub name: String,

    /// Final status of the step.
    pub status: StepStatus,

    /// Exit code, if the step was actually invoked.
    pub code: Option<i32>,
}

/// Overall result of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Process-wide exit code: the first failing step's code, or 0.
    pub exit_code: i32,

    /// Name of the failing step, if any.
    pub failed_step: Option<String>,

    /// Final status of every step, in pipeline order.
    pub steps: Vec<StepReport>,
}

impl PipelineOutcome {
    /// Whether every step completed successfully.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a pipeline of steps strictly in order, stopping at the first
/// failure.
#[derive(Debug)]
pub struct PipelineRunner<E: StepExecutor> {
    executor: E,
}

impl<E: StepExecutor> PipelineRunner<E> {
    /// Create a runner over the given executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Execute the steps in order.
    ///
    /// Returns after the last step completes or immediately after the first
    /// failing step; steps after a failure are marked [`StepStatus::Skipped`]
    /// and never invoked. The outcome's `exit_code` is the failing step's
    /// code verbatim, or 0 when every step succeeded.
    pub fn run(&mut self, steps: &[Step]) -> Result<PipelineOutcome> {
        let mut reports: Vec<StepReport> = steps
            .iter()
            .map(|s| StepReport {
                name: s.name.clone(),
                status: StepStatus::Pending,
                code: None,
            })
            .collect();

        for (i, step) in steps.iter().enumerate() {
            reports[i].status = StepStatus::Running;
            tracing::debug!(step = %step.name, "running step");

            let outcome = self.executor.execute(step)?;
            reports[i].code = Some(outcome.code);

            if outcome.success {
                reports[i].status = StepStatus::Completed;
                tracing::debug!(step = %step.name, duration = ?outcome.duration, "step completed");
            } else {
                reports[i].status = StepStatus::Failed;
                for report in &mut reports[i + 1..] {
                    report.status = StepStatus::Skipped;
                }
                tracing::debug!(
                    step = %step.name,
                    code = outcome.code,
                    "step failed, halting pipeline"
                );
                return Ok(PipelineOutcome {
                    exit_code: outcome.code,
                    failed_step: Some(step.name.clone()),
                    steps: reports,
                });
            }
        }

        Ok(PipelineOutcome {
            exit_code: 0,
            failed_step: None,
            steps: reports,
        })
    }
}
