//! Shell command execution with inherited stdio.

use crate::error::{PrecheckError, Result};
use std::process::Command;
use std::time::{Duration, Instant};

/// Status of a finished shell command.
#[derive(Debug, Clone, Copy)]
pub struct CommandStatus {
    /// Resolved exit code. A signal death on unix is reported as
    /// `128 + signal`, following shell convention.
    pub code: i32,

    /// Whether the command exited zero.
    pub success: bool,

    /// Execution duration.
    pub duration: Duration,
}

/// Execute a command string through the platform shell.
///
/// Stdout and stderr are inherited from the parent process: whatever the
/// command prints goes straight to the caller's streams, unbuffered and
/// uncaptured. The call blocks until the command terminates.
///
/// A command that cannot be resolved by the shell still produces a
/// [`CommandStatus`] (the shell exits 127 on unix); only a failure to spawn
/// or wait on the shell itself is an error.
pub fn run_inherited(command: &str) -> Result<CommandStatus> {
    let start = Instant::now();

    let shell = detect_shell();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);

    tracing::debug!(%command, shell = %shell, "spawning step command");

    let mut child = cmd.spawn().map_err(|source| PrecheckError::CommandSpawn {
        command: command.to_string(),
        source,
    })?;

    let status = child.wait().map_err(|source| PrecheckError::CommandWait {
        command: command.to_string(),
        source,
    })?;

    let duration = start.elapsed();
    let code = resolve_exit_code(&status);

    tracing::debug!(%command, code, ?duration, "step command finished");

    Ok(CommandStatus {
        code,
        success: status.success(),
        duration,
    })
}

/// Map an `ExitStatus` to a plain integer code.
#[cfg(unix)]
fn resolve_exit_code(status: &std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match status.code() {
        Some(code) => code,
        None => 128 + status.signal().unwrap_or(0),
    }
}

#[cfg(not(unix))]
fn resolve_exit_code(status: &std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

/// Detect the shell to run commands through.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
