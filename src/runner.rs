//! Process execution.
//!
//! Standalone, synchronous runners that plugins call into explicitly:
//! [`run_command`] executes a [`Command`] through the argument-vector
//! interface (no shell interpretation), [`run_shell`] hands a raw command
//! line to the platform shell. Both block until the child exits, drain
//! standard output and standard error to completion, and release the
//! process handle before returning.
//!
//! Failure containment: a non-zero exit or a spawn failure is logged as a
//! warning and returned as [`RunOutcome::Failed`]. It is never an error
//! value and never a panic. [`RunOutcome::into_text`] collapses any
//! failure to empty text, which is the signal the orchestration layer
//! hands to output processors.
//!
//! There is no timeout or cancellation: a hung child process blocks the
//! caller indefinitely. Known gap, kept deliberately.

use std::process::{Command as ProcessCommand, Stdio};

use tracing::{debug, warn};

use crate::command::Command;

/// The outcome of running one child process.
///
/// Carries the captured text plus exit status so callers can distinguish
/// "command failed" from "command produced no output". Callers that want
/// the legacy conflated contract collapse it with [`RunOutcome::into_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The process exited zero. `stdout` is the captured standard output,
    /// verbatim, trailing newlines included.
    Completed { stdout: String },

    /// The process exited non-zero (`status: Some(code)`) or could not be
    /// spawned at all (`status: None`; executable not found, permission
    /// denied). Whatever output was captured before the failure is kept.
    Failed {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl RunOutcome {
    /// Whether the process ran to completion with a zero exit status.
    pub fn succeeded(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }

    /// The captured standard output on success, borrowed.
    pub fn text(&self) -> &str {
        match self {
            RunOutcome::Completed { stdout } => stdout,
            RunOutcome::Failed { .. } => "",
        }
    }

    /// Collapse to the legacy contract: captured standard output on
    /// success, empty text on any failure.
    pub fn into_text(self) -> String {
        match self {
            RunOutcome::Completed { stdout } => stdout,
            RunOutcome::Failed { .. } => String::new(),
        }
    }
}

/// Run a [`Command`] as a child process, argument-vector style.
///
/// The program and each argument are passed discretely, so shell
/// metacharacters in arguments are not interpreted. Stdin is null; the
/// child inherits the caller's environment and working directory.
pub fn run_command(command: &Command) -> RunOutcome {
    debug!(command = %command, "running command");
    let result = ProcessCommand::new(command.program())
        .args(command.args())
        .stdin(Stdio::null())
        .output();
    outcome_from(result, &command.render())
}

/// Run a raw command line through the platform shell (`sh -c` on unix,
/// `cmd /C` on windows).
///
/// The line is interpreted by the shell as-is; callers are responsible
/// for safe content. Prefer [`run_command`] when the tokens are known.
pub fn run_shell(command_line: &str) -> RunOutcome {
    debug!(command = %command_line, "running shell command");
    let result = shell_command(command_line).stdin(Stdio::null()).output();
    outcome_from(result, command_line)
}

#[cfg(unix)]
fn shell_command(command_line: &str) -> ProcessCommand {
    let mut cmd = ProcessCommand::new("sh");
    cmd.arg("-c").arg(command_line);
    cmd
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> ProcessCommand {
    let mut cmd = ProcessCommand::new("cmd");
    cmd.arg("/C").arg(command_line);
    cmd
}

/// Convert a finished (or failed-to-start) child into a [`RunOutcome`],
/// emitting the contained-failure diagnostic.
fn outcome_from(result: std::io::Result<std::process::Output>, rendered: &str) -> RunOutcome {
    match result {
        Ok(output) if output.status.success() => RunOutcome::Completed {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        },
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            let status = output.status.code();
            warn!(
                command = %rendered,
                status = ?status,
                stderr = %stderr.trim(),
                "command exited non-zero"
            );
            RunOutcome::Failed {
                status,
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr,
            }
        }
        Err(e) => {
            warn!(command = %rendered, error = %e, "failed to spawn command");
            RunOutcome::Failed {
                status: None,
                stdout: String::new(),
                stderr: e.to_string(),
            }
        }
    }
}
