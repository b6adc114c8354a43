//! Plugin contract for SecuPlug
//!
//! A plugin binds together three things: the [`Command`] it runs, an
//! execution backend, and an output-processing hook. The orchestration
//! entry point composes them in a fixed order: run the command, then
//! process the captured text.
//!
//! # Architecture
//!
//! - [`SecuPlug`]: the capability trait every plugin implements. It has
//!   no default bodies; the bundled plugins delegate execution to the
//!   standalone runners in [`crate::runner`].
//! - [`SecuPlugExt`]: the fixed orchestration entry point
//!   (`execute_command`), blanket-implemented for every `SecuPlug` so
//!   individual plugins cannot re-declare it.
//! - [`LsLa`] / [`Echo`]: the bundled reference plugins.
//!
//! # Error policy
//!
//! Failures below the runner boundary (non-zero exit, spawn failure) are
//! contained: they are logged and surface to the processor as empty text.
//! Failures above it (the processor hook) propagate uncontained out of
//! `execute_command`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use secuplug::plugins::{Echo, SecuPlugExt};
//!
//! let mut echo = Echo::new();
//! echo.execute_command().unwrap();
//! echo.append_args(["Hello, World!"]);
//! echo.execute_command().unwrap();
//! ```

mod echo;
mod ls_la;

pub use echo::Echo;
pub use ls_la::LsLa;

use tracing::debug;

use crate::command::Command;
use crate::error::Result;
use crate::runner::RunOutcome;

/// A unit that supplies a command, runs it, and interprets the output.
///
/// Plugins hold no persisted state between runs; each `execute_command`
/// call is an independent run and instances are free to be invoked
/// repeatedly or from multiple threads (each call owns its own child
/// process and captured text).
pub trait SecuPlug: Send + Sync {
    /// The command this plugin will run. May be built fresh per call or
    /// cloned from stored state, but must be consistent within a single
    /// orchestration call.
    fn command(&self) -> Command;

    /// Execute the command and capture its output.
    ///
    /// The bundled plugins delegate to [`crate::runner::run_command`].
    /// Alternative backends must preserve the containment contract:
    /// process failure becomes a [`RunOutcome::Failed`], never a panic
    /// or an error value.
    fn run_process(&self, command: &Command) -> RunOutcome;

    /// Interpret the captured output.
    ///
    /// Must tolerate empty text, which is the contained-failure signal:
    /// treat it as "nothing to process". Errors raised here propagate
    /// uncontained to the caller of `execute_command`.
    fn process_output(&self, output: &str) -> Result<()>;
}

/// The fixed orchestration entry point.
///
/// Blanket-implemented for every [`SecuPlug`]; the run-then-process
/// sequence is not overridable.
pub trait SecuPlugExt: SecuPlug {
    /// Run the plugin's command, then hand the captured text to the
    /// processor. Strictly sequential, no retry.
    ///
    /// Never fails due to the command itself: process failure is
    /// contained in the runner and reaches the processor as empty text.
    /// Only a processor error propagates.
    fn execute_command(&self) -> Result<()> {
        let command = self.command();
        debug!(command = %command, "executing plugin command");
        let outcome = self.run_process(&command);
        debug!(
            succeeded = outcome.succeeded(),
            captured_bytes = outcome.text().len(),
            "command finished"
        );
        self.process_output(&outcome.into_text())
    }
}

impl<T: SecuPlug + ?Sized> SecuPlugExt for T {}
