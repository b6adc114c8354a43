//! Directory-listing plugin.

use crate::command::Command;
use crate::error::Result;
use crate::plugins::SecuPlug;
use crate::runner::{self, RunOutcome};

/// Lists the current directory in long format, hidden entries included,
/// and prints an uppercased copy of the listing.
///
/// The command is built fresh on each access; the plugin itself holds no
/// state.
#[derive(Debug, Default)]
pub struct LsLa;

impl LsLa {
    /// Create the directory-listing plugin.
    pub fn new() -> Self {
        Self
    }
}

impl SecuPlug for LsLa {
    fn command(&self) -> Command {
        Command::new("ls", ["-l", "-a"])
    }

    fn run_process(&self, command: &Command) -> RunOutcome {
        runner::run_command(command)
    }

    fn process_output(&self, output: &str) -> Result<()> {
        // Uppercases a copy; the captured text is left untouched.
        println!("Processing output:");
        println!("{}", output.to_uppercase());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::SecuPlugExt;

    #[test]
    fn test_command_rendering() {
        let plug = LsLa::new();
        assert_eq!(plug.command().render(), "ls -l -a");
    }

    #[test]
    fn test_command_is_consistent_across_accesses() {
        let plug = LsLa::new();
        assert_eq!(plug.command(), plug.command());
    }

    #[test]
    fn test_processor_tolerates_empty_output() {
        let plug = LsLa::new();
        plug.process_output("").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_listing_is_nonempty() {
        let plug = LsLa::new();
        let outcome = plug.run_process(&plug.command());
        assert!(outcome.succeeded());
        assert!(!outcome.into_text().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_completes() {
        LsLa::new().execute_command().unwrap();
    }
}
