//! Greeting plugin with incremental argument appension.

use crate::command::Command;
use crate::error::Result;
use crate::plugins::SecuPlug;
use crate::runner::{self, RunOutcome};

/// Echoes a fixed greeting and prints the captured text unchanged.
///
/// Unlike [`crate::plugins::LsLa`], this plugin owns its command, and
/// [`Echo::append_args`] concatenates further argument tokens onto it
/// between runs. Appension is cumulative: every previously appended
/// token stays in the rendered command, in append order.
#[derive(Debug)]
pub struct Echo {
    command: Command,
}

impl Echo {
    /// Create the greeting plugin with its default `echo Hello, World!`
    /// command.
    pub fn new() -> Self {
        Self {
            command: Command::new("echo", ["Hello,", "World!"]),
        }
    }

    /// Append argument tokens onto the stored command.
    pub fn append_args<I, A>(&mut self, args: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.command.append_args(args);
    }
}

impl Default for Echo {
    fn default() -> Self {
        Self::new()
    }
}

impl SecuPlug for Echo {
    fn command(&self) -> Command {
        self.command.clone()
    }

    fn run_process(&self, command: &Command) -> RunOutcome {
        runner::run_command(command)
    }

    fn process_output(&self, output: &str) -> Result<()> {
        println!("{output}");
        Ok(())
    }
}
