//! The `Command` value object.
//!
//! A [`Command`] describes a program name plus its ordered argument list.
//! It is a plain value: constructing or rendering one never touches the
//! operating system. Execution lives in [`crate::runner`].

use std::fmt;

/// A program name and its ordered argument list.
///
/// Argument order is significant: it is the literal order handed to the
/// process. Each `Command` owns a fresh argument vector; instances are
/// never shared between plugins.
///
/// The canonical rendering ([`Command::render`]) is the program followed
/// by the space-joined arguments. It is intended for display and logging
/// and is NOT shell-escaped; execution goes through the argument-vector
/// interface in [`crate::runner::run_command`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    args: Vec<String>,
}

impl Command {
    /// Create a command from a program name and argument list.
    pub fn new<S, I, A>(program: S, args: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a command with no arguments.
    pub fn program_only<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// The program (executable) name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The ordered argument list.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Replace the program name.
    pub fn set_program<S: Into<String>>(&mut self, program: S) {
        self.program = program.into();
    }

    /// Replace the whole argument list.
    pub fn set_args<I, A>(&mut self, args: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
    }

    /// Append a single argument token.
    pub fn push_arg<S: Into<String>>(&mut self, arg: S) {
        self.args.push(arg.into());
    }

    /// Append argument tokens onto the existing list, preserving the
    /// tokens already present (cumulative, never replacing).
    pub fn append_args<I, A>(&mut self, args: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
    }

    /// Canonical rendering: the program followed by a single space and
    /// the space-joined arguments, or the program alone when there are
    /// no arguments.
    ///
    /// Pure and deterministic. Always succeeds; an empty program renders
    /// to an empty string and fails later at the process boundary, not
    /// here.
    pub fn render(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
