//! SecuPlug - minimal plugin framework for running external commands and
//! post-processing their captured output, plus an independent Markdown
//! document builder.

pub mod command;
pub mod error;
pub mod plugins;
pub mod runner;
pub mod textwriter;
pub mod utils;

pub use command::Command;
pub use error::{Result, SecuError};
pub use plugins::{Echo, LsLa, SecuPlug, SecuPlugExt};
pub use runner::RunOutcome;
