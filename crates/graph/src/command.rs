//! Custom commands: declarative rules that produce files.

use serde::Serialize;

/// A rule telling the build how to produce its outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomCommand {
    /// Files this command produces.
    pub outputs: Vec<String>,
    /// Files that must be up to date before the command runs.
    pub depends: Vec<String>,
    /// Program and arguments, executed verbatim by the build tool.
    pub command_line: Vec<String>,
}

impl CustomCommand {
    /// Create a command with a single output.
    #[must_use]
    pub fn new(output: impl Into<String>, depends: Vec<String>, command_line: Vec<String>) -> Self {
        Self {
            outputs: vec![output.into()],
            depends,
            command_line,
        }
    }
}
