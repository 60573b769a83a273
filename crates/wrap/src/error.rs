//! Fatal errors raised while generating wrap rules.

use fluidgen_graph::GraphError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for wrap operations.
pub type Result<T> = std::result::Result<T, WrapError>;

/// Errors that abort a `FLTK_WRAP_UI` call.
#[derive(Error, Debug, Diagnostic, PartialEq, Eq)]
pub enum WrapError {
    /// Fewer than two arguments (target plus at least one source).
    #[error("called with incorrect number of arguments")]
    #[diagnostic(
        code(fluidgen::wrap::argument_count),
        help("pass the target name followed by at least one .fl file")
    )]
    IncorrectArgumentCount {
        /// Number of arguments received.
        given: usize,
    },

    /// Two inputs derive the same generated file.
    #[error("'{source_file}' would generate '{output}', which is already produced from '{previous}'")]
    #[diagnostic(
        code(fluidgen::wrap::output_collision),
        help("rename one of the .fl files so their stems differ, or mark one WRAP_EXCLUDE")
    )]
    OutputCollision {
        /// Input whose outputs collide.
        source_file: String,
        /// Input of the rule that already produces `output`.
        previous: String,
        /// The contested output path.
        output: String,
    },

    /// The build graph rejected an operation.
    #[error(transparent)]
    #[diagnostic(code(fluidgen::wrap::graph))]
    Graph(#[from] GraphError),
}
