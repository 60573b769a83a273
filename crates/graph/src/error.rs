//! Error types for build-graph operations.

use thiserror::Error;

/// Result type for build-graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while configuring the build graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A definition the caller cannot work without is not set in the scope.
    #[error("required variable not set: {name}")]
    MissingDefinition {
        /// Name of the missing definition.
        name: String,
    },

    /// Another custom command already produces this output.
    #[error("output '{output}' already has a custom command attached")]
    DuplicateOutput {
        /// The contested output path.
        output: String,
    },

    /// A target (or alias) with this name already exists.
    #[error("target '{name}' already exists")]
    DuplicateTarget {
        /// The duplicated name.
        name: String,
    },

    /// An alias refers to a target that was never created.
    #[error("alias '{alias}' refers to unknown target '{target}'")]
    UnknownAliasTarget {
        /// Alias being declared.
        alias: String,
        /// Target the alias points at.
        target: String,
    },

    /// The graph has been finalized and no longer accepts configuration.
    #[error("cannot {operation} after the configuration phase has closed")]
    ConfigurationClosed {
        /// The rejected operation.
        operation: String,
    },

    /// A dependency cycle was detected between build files.
    #[error("Cycle detected in build graph: {message}")]
    CycleDetected {
        /// Human-readable description of the cycle.
        message: String,
    },
}
