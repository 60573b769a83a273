//! Deferred check that the wrapped target exists.

use crate::{COMMAND_NAME, Result};
use fluidgen_graph::{BuildGraph, FinalAction, MessageLevel};

/// Warning text for a target that was never created.
#[must_use]
pub fn missing_target_message(target: &str, source_dir: &str) -> String {
    format!(
        "{COMMAND_NAME} was called with a target that was never created: {target}.  \
         The problem was found while processing the source directory: {source_dir}.  \
         This {COMMAND_NAME} call will be ignored."
    )
}

/// Warns at finalize if the named target is not a real target of the graph.
///
/// Advisory only: rules and the published variable are left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateTargetExists {
    target: String,
}

impl ValidateTargetExists {
    /// Create the check for `target`.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Queue this check on `graph`.
    ///
    /// # Errors
    ///
    /// Fails if the graph has already been finalized.
    pub fn schedule(self, graph: &mut BuildGraph) -> Result<()> {
        graph.add_final_action(Box::new(self))?;
        Ok(())
    }
}

impl FinalAction for ValidateTargetExists {
    fn kind(&self) -> &'static str {
        "validate_target_exists"
    }

    fn run(&self, graph: &mut BuildGraph) {
        if graph.find_local_non_alias_target(&self.target).is_none() {
            let message = missing_target_message(&self.target, graph.current_source_dir());
            graph.emit_message(MessageLevel::Warning, message);
        }
    }
}
