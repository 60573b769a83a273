//! Deferred actions run once configuration has closed.

use crate::BuildGraph;
use serde::Serialize;
use std::fmt;

/// Work scheduled during configuration and executed by [`BuildGraph::finalize`].
///
/// Actions are explicit records rather than closures so they can be
/// inspected and run in isolation.
pub trait FinalAction: fmt::Debug {
    /// Short, stable name of the action kind (used in logs).
    fn kind(&self) -> &'static str;

    /// Execute the action against the finished configuration.
    fn run(&self, graph: &mut BuildGraph);
}

/// Lifecycle of a queued [`FinalAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeferredState {
    /// Queued while configuration is still open.
    Scheduled,
    /// Configuration has closed; waiting for its turn.
    Pending,
    /// Ran to completion. Terminal.
    Executed,
}

#[derive(Debug)]
pub(crate) struct DeferredEntry {
    pub(crate) action: Box<dyn FinalAction>,
    pub(crate) state: DeferredState,
}

impl DeferredEntry {
    pub(crate) fn new(action: Box<dyn FinalAction>) -> Self {
        Self {
            action,
            state: DeferredState::Scheduled,
        }
    }
}
