//! Build targets.

use serde::{Deserialize, Serialize};

/// What kind of artifact a target builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// An executable program.
    #[default]
    Executable,
    /// A static library.
    StaticLibrary,
    /// A shared library.
    SharedLibrary,
    /// A target with no artifact of its own.
    Utility,
}

/// A named build target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    /// Target name, unique within the graph.
    pub name: String,
    /// Artifact kind.
    pub kind: TargetKind,
    /// Source files compiled into the target.
    pub sources: Vec<String>,
}

impl Target {
    /// Create a target without sources.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TargetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            sources: Vec::new(),
        }
    }
}
