//! User-facing messages collected during configuration.

use serde::Serialize;

/// Severity of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Informational status line.
    Status,
    /// Advisory problem; configuration continues.
    Warning,
}

/// A message emitted through the graph's message sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Severity.
    pub level: MessageLevel,
    /// Full message text.
    pub text: String,
}
