//! Rendering of a wrap run.

use crate::errors::CliError;
use fluidgen_graph::{BuildGraph, Message};
use fluidgen_wrap::WrapOutcome;
use serde::Serialize;
use std::fmt::Write as _;

/// Everything a wrap run produced, after finalize.
#[derive(Debug, Serialize)]
pub struct WrapReport {
    #[serde(flatten)]
    pub outcome: WrapOutcome,
    pub include_directories: Vec<String>,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_order: Option<Vec<String>>,
}

impl WrapReport {
    pub fn new(outcome: WrapOutcome, graph: &BuildGraph, build_order: Option<Vec<String>>) -> Self {
        Self {
            outcome,
            include_directories: graph.include_directories().to_vec(),
            messages: graph.messages().to_vec(),
            build_order,
        }
    }

    pub fn to_json(&self) -> Result<String, CliError> {
        serde_json::to_string_pretty(self).map_err(|source| CliError::Render { source })
    }

    /// Human-readable rules and variable, one item per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for rule in &self.outcome.rules {
            let _ = writeln!(out, "rule {}", rule.outputs.join(" "));
            let _ = writeln!(out, "  depends: {}", rule.depends.join(" "));
            let _ = writeln!(out, "  command: {}", rule.command_line.join(" "));
        }
        for excluded in &self.outcome.excluded {
            let _ = writeln!(out, "excluded {excluded}");
        }
        for dir in &self.include_directories {
            let _ = writeln!(out, "include {dir}");
        }
        if let Some(order) = &self.build_order {
            let _ = writeln!(out, "order {}", order.join(" "));
        }
        let _ = writeln!(out, "{}={}", self.outcome.variable, self.outcome.value);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluidgen_wrap::{FLUID_EXECUTABLE_DEFINITION, FltkWrapUi};

    fn report() -> WrapReport {
        let mut graph = BuildGraph::new("/src", "/b");
        graph.add_definition(FLUID_EXECUTABLE_DEFINITION, "fluid");
        let outcome = FltkWrapUi::execute(&mut graph, &["app", "win.fl"]).unwrap();
        graph.finalize();
        WrapReport::new(outcome, &graph, None)
    }

    #[test]
    fn test_text_output() {
        let text = report().to_text();
        assert!(text.contains("rule /b/win.cxx\n"));
        assert!(text.contains("  command: fluid -c -h /b/win.h -o /b/win.cxx /src/win.fl\n"));
        assert!(text.contains("include /b\n"));
        assert!(text.ends_with("app_FLTK_UI_SRCS=/b/win.cxx\n"));
    }

    #[test]
    fn test_json_output() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["variable"], "app_FLTK_UI_SRCS");
        assert_eq!(json["rules"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["level"], "warning");
        assert!(json.get("build_order").is_none());
    }
}
