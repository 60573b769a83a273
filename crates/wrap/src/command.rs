//! The `FLTK_WRAP_UI` command entry point.

use crate::aggregate::publish_source_list;
use crate::rules::{GeneratedSources, RuleGenerator};
use crate::validate::ValidateTargetExists;
use crate::{FLUID_EXECUTABLE_DEFINITION, Result, WrapError};
use fluidgen_graph::{BuildGraph, CustomCommand};
use serde::Serialize;
use tracing::{info_span, instrument};

/// Result of a successful `FLTK_WRAP_UI` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrapOutcome {
    /// The target the generated sources are meant for.
    pub target: String,
    /// Name of the published variable.
    pub variable: String,
    /// Value of the published variable.
    pub value: String,
    /// Generated implementation files, in input order.
    pub sources: Vec<String>,
    /// Rules registered by this call.
    pub rules: Vec<CustomCommand>,
    /// Inputs skipped because they are marked `WRAP_EXCLUDE`.
    pub excluded: Vec<String>,
}

/// `FLTK_WRAP_UI(<target> <source>...)`.
#[derive(Debug, Clone, Copy)]
pub struct FltkWrapUi;

impl FltkWrapUi {
    /// Run the command against the current scope of `graph`.
    ///
    /// `args` is the raw argument list: the target name followed by one or
    /// more `.fl` files relative to the current source directory. Outputs are
    /// placed in the current binary directory.
    ///
    /// # Errors
    ///
    /// - [`WrapError::IncorrectArgumentCount`] if fewer than two arguments are given
    /// - [`WrapError::Graph`] if `FLTK_FLUID_EXECUTABLE` is not defined
    /// - [`WrapError::OutputCollision`] if two inputs share a stem
    #[instrument(skip_all, fields(args = args.len()))]
    pub fn execute<S: AsRef<str>>(graph: &mut BuildGraph, args: &[S]) -> Result<WrapOutcome> {
        let [target, sources @ ..] = args else {
            return Err(WrapError::IncorrectArgumentCount { given: 0 });
        };
        if sources.is_empty() {
            return Err(WrapError::IncorrectArgumentCount { given: args.len() });
        }
        let target = target.as_ref();

        let tool = graph.required_definition(FLUID_EXECUTABLE_DEFINITION)?.to_string();
        let generator = RuleGenerator::new(
            graph.current_binary_dir(),
            graph.current_source_dir(),
            tool,
        );

        let _span = info_span!("fltk_wrap_ui", wrap_target = %target).entered();
        let GeneratedSources {
            sources,
            rules,
            excluded,
        } = generator.generate(graph, sources)?;

        let variable = publish_source_list(graph, target, &sources);
        let value = graph.definition(&variable).unwrap_or_default().to_string();

        ValidateTargetExists::new(target).schedule(graph)?;

        Ok(WrapOutcome {
            target: target.to_string(),
            variable,
            value,
            sources,
            rules,
            excluded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluidgen_graph::GraphError;

    fn configured_graph() -> BuildGraph {
        let mut graph = BuildGraph::new("/src", "/build/gui");
        graph.add_definition(FLUID_EXECUTABLE_DEFINITION, "/usr/bin/fluid");
        graph
    }

    #[test]
    fn test_execute_requires_two_arguments() {
        let mut graph = configured_graph();
        let empty: [&str; 0] = [];
        assert_eq!(
            FltkWrapUi::execute(&mut graph, &empty),
            Err(WrapError::IncorrectArgumentCount { given: 0 })
        );
        assert_eq!(
            FltkWrapUi::execute(&mut graph, &["app"]),
            Err(WrapError::IncorrectArgumentCount { given: 1 })
        );
        assert!(graph.custom_commands().is_empty());
        assert!(graph.deferred_states().is_empty());
    }

    #[test]
    fn test_execute_requires_fluid_definition() {
        let mut graph = BuildGraph::new("/src", "/build/gui");
        let result = FltkWrapUi::execute(&mut graph, &["app", "win.fl"]);
        assert_eq!(
            result,
            Err(WrapError::Graph(GraphError::MissingDefinition {
                name: FLUID_EXECUTABLE_DEFINITION.to_string()
            }))
        );
        assert!(graph.custom_commands().is_empty());
    }

    #[test]
    fn test_execute_publishes_and_schedules() {
        let mut graph = configured_graph();
        let outcome = FltkWrapUi::execute(&mut graph, &["app", "win.fl", "dlg.fl"]).unwrap();

        assert_eq!(outcome.variable, "app_FLTK_UI_SRCS");
        assert_eq!(outcome.value, "/build/gui/win.cxx;/build/gui/dlg.cxx");
        assert_eq!(
            graph.definition("app_FLTK_UI_SRCS"),
            Some("/build/gui/win.cxx;/build/gui/dlg.cxx")
        );
        assert_eq!(outcome.rules.len(), 4);
        assert_eq!(graph.deferred_states().len(), 1);
    }

    #[test]
    fn test_all_excluded_publishes_empty_value() {
        let mut graph = configured_graph();
        graph
            .get_or_create_source("win.fl")
            .set_property(crate::WRAP_EXCLUDE_PROPERTY, "TRUE");

        let outcome = FltkWrapUi::execute(&mut graph, &["app", "win.fl"]).unwrap();
        assert_eq!(outcome.value, "");
        assert_eq!(graph.definition("app_FLTK_UI_SRCS"), Some(""));
        assert!(graph.custom_commands().is_empty());
    }
}
