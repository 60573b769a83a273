//! Rule generation for `.fl` inputs.
//!
//! For every included input, two custom commands are registered (one per
//! output) sharing a command line and dependency set, and the generated
//! implementation file is recorded as depending on the header and the input.

use crate::paths::GeneratedPair;
use crate::{Result, WRAP_EXCLUDE_PROPERTY, WrapError};
use fluidgen_graph::{BuildGraph, CustomCommand};
use serde::Serialize;
use tracing::{debug, info};

/// Build the fluid invocation for one input.
///
/// `-c` runs fluid without a GUI, `-h` and `-o` name the header and
/// implementation files, and the last argument is the input.
#[must_use]
pub fn fluid_command_line(tool: &str, pair: &GeneratedPair) -> Vec<String> {
    vec![
        tool.to_string(),
        "-c".to_string(),
        "-h".to_string(),
        pair.header_path.clone(),
        "-o".to_string(),
        pair.impl_path.clone(),
        pair.original_path.clone(),
    ]
}

/// What a [`RuleGenerator::generate`] call produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedSources {
    /// Full paths of generated implementation files, in input order.
    pub sources: Vec<String>,
    /// Registered rules, implementation rule then header rule per input.
    pub rules: Vec<CustomCommand>,
    /// Inputs skipped because they are marked `WRAP_EXCLUDE`.
    pub excluded: Vec<String>,
}

/// Emits custom commands for a set of `.fl` files.
#[derive(Debug, Clone)]
pub struct RuleGenerator {
    output_dir: String,
    source_dir: String,
    tool: String,
}

impl RuleGenerator {
    /// Create a generator writing into `output_dir` and reading inputs from
    /// `source_dir`, using the already resolved `tool`.
    #[must_use]
    pub fn new(
        output_dir: impl Into<String>,
        source_dir: impl Into<String>,
        tool: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            source_dir: source_dir.into(),
            tool: tool.into(),
        }
    }

    /// Register rules for every included source, in order.
    ///
    /// The output directory is added to the scope include directories first,
    /// since generated implementation files include their headers.
    ///
    /// # Errors
    ///
    /// Returns [`WrapError::OutputCollision`] if an input derives a path that
    /// another rule already produces. Rules registered for earlier inputs
    /// remain in the graph.
    pub fn generate<S: AsRef<str>>(
        &self,
        graph: &mut BuildGraph,
        sources: &[S],
    ) -> Result<GeneratedSources> {
        graph.add_include_directories([self.output_dir.as_str()]);

        let mut generated = GeneratedSources::default();
        for source in sources {
            let source = source.as_ref();
            if graph
                .get_or_create_source(source)
                .property_as_bool(WRAP_EXCLUDE_PROPERTY)
            {
                debug!(source = %source, "Skipping excluded source");
                generated.excluded.push(source.to_string());
                continue;
            }

            let pair = GeneratedPair::for_source(&self.output_dir, &self.source_dir, source);
            Self::ensure_unclaimed(graph, source, &pair)?;

            let depends = vec![pair.original_path.clone(), self.tool.clone()];
            let command_line = fluid_command_line(&self.tool, &pair);

            let impl_rule =
                CustomCommand::new(pair.impl_path.clone(), depends.clone(), command_line.clone());
            let header_rule = CustomCommand::new(pair.header_path.clone(), depends, command_line);
            graph.add_custom_command_to_output(impl_rule.clone())?;
            graph.add_custom_command_to_output(header_rule.clone())?;

            let record = graph.get_or_create_source(&pair.impl_path);
            record.add_depend(pair.header_path.clone());
            record.add_depend(pair.original_path.clone());
            record.generated = true;

            debug!(
                source = %source,
                header = %pair.header_path,
                implementation = %pair.impl_path,
                "Registered fluid rules"
            );
            generated.sources.push(pair.impl_path.clone());
            generated.rules.push(impl_rule);
            generated.rules.push(header_rule);
        }

        info!(
            generated = generated.sources.len(),
            excluded = generated.excluded.len(),
            "Generated fluid rules"
        );
        Ok(generated)
    }

    fn ensure_unclaimed(graph: &BuildGraph, source: &str, pair: &GeneratedPair) -> Result<()> {
        let claimed = pair.outputs().into_iter().find_map(|output| {
            graph
                .custom_command_for_output(output)
                .map(|command| (output, command))
        });
        match claimed {
            Some((output, command)) => Err(WrapError::OutputCollision {
                source_file: source.to_string(),
                previous: command.depends.first().cloned().unwrap_or_default(),
                output: output.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> BuildGraph {
        BuildGraph::new("/src", "/build/gui")
    }

    fn generator() -> RuleGenerator {
        RuleGenerator::new("/build/gui", "/src", "/usr/bin/fluid")
    }

    #[test]
    fn test_fluid_command_line_order() {
        let pair = GeneratedPair::for_source("/build/gui", "/src", "win.fl");
        assert_eq!(
            fluid_command_line("/usr/bin/fluid", &pair),
            vec![
                "/usr/bin/fluid",
                "-c",
                "-h",
                "/build/gui/win.h",
                "-o",
                "/build/gui/win.cxx",
                "/src/win.fl",
            ]
        );
    }

    #[test]
    fn test_generate_registers_two_rules_per_source() {
        let mut graph = graph();
        let result = generator()
            .generate(&mut graph, &["win.fl", "dlg.fl"])
            .unwrap();

        assert_eq!(
            result.sources,
            vec!["/build/gui/win.cxx", "/build/gui/dlg.cxx"]
        );
        assert_eq!(result.rules.len(), 4);
        assert_eq!(graph.custom_commands().len(), 4);
        assert!(result.excluded.is_empty());
    }

    #[test]
    fn test_paired_rules_share_command_and_depends() {
        let mut graph = graph();
        generator().generate(&mut graph, &["win.fl"]).unwrap();

        let implementation = graph.custom_command_for_output("/build/gui/win.cxx").unwrap();
        let header = graph.custom_command_for_output("/build/gui/win.h").unwrap();
        assert_eq!(implementation.command_line, header.command_line);
        assert_eq!(implementation.depends, header.depends);
        assert_eq!(
            implementation.depends,
            vec!["/src/win.fl", "/usr/bin/fluid"]
        );
        assert_ne!(implementation.outputs, header.outputs);
    }

    #[test]
    fn test_impl_record_depends_on_header_and_input() {
        let mut graph = graph();
        generator().generate(&mut graph, &["win.fl"]).unwrap();

        let record = graph.source("/build/gui/win.cxx").unwrap();
        assert!(record.generated);
        assert_eq!(
            record.extra_depends,
            vec!["/build/gui/win.h", "/src/win.fl"]
        );
    }

    #[test]
    fn test_excluded_source_is_skipped() {
        let mut graph = graph();
        graph
            .get_or_create_source("skip.fl")
            .set_property(WRAP_EXCLUDE_PROPERTY, "ON");

        let result = generator()
            .generate(&mut graph, &["win.fl", "skip.fl", "dlg.fl"])
            .unwrap();

        assert_eq!(
            result.sources,
            vec!["/build/gui/win.cxx", "/build/gui/dlg.cxx"]
        );
        assert_eq!(result.excluded, vec!["skip.fl"]);
        assert!(graph.custom_command_for_output("/build/gui/skip.cxx").is_none());
        assert!(graph.custom_command_for_output("/build/gui/skip.h").is_none());
    }

    #[test]
    fn test_output_dir_added_to_include_directories() {
        let mut graph = graph();
        generator().generate(&mut graph, &["win.fl"]).unwrap();
        assert_eq!(graph.include_directories(), ["/build/gui"]);
    }

    #[test]
    fn test_stem_collision_is_rejected() {
        let mut graph = graph();
        let result = generator().generate(&mut graph, &["a/win.fl", "b/win.fl"]);

        assert_eq!(
            result,
            Err(WrapError::OutputCollision {
                source_file: "b/win.fl".to_string(),
                previous: "/src/a/win.fl".to_string(),
                output: "/build/gui/win.cxx".to_string(),
            })
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("b/win.fl"));
        assert!(message.contains("/src/a/win.fl"));
        assert!(message.contains("/build/gui/win.cxx"));
        assert_eq!(graph.custom_commands().len(), 2);
    }

    #[test]
    fn test_relative_scope_publishes_rule_outputs() {
        let mut graph = BuildGraph::new(".", "./out");
        let result = RuleGenerator::new("./out", ".", "fluid")
            .generate(&mut graph, &["win.fl"])
            .unwrap();

        assert_eq!(result.sources, vec!["./out/win.cxx"]);
        assert_eq!(result.rules[0].outputs, result.sources);
        let record = graph.source("./out/win.cxx").unwrap();
        assert!(record.generated);
        assert_eq!(record.extra_depends, vec!["./out/win.h", "./win.fl"]);
    }
}
