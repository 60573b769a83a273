//! File-level dependency ordering using petgraph.
//!
//! Nodes are file paths; an edge `a -> b` means `b` must be brought up to
//! date after `a`. Edges come from custom command dependencies and from the
//! extra dependencies attached to source records.

use crate::{BuildGraph, GraphError, Result};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

#[derive(Default)]
struct FileGraph {
    graph: DiGraph<String, ()>,
    path_to_node: HashMap<String, NodeIndex>,
}

impl FileGraph {
    fn node(&mut self, path: &str) -> NodeIndex {
        if let Some(&node) = self.path_to_node.get(path) {
            return node;
        }
        let node = self.graph.add_node(path.to_string());
        self.path_to_node.insert(path.to_string(), node);
        node
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        let from = self.node(from);
        let to = self.node(to);
        self.graph.update_edge(from, to, ());
    }
}

impl BuildGraph {
    fn file_graph(&self) -> FileGraph {
        let mut files = FileGraph::default();

        for command in self.custom_commands() {
            for output in &command.outputs {
                files.node(output);
                for dep in &command.depends {
                    files.add_edge(dep, output);
                }
            }
        }

        for record in self.sources() {
            for dep in &record.extra_depends {
                files.add_edge(dep, &record.full_path);
            }
        }

        files
    }

    /// Files touched by custom commands, ordered so every file comes after
    /// everything it depends on.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CycleDetected`] if the dependencies form a cycle.
    pub fn build_order(&self) -> Result<Vec<String>> {
        let files = self.file_graph();
        let sorted = toposort(&files.graph, None).map_err(|cycle| GraphError::CycleDetected {
            message: format!("cycle through '{}'", files.graph[cycle.node_id()]),
        })?;
        Ok(sorted
            .into_iter()
            .map(|idx| files.graph[idx].clone())
            .collect())
    }
}
