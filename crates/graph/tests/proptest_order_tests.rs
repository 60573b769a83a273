//! Property-based tests for build ordering.
//!
//! - Every dependency of a command is ordered before its outputs
//! - Acyclic command sets never report a cycle

use fluidgen_graph::{BuildGraph, CustomCommand};
use proptest::prelude::*;
use std::collections::HashMap;

/// Commands `0..n` where command `i` may depend on outputs of commands `< i`
/// and on one input file.
fn dag_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..15).prop_flat_map(|count| {
        (0..count)
            .map(|i| {
                if i == 0 {
                    Just(Vec::new()).boxed()
                } else {
                    proptest::collection::vec(0..i, 0..=i.min(3)).boxed()
                }
            })
            .collect::<Vec<_>>()
    })
}

fn output(i: usize) -> String {
    format!("/build/gen{i}.cxx")
}

fn input(i: usize) -> String {
    format!("/src/gen{i}.fl")
}

fn build(dag: &[Vec<usize>]) -> BuildGraph {
    let mut graph = BuildGraph::new("/src", "/build");
    for (i, deps) in dag.iter().enumerate() {
        let mut depends = vec![input(i)];
        depends.extend(deps.iter().map(|&d| output(d)));
        graph
            .add_custom_command_to_output(CustomCommand::new(output(i), depends, vec![]))
            .unwrap();
    }
    graph
}

proptest! {
    #[test]
    fn dependencies_precede_outputs(dag in dag_strategy()) {
        let graph = build(&dag);
        let order = graph.build_order().unwrap();
        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(idx, path)| (path.as_str(), idx))
            .collect();

        for command in graph.custom_commands() {
            for dep in &command.depends {
                for out in &command.outputs {
                    prop_assert!(position[dep.as_str()] < position[out.as_str()]);
                }
            }
        }
    }

    #[test]
    fn every_file_is_ordered_once(dag in dag_strategy()) {
        let graph = build(&dag);
        let order = graph.build_order().unwrap();
        prop_assert_eq!(order.len(), dag.len() * 2);
    }
}
