//! Publishing the generated source list.

use crate::SOURCE_LIST_SUFFIX;
use fluidgen_graph::BuildGraph;

/// Variable name under which a target's generated sources are published.
#[must_use]
pub fn source_list_variable(target: &str) -> String {
    format!("{target}{SOURCE_LIST_SUFFIX}")
}

/// Join full paths into a `;`-separated list, preserving order.
#[must_use]
pub fn join_source_list<S: AsRef<str>>(sources: &[S]) -> String {
    sources
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(";")
}

/// Inverse of [`join_source_list`]. An empty value is an empty list.
#[must_use]
pub fn split_source_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(';').map(String::from).collect()
}

/// Define `<target>_FLTK_UI_SRCS` in the graph's scope and return its name.
pub fn publish_source_list<S: AsRef<str>>(
    graph: &mut BuildGraph,
    target: &str,
    sources: &[S],
) -> String {
    let variable = source_list_variable(target);
    graph.add_definition(variable.clone(), join_source_list(sources));
    variable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_list_variable() {
        assert_eq!(source_list_variable("app"), "app_FLTK_UI_SRCS");
    }

    #[test]
    fn test_join_preserves_order() {
        assert_eq!(
            join_source_list(&["/b/win.cxx", "/b/dlg.cxx"]),
            "/b/win.cxx;/b/dlg.cxx"
        );
    }

    #[test]
    fn test_join_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(join_source_list(&empty), "");
        assert!(split_source_list("").is_empty());
    }

    #[test]
    fn test_publish_defines_variable() {
        let mut graph = BuildGraph::new("/src", "/b");
        let name = publish_source_list(&mut graph, "app", &["/b/win.cxx"]);
        assert_eq!(name, "app_FLTK_UI_SRCS");
        assert_eq!(graph.definition("app_FLTK_UI_SRCS"), Some("/b/win.cxx"));
    }
}
