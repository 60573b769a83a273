//! Source records: the engine's view of a file participating in the build.

use serde::Serialize;
use std::collections::BTreeMap;

/// A file known to the build graph.
///
/// Records are keyed by their resolved full path. Rule generators read their
/// properties and attach extra dependencies to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRecord {
    /// Full path of the file.
    pub full_path: String,
    /// String-valued properties (`WRAP_EXCLUDE`, ...).
    pub properties: BTreeMap<String, String>,
    /// Additional files this one depends on, in insertion order.
    pub extra_depends: Vec<String>,
    /// Whether the file is produced by a custom command.
    pub generated: bool,
}

impl SourceRecord {
    /// Create a record for an already resolved full path.
    #[must_use]
    pub fn new(full_path: impl Into<String>) -> Self {
        Self {
            full_path: full_path.into(),
            properties: BTreeMap::new(),
            extra_depends: Vec::new(),
            generated: false,
        }
    }

    /// Set a property, replacing any previous value.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Raw property value, if set.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Read a property with build-description truthiness. Unset is false.
    #[must_use]
    pub fn property_as_bool(&self, name: &str) -> bool {
        self.property(name).is_some_and(is_on)
    }

    /// Add an extra dependency. Duplicates are ignored.
    pub fn add_depend(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.extra_depends.contains(&path) {
            self.extra_depends.push(path);
        }
    }
}

/// Evaluate a build-description boolean.
///
/// Only `1`, `ON`, `YES`, `TRUE` and `Y` are true, compared
/// case-insensitively and without trimming. Everything else is false,
/// including other numbers and the `*-NOTFOUND` family.
#[must_use]
pub fn is_on(value: &str) -> bool {
    ["1", "ON", "YES", "TRUE", "Y"]
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_on_true_values() {
        for value in ["1", "ON", "on", "Yes", "TRUE", "y"] {
            assert!(is_on(value), "{value} should be on");
        }
    }

    #[test]
    fn test_is_on_false_values() {
        for value in [
            "", "0", "OFF", "no", "False", "N", "ignore", "NOTFOUND", "FLUID-NOTFOUND", "maybe",
            "2", "-1", "0.5", " ON", "ON ",
        ] {
            assert!(!is_on(value), "{value} should be off");
        }
    }

    #[test]
    fn test_property_as_bool_unset_is_false() {
        let record = SourceRecord::new("/src/win.fl");
        assert!(!record.property_as_bool("WRAP_EXCLUDE"));
    }

    #[test]
    fn test_property_as_bool_set() {
        let mut record = SourceRecord::new("/src/win.fl");
        record.set_property("WRAP_EXCLUDE", "ON");
        assert!(record.property_as_bool("WRAP_EXCLUDE"));
        record.set_property("WRAP_EXCLUDE", "OFF");
        assert!(!record.property_as_bool("WRAP_EXCLUDE"));
    }

    #[test]
    fn test_add_depend_keeps_order_and_dedups() {
        let mut record = SourceRecord::new("/build/win.cxx");
        record.add_depend("/build/win.h");
        record.add_depend("/src/win.fl");
        record.add_depend("/build/win.h");
        assert_eq!(record.extra_depends, vec!["/build/win.h", "/src/win.fl"]);
    }
}
