//! Build description loading.
//!
//! A build description is a TOML file describing one directory scope: where
//! sources live, where generated files go, the definitions in effect, source
//! properties and the targets that exist.

use crate::errors::CliError;
use fluidgen_graph::{BuildGraph, TargetKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A property value. Booleans map to `ON`/`OFF`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl PropertyValue {
    fn into_string(self) -> String {
        match self {
            Self::Bool(true) => "ON".to_string(),
            Self::Bool(false) => "OFF".to_string(),
            Self::Integer(n) => n.to_string(),
            Self::Text(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    pub name: String,
    #[serde(default)]
    pub kind: TargetKind,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    pub name: String,
    pub target: String,
}

/// Parsed build description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildDescription {
    /// Defaults to the directory containing the description.
    pub source_dir: Option<PathBuf>,
    /// Defaults to the source directory.
    pub binary_dir: Option<PathBuf>,
    #[serde(default)]
    pub definitions: BTreeMap<String, String>,
    /// Properties per source path, relative to the source directory.
    #[serde(default)]
    pub sources: BTreeMap<String, BTreeMap<String, PropertyValue>>,
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
    #[serde(default)]
    pub aliases: Vec<AliasConfig>,
}

impl BuildDescription {
    /// Read and parse a description file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let src = std::fs::read_to_string(path).map_err(|e| CliError::config_read(path, e))?;
        toml::from_str(&src).map_err(|e| CliError::config_parse(path, src.clone(), &e))
    }

    /// Build the configured graph. Relative directories resolve against `base_dir`.
    pub fn into_graph(self, base_dir: &Path) -> Result<BuildGraph, CliError> {
        let source_dir = resolve(base_dir, self.source_dir.as_deref());
        let binary_dir = self
            .binary_dir
            .as_deref()
            .map_or_else(|| source_dir.clone(), |dir| resolve(base_dir, Some(dir)));

        debug!(
            source_dir = %source_dir.display(),
            binary_dir = %binary_dir.display(),
            "Configuring scope"
        );
        let mut graph = BuildGraph::new(
            source_dir.display().to_string(),
            binary_dir.display().to_string(),
        );

        for (name, value) in self.definitions {
            graph.add_definition(name, value);
        }

        for (path, properties) in self.sources {
            let record = graph.get_or_create_source(&path);
            for (name, value) in properties {
                record.set_property(name, value.into_string());
            }
        }

        for target in self.targets {
            graph.add_target(&target.name, target.kind)?.sources = target.sources;
        }

        for alias in self.aliases {
            graph.add_alias(&alias.name, &alias.target)?;
        }

        Ok(graph)
    }
}

fn resolve(base_dir: &Path, dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => base_dir.join(dir),
        None => base_dir.to_path_buf(),
    }
}
