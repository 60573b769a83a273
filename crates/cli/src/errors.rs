//! CLI error types with miette diagnostics.

use fluidgen_graph::GraphError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the CLI before or around the wrap command.
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Failed to read build description {}", path.display())]
    #[diagnostic(
        code(fluidgen::cli::config_read),
        help("Check that the file exists and is readable")
    )]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Build description parsing failed: {message}")]
    #[diagnostic(code(fluidgen::cli::config_parse))]
    ConfigParse {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("error occurred here")]
        span: Option<SourceSpan>,
    },

    #[error("Build description is inconsistent")]
    #[diagnostic(code(fluidgen::cli::config_invalid))]
    ConfigInvalid {
        #[source]
        source: GraphError,
    },

    #[error("Could not determine the working directory")]
    #[diagnostic(code(fluidgen::cli::working_dir))]
    WorkingDir {
        #[source]
        source: std::io::Error,
    },

    #[error("Tracing initialization failed: {message}")]
    #[diagnostic(
        code(fluidgen::cli::tracing_error),
        help("Check RUST_LOG and the --log-level/--log-format options")
    )]
    Tracing { message: String },

    #[error("Failed to render output")]
    #[diagnostic(code(fluidgen::cli::render))]
    Render {
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse(path: &std::path::Path, src: String, error: &toml::de::Error) -> Self {
        Self::ConfigParse {
            message: error.message().to_string(),
            src: NamedSource::new(path.display().to_string(), src),
            span: error.span().map(SourceSpan::from),
        }
    }

    pub fn tracing(message: impl Into<String>) -> Self {
        Self::Tracing {
            message: message.into(),
        }
    }
}

impl From<GraphError> for CliError {
    fn from(source: GraphError) -> Self {
        Self::ConfigInvalid { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_read_display() {
        let error = CliError::config_read(
            "build.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(
            error.to_string(),
            "Failed to read build description build.toml"
        );
    }

    #[test]
    fn test_config_parse_keeps_span() {
        let src = "source_dir = ".to_string();
        let parse_error = toml::from_str::<toml::Table>(&src).unwrap_err();
        let error = CliError::config_parse(std::path::Path::new("build.toml"), src, &parse_error);
        match error {
            CliError::ConfigParse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_graph_error_conversion() {
        let error: CliError = GraphError::DuplicateTarget {
            name: "app".to_string(),
        }
        .into();
        assert!(matches!(error, CliError::ConfigInvalid { .. }));
    }
}
