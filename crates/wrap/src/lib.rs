//! # fluidgen-wrap
//!
//! Build rules for FLTK user-interface files.
//!
//! Given a target name and a list of `.fl` files, this crate:
//! - skips files whose source record is marked `WRAP_EXCLUDE`
//! - registers one custom command per generated `.h` and `.cxx` file, both
//!   running `fluid -c -h <header> -o <impl> <input>`
//! - publishes the generated implementation files as `<target>_FLTK_UI_SRCS`
//! - schedules a check, run at finalize, that warns if the target was never created
//!
//! ## Example
//!
//! ```ignore
//! use fluidgen_graph::BuildGraph;
//! use fluidgen_wrap::FltkWrapUi;
//!
//! let mut graph = BuildGraph::new("/src", "/build/gui");
//! graph.add_definition("FLTK_FLUID_EXECUTABLE", "/usr/bin/fluid");
//!
//! let outcome = FltkWrapUi::execute(&mut graph, &["app", "win.fl", "dlg.fl"])?;
//! assert_eq!(outcome.variable, "app_FLTK_UI_SRCS");
//! graph.finalize();
//! ```

pub mod aggregate;
pub mod command;
pub mod error;
pub mod paths;
pub mod rules;
pub mod validate;

pub use aggregate::{join_source_list, publish_source_list, source_list_variable, split_source_list};
pub use command::{FltkWrapUi, WrapOutcome};
pub use error::{Result, WrapError};
pub use paths::{GeneratedPair, derive_output_paths, filename_without_extension};
pub use rules::{GeneratedSources, RuleGenerator, fluid_command_line};
pub use validate::{ValidateTargetExists, missing_target_message};

/// Definition holding the resolved path of the `fluid` executable.
pub const FLUID_EXECUTABLE_DEFINITION: &str = "FLTK_FLUID_EXECUTABLE";

/// Source property that opts a file out of generation.
pub const WRAP_EXCLUDE_PROPERTY: &str = "WRAP_EXCLUDE";

/// Suffix appended to the target name to form the published variable.
pub const SOURCE_LIST_SUFFIX: &str = "_FLTK_UI_SRCS";

/// Name of the command, as used in diagnostics.
pub const COMMAND_NAME: &str = "FLTK_WRAP_UI";
