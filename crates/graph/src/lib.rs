//! In-memory build-graph engine for fluidgen.
//!
//! This crate models the directory-level configuration state that rule
//! generators write into: the source-record table, custom commands keyed by
//! output path, targets and aliases, scope definitions, include directories,
//! a queue of deferred actions and a message sink.
//!
//! # Key Types
//!
//! - [`BuildGraph`]: the engine, one per configured source directory
//! - [`SourceRecord`]: a file known to the build, with properties and extra dependencies
//! - [`CustomCommand`]: a declarative rule producing one or more outputs
//! - [`FinalAction`]: work queued during configuration and run once by [`BuildGraph::finalize`]
//!
//! # Example
//!
//! ```ignore
//! use fluidgen_graph::{BuildGraph, CustomCommand};
//!
//! let mut graph = BuildGraph::new("/src", "/build");
//! graph.add_definition("FLTK_FLUID_EXECUTABLE", "/usr/bin/fluid");
//! graph.add_custom_command_to_output(CustomCommand::new(
//!     "/build/win.cxx",
//!     vec!["/src/win.fl".to_string()],
//!     vec!["/usr/bin/fluid".to_string(), "-c".to_string()],
//! ))?;
//! graph.finalize();
//! ```

mod command;
mod deferred;
mod error;
mod graph;
mod message;
mod order;
mod source;
mod target;

pub use command::CustomCommand;
pub use deferred::{DeferredState, FinalAction};
pub use error::{GraphError, Result};
pub use graph::BuildGraph;
pub use message::{Message, MessageLevel};
pub use source::{SourceRecord, is_on};
pub use target::{Target, TargetKind};
