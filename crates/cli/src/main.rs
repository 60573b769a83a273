//! `fluidgen` command-line entry point.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod config;
mod errors;
mod report;
mod tracing;

use crate::cli::{Commands, OutputFormat, WrapArgs};
use crate::config::BuildDescription;
use crate::errors::CliError;
use crate::report::WrapReport;
use crate::tracing::TracingConfig;
use ::tracing::{info, instrument};
use fluidgen_graph::{BuildGraph, MessageLevel};
use fluidgen_wrap::{FLUID_EXECUTABLE_DEFINITION, FltkWrapUi};

fn main() -> miette::Result<()> {
    let cli = cli::parse();

    crate::tracing::init_tracing(TracingConfig {
        format: cli.log_format,
        level: cli.log_level.into(),
        ..Default::default()
    })?;

    match cli.command {
        Commands::Wrap(args) => run_wrap(args),
    }
}

#[instrument(skip_all)]
fn run_wrap(args: WrapArgs) -> miette::Result<()> {
    let mut graph = load_scope(&args)?;

    let outcome = FltkWrapUi::execute(&mut graph, args.args.as_slice())?;
    let executed = graph.finalize();
    info!(final_actions = executed, "Configuration complete");

    let build_order = if args.build_order {
        Some(graph.build_order().map_err(fluidgen_wrap::WrapError::from)?)
    } else {
        None
    };

    for message in graph.messages() {
        match message.level {
            MessageLevel::Warning => eprintln!("Warning: {}", message.text),
            MessageLevel::Status => eprintln!("-- {}", message.text),
        }
    }

    let report = WrapReport::new(outcome, &graph, build_order);
    match args.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

/// Build the scope from the description file (if any) and CLI overrides.
fn load_scope(args: &WrapArgs) -> Result<BuildGraph, CliError> {
    let mut graph = match &args.config {
        Some(path) => {
            let base_dir = match path.parent() {
                Some(parent) if parent.is_absolute() => parent.to_path_buf(),
                Some(parent) if !parent.as_os_str().is_empty() => current_dir()?.join(parent),
                _ => current_dir()?,
            };
            BuildDescription::load(path)?.into_graph(&base_dir)?
        }
        None => BuildDescription::default().into_graph(&current_dir()?)?,
    };

    if let Some(fluid) = &args.fluid {
        graph.add_definition(FLUID_EXECUTABLE_DEFINITION, fluid.clone());
    }
    Ok(graph)
}

fn current_dir() -> Result<std::path::PathBuf, CliError> {
    std::env::current_dir().map_err(|source| CliError::WorkingDir { source })
}
