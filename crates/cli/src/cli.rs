use crate::tracing::{LogLevel, TracingFormat};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fluidgen")]
#[command(about = "Generate build rules for FLTK fluid user-interface files")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogLevel::Warn,
        help = "Set logging level"
    )]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = TracingFormat::Compact,
        help = "Set log output format"
    )]
    pub log_format: TracingFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Register fluid rules for a target, like FLTK_WRAP_UI")]
    Wrap(WrapArgs),
}

#[derive(Args, Debug)]
pub struct WrapArgs {
    #[arg(short, long, help = "Build description (TOML) for the current scope")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "FLTK_FLUID_EXECUTABLE",
        help = "Path to the fluid executable, overriding the build description"
    )]
    pub fluid: Option<String>,

    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format"
    )]
    pub format: OutputFormat,

    #[arg(long, help = "Also print the file-level build order")]
    pub build_order: bool,

    #[arg(help = "Target that will use the generated sources, followed by .fl files")]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}
