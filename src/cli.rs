//! Command-line interface definitions for the binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};


/// Format the resolved configuration is printed in.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}


/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "controller-configfile",
    author,
    about = "Loads a controller configuration file and prints it with all defaults \
             applied and all paths resolved.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to load.
    /// Relative paths are resolved against the current directory.
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to the controller configuration file (YAML or JSON)."
    )]
    pub configuration_file_path: PathBuf,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Yaml,
        help = "Format to print the resolved configuration in."
    )]
    pub output_format: OutputFormat,

    #[arg(
        long = "log-level",
        default_value = "info",
        help = "Log level filter (tracing EnvFilter syntax). RUST_LOG takes precedence if set."
    )]
    pub log_level_filter: String,
}
