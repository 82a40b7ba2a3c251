use clap::Parser;
use controller_configfile::configuration::{
    decoder,
    ConfigurationFsLoader,
    ControllerConfiguration,
};
use miette::{Context, Result};
use tracing::info;

use crate::{
    cli::{CLIArgs, OutputFormat},
    logging::initialize_tracing,
};

mod cli;
mod logging;


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    initialize_tracing(&cli_args.log_level_filter).wrap_err("Failed to initialize tracing.")?;

    let loader = ConfigurationFsLoader::from_filesystem(&cli_args.configuration_file_path)
        .wrap_err("Invalid configuration file path.")?;

    info!("Loading configuration: {}.", loader.filename().display());

    let mut configuration = ControllerConfiguration::new();
    loader
        .load(&mut configuration)
        .wrap_err("Failed to load configuration file.")?;

    info!("Configuration loaded.");


    let rendered = match cli_args.output_format {
        OutputFormat::Yaml => decoder::encode_yaml(&configuration),
        OutputFormat::Json => decoder::encode_json(&configuration),
    }
    .wrap_err("Failed to render configuration.")?;

    println!("{}", rendered.trim_end());

    Ok(())
}
