use miette::{miette, Context, IntoDiagnostic, Result};
use tracing_subscriber::{fmt, EnvFilter};


/// Installs a console subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_level_filter` when it is set.
pub fn initialize_tracing(default_level_filter: &str) -> Result<()> {
    let level_filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(from_environment) => EnvFilter::try_new(&from_environment)
            .into_diagnostic()
            .wrap_err_with(|| miette!("Failed to parse {}", EnvFilter::DEFAULT_ENV))?,
        Err(_) => EnvFilter::try_new(default_level_filter)
            .into_diagnostic()
            .wrap_err_with(|| miette!("Failed to parse log level filter {default_level_filter}"))?,
    };

    fmt()
        .with_env_filter(level_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| miette!("Failed to install tracing subscriber: {error}"))?;

    Ok(())
}
