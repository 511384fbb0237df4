use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Config, DisplaySettings, InputLimits, OutputFormat, Scenarios};

/// The file looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_NAME: &str = "roi";

/// Loads the application configuration.
///
/// This function is the primary entry point for this crate. Sources are layered from
/// lowest to highest priority: built-in defaults, the config file, then `ROI_*`
/// environment variables (e.g. `ROI_DISPLAY__CURRENCY_SYMBOL=$`). With no `path`, an
/// optional `roi.toml` in the working directory is used; an explicit `path` must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let config = build(file, environment())?;

    tracing::debug!(
        candidate_rates = config.scenarios.candidate_rates.len(),
        output = ?config.display.output,
        "Configuration loaded"
    );

    Ok(config)
}

/// Parses configuration from a TOML string, applying defaults for missing sections.
///
/// Environment variables are not consulted.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}

/// The `ROI_*` environment layer. `__` separates sections from keys.
fn environment() -> config::Environment {
    config::Environment::with_prefix("ROI")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("scenarios.candidate_rates")
        .try_parsing(true)
}

fn build<F>(file: F, env: config::Environment) -> Result<Config, ConfigError>
where
    F: config::Source + Send + Sync + 'static,
{
    let builder = config::Config::builder().add_source(file).add_source(env).build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}
