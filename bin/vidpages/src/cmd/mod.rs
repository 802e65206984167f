//! Command implementations and the configuration handling they share.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail};
use vidpages_core::{Config, config::DEFAULT_CONFIG_FILE};

pub mod check;
pub mod generate;

/// Input and output overrides accepted by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct InputArgs {
    /// JSON file with the video records
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// HTML template containing the markers
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Directory for the generated pages
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Regenerate pages that already exist
    #[arg(long)]
    pub overwrite: bool,
}

impl InputArgs {
    /// Apply the overrides on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(data) = &self.data {
            config.data_file = data.clone();
        }
        if let Some(template) = &self.template {
            config.template_file = template.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if self.overwrite {
            config.overwrite = true;
        }
        config
    }
}

/// Resolve the configuration for a run.
///
/// An explicit `config_path` must exist. Without one, `vidpages.toml` in the
/// working directory is used when present, otherwise the built-in defaults.
/// Command-line overrides are applied last.
pub fn resolve_config(config_path: Option<&Path>, args: &InputArgs) -> Result<Config> {
    let config = match config_path {
        Some(path) => {
            if !path.exists() {
                bail!("Configuration file not found: {}", path.display());
            }
            Config::load_with_env(path).wrap_err("Failed to load configuration")?
        }
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Config::load_with_env(default_path).wrap_err("Failed to load configuration")?
            } else {
                tracing::debug!("no configuration file, using defaults");
                Config::default()
            }
        }
    };

    let config = args.apply(config);
    config.validate().wrap_err("Invalid configuration")?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
