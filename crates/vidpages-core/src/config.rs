//! Generator configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default name of the optional configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "vidpages.toml";

/// Configuration for a single generator run.
///
/// Every field has a default, so an empty TOML file (or no file at all)
/// yields the standard `videodata.json` + `video-template.html` -> `videos/`
/// layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory that receives the generated pages.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// HTML template containing the marker strings.
    #[serde(default = "default_template_file")]
    pub template_file: PathBuf,

    /// JSON array of video records.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Regenerate pages whose output file already exists.
    #[serde(default)]
    pub overwrite: bool,
}

// Default value functions
fn default_output_dir() -> PathBuf {
    PathBuf::from("videos")
}

fn default_template_file() -> PathBuf {
    PathBuf::from("video-template.html")
}

fn default_data_file() -> PathBuf {
    PathBuf::from("videodata.json")
}

/// `VIDPAGES_OVERWRITE=true` style overrides.
fn env_source() -> config::Environment {
    config::Environment::with_prefix("VIDPAGES")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            template_file: default_template_file(),
            data_file: default_data_file(),
            overwrite: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, letting `VIDPAGES_*` environment
    /// variables override individual keys.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(path, env_source())
    }

    fn load_layered(path: &Path, env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(env)
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the template file.
    #[must_use]
    pub fn with_template_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_file = path.into();
        self
    }

    /// Set the data file.
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Set the overwrite flag.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(CoreError::config("output_dir cannot be empty"));
        }

        if self.template_file.as_os_str().is_empty() {
            return Err(CoreError::config("template_file cannot be empty"));
        }

        if self.data_file.as_os_str().is_empty() {
            return Err(CoreError::config("data_file cannot be empty"));
        }

        if self.template_file == self.data_file {
            tracing::warn!(
                path = %self.data_file.display(),
                "template_file and data_file point at the same file"
            );
        }

        Ok(())
    }
}
