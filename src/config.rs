use crate::domain::Version;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "commit-classify.toml";

/// Represents the complete configuration for commit-classify.
///
/// Only the command-line driver is configurable; the classification table and
/// release pattern are fixed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// How results are printed
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Defaults for release marker detection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    /// Treat every input as a merge commit unless told otherwise
    #[serde(default)]
    pub merge_commits: bool,
}

/// Returns the version used for the first release of a project.
fn default_initial_version() -> Version {
    Version::new(0, 1, 0)
}

/// Settings for version bump analysis.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default = "default_initial_version", with = "version_string")]
    pub initial_version: Version,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            initial_version: default_initial_version(),
        }
    }
}

/// Versions are written as `"1.2.3"` strings in the config file.
mod version_string {
    use crate::domain::Version;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(version: &Version, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(version)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Version, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(de::Error::custom)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `commit-classify.toml` in current directory
/// 3. `commit-classify.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(),
    };

    let Some(path) = path else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

fn discover_config() -> Option<PathBuf> {
    let local = PathBuf::from(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
