use crate::domain::{BumpKind, MalformedTagPolicy};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "gitbump.toml";

fn default_remote() -> String {
    "origin".to_string()
}

fn default_push() -> bool {
    true
}

/// Represents the complete configuration for git-bump.
///
/// Every field has a default, so an empty file is a valid configuration.
/// Command-line flags override these values.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote the new tag is pushed to
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Component bumped when `--bump` is not given
    #[serde(default)]
    pub bump: BumpKind,

    /// Push the new tag after creating it
    #[serde(default = "default_push")]
    pub push: bool,

    /// Abort on tags that are not versions instead of skipping them
    #[serde(default)]
    pub strict: bool,

    /// Only consider tags matching this regex
    #[serde(default)]
    pub tag_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            bump: BumpKind::default(),
            push: default_push(),
            strict: false,
            tag_filter: None,
        }
    }
}

impl Config {
    pub fn malformed_tag_policy(&self) -> MalformedTagPolicy {
        if self.strict {
            MalformedTagPolicy::Strict
        } else {
            MalformedTagPolicy::Skip
        }
    }
}

/// Finds the configuration file to use, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter (returned even if missing, so the
///    read reports it)
/// 2. `gitbump.toml` in current directory
/// 3. `gitbump.toml` in the user config directory
pub fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = locate_config(config_path) else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
