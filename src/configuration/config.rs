use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Parser;
use log::{debug, LevelFilter};
use serde::Deserialize;

use crate::error_handling::types::ConfigError;
use crate::storage::file_storage::DEFAULT_STORE_FILE;

/// Log level used when neither the configuration nor `RUST_LOG` says otherwise.
///
/// Kept at `warn` so informational logs do not interleave with the menu.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments.
///
/// Every flag is optional: without any, the store lives in `DEFAULT_STORE_FILE`
/// in the working directory.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rolodex")]
#[command(version)]
#[command(about = "Interactive manager for personal records kept in a JSON Lines file")]
pub struct Args {
    /// Path of the JSON Lines store file.
    ///
    /// Takes precedence over `store_path` from the configuration file.
    #[arg(long, env = "ROLODEX_STORE_FILE")]
    pub store_file: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Default log level (off, error, warn, info, debug, trace). `RUST_LOG` still wins.
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Runtime configuration.
///
/// Resolved from, in increasing priority: built-in defaults, the optional TOML
/// file given by `--config`, then command-line flags and their environment
/// variables.
///
/// # Examples
///
/// ```
/// use rolodex::configuration::config::Config;
///
/// let config = Config::from_toml_str("store_path = \"people.jsonl\"").unwrap();
/// assert_eq!(config.store_path.to_str(), Some("people.jsonl"));
/// assert_eq!(config.log_level, "warn");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Location of the store file. Relative paths resolve against the working directory.
    pub store_path: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlError(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        debug!("Read configuration file {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Resolves the configuration for the given arguments.
    ///
    /// Values are not checked here; `Controller::new` validates whatever it is given.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(store_file) = &args.store_file {
            config.store_path = store_file.clone();
        }
        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyStorePath);
        }
        if let Some(parent) = self.store_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(ConfigError::DirectoryDoesNotExist(format!(
                    "{} is not a directory",
                    parent.display()
                )));
            }
        }
        self.log_filter()?;
        Ok(())
    }

    pub fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::BadLogLevel(self.log_level.clone()))
    }
}
