//! Config management use case

use crate::error::{CfnTagsError, Result};
use crate::infrastructure::config::{CONFIG_ENV, CONFIG_FILE};
use crate::infrastructure::Config;
use std::path::PathBuf;

const KEYS: &str = "safe, mark_safe, compact";

/// Service for managing one config file
pub struct ConfigService {
    file: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the directory holding the config file
    pub fn new(dir: PathBuf) -> Self {
        ConfigService {
            file: dir.join(CONFIG_FILE),
        }
    }

    /// Create a config service for an explicit config file
    pub fn for_file(file: PathBuf) -> Self {
        ConfigService { file }
    }

    /// Service for the config file the other commands read: the file named
    /// by `CFN_YAML_TAGS_CONFIG`, else the nearest one above the current
    /// directory
    pub fn discover() -> Result<Self> {
        if let Ok(file) = std::env::var(CONFIG_ENV) {
            return Ok(ConfigService::for_file(PathBuf::from(file)));
        }

        let current_dir = std::env::current_dir()?;
        Config::find_dir(&current_dir)
            .map(ConfigService::new)
            .ok_or(CfnTagsError::NoConfig(current_dir))
    }

    fn load(&self) -> Result<Config> {
        if !self.file.is_file() {
            let dir = self
                .file
                .parent()
                .map(PathBuf::from)
                .unwrap_or_default();
            return Err(CfnTagsError::NoConfig(dir));
        }
        Config::load_from_file(&self.file)
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;

        match key {
            "safe" => Ok(config.safe.to_string()),
            "mark_safe" => Ok(config.mark_safe.to_string()),
            "compact" => Ok(config.compact.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.load()?;

        let field = match key {
            "safe" => &mut config.safe,
            "mark_safe" => &mut config.mark_safe,
            "compact" => &mut config.compact,
            _ => return Err(unknown_key(key)),
        };
        *field = parse_bool(key, value)?;

        config.save_to_file(&self.file)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.load()
    }
}

fn unknown_key(key: &str) -> CfnTagsError {
    CfnTagsError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, KEYS
    ))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(CfnTagsError::Config(format!(
            "Invalid value for '{}': '{}'. Expected true or false",
            key, value
        ))),
    }
}
