//! Configuration management

use crate::domain::{TagRegistry, TrustMode};
use crate::error::{CfnTagsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the config file looked up from the working directory upwards
pub const CONFIG_FILE: &str = ".cfn-yaml-tags.toml";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "CFN_YAML_TAGS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Process documents with the restricted loader/dumper pair
    pub safe: bool,
    /// Bind the tags into the restricted pair
    pub mark_safe: bool,
    /// Emit JSON on a single line
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            safe: false,
            mark_safe: true,
            compact: false,
        }
    }
}

impl Config {
    /// Trust mode selected by the `safe` flag
    pub fn trust_mode(&self) -> TrustMode {
        if self.safe {
            TrustMode::Restricted
        } else {
            TrustMode::Unrestricted
        }
    }

    /// Build a tag registry according to `mark_safe`
    pub fn registry(&self) -> TagRegistry {
        TagRegistry::with_safe(self.mark_safe)
    }

    /// Load config from .cfn-yaml-tags.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CfnTagsError::NoConfig(path.to_path_buf())
            } else {
                CfnTagsError::Io(e)
            }
        })?;

        Self::parse(&contents, &config_path)
    }

    /// Load config from an explicit file
    pub fn load_from_file(file: &Path) -> Result<Self> {
        let contents = fs::read_to_string(file)?;
        Self::parse(&contents, file)
    }

    fn parse(contents: &str, origin: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            CfnTagsError::Config(format!(
                "Failed to parse {}: {}",
                origin.display(),
                e
            ))
        })
    }

    /// Save config to .cfn-yaml-tags.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        self.save_to_file(&path.join(CONFIG_FILE))
    }

    /// Save config to an explicit file
    pub fn save_to_file(&self, file: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(file, contents)?;
        Ok(())
    }

    /// Resolve the active config.
    ///
    /// `CFN_YAML_TAGS_CONFIG` wins; otherwise the nearest config file walking
    /// up from the current directory; otherwise defaults.
    pub fn discover() -> Result<Self> {
        if let Ok(file) = std::env::var(CONFIG_ENV) {
            let file = PathBuf::from(file);
            debug!(path = %file.display(), "using config from environment");
            return Self::load_from_file(&file);
        }

        let current_dir = std::env::current_dir()?;
        match Self::find_dir(&current_dir) {
            Some(dir) => {
                debug!(path = %dir.display(), "using discovered config");
                Self::load_from_dir(&dir)
            }
            None => Ok(Config::default()),
        }
    }

    /// Nearest ancestor of `start` (inclusive) holding a config file
    pub fn find_dir(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(CONFIG_FILE).is_file())
            .map(Path::to_path_buf)
    }
}
