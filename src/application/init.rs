//! Initialize configuration use case

use crate::error::{CfnTagsError, Result};
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::Config;
use std::fs;
use std::path::Path;

/// Write a default .cfn-yaml-tags.toml into `path`.
///
/// Fails if the directory already has one.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    if path.join(CONFIG_FILE).exists() {
        return Err(CfnTagsError::Config(format!(
            "{} already exists in {}",
            CONFIG_FILE,
            path.display()
        )));
    }

    let config = Config::default();
    config.save_to_dir(path)?;
    Ok(config)
}
