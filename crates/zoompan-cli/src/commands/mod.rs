pub mod colors;
pub mod config;
pub mod replay;
pub mod slider;

use std::path::Path;

use anyhow::{Context, Result};
use zoompan_core::config::AppConfig;

/// Load an `AppConfig` from TOML, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config: AppConfig = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents).context("Invalid config")?
        }
        None => AppConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
