//! src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Project-level settings read from `.devlog/config.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Settings for the generated post-commit hook.
    pub hook: HookConfig,
    /// Settings for rendered timelines.
    pub timeline: TimelineConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HookConfig {
    /// Command line the hook runs inside the new terminal window.
    pub command: String,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            command: "gitdevlog".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TimelineConfig {
    /// Heading used by both the Markdown and HTML timeline.
    pub title: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            title: "Commit Timeline".to_string(),
        }
    }
}

/// Loads the config from `devlog_dir`, falling back to defaults when the file is absent.
pub async fn load_config(devlog_dir: &Path) -> Result<Config> {
    let config_path = devlog_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        log::debug!("No config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .await
        .with_context(|| format!("Could not read config file {}", config_path.display()))?;
    let config: Config = toml::from_str(&config_content)
        .with_context(|| format!("Could not parse config file {}", config_path.display()))?;

    Ok(config)
}
