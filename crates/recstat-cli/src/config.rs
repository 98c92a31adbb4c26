//! Command-line tool configuration.

use anyhow::{Context, Result};
use recstat_core::{ComposeOptions, DebugCopyPolicy};
use recstat_types::MissingArtifactPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_recoll_dir")]
    pub recoll_dir: PathBuf,
    #[serde(default = "default_debug_copies")]
    pub debug_copies: bool,
    #[serde(default)]
    pub debug_copy_dir: Option<PathBuf>,
    #[serde(default)]
    pub missing_artifacts: MissingArtifactPolicy,
    #[serde(default = "default_helper_executable")]
    pub helper_executable: String,
}

fn default_recoll_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".recoll")
}

fn default_debug_copies() -> bool {
    true
}

fn default_helper_executable() -> String {
    "recoll".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recoll_dir: default_recoll_dir(),
            debug_copies: default_debug_copies(),
            debug_copy_dir: None,
            missing_artifacts: MissingArtifactPolicy::default(),
            helper_executable: default_helper_executable(),
        }
    }
}

impl Config {
    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load config from `<config_dir>/recstat/config.toml` or fall back to defaults.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Config::default())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.recoll_dir = expand_home(&config.recoll_dir);
        config.debug_copy_dir = config.debug_copy_dir.as_deref().map(expand_home);
        Ok(config)
    }

    pub fn compose_options(&self) -> ComposeOptions {
        let debug_copies = match (&self.debug_copy_dir, self.debug_copies) {
            (_, false) => DebugCopyPolicy::Disabled,
            (Some(dir), true) => DebugCopyPolicy::Directory(dir.clone()),
            (None, true) => DebugCopyPolicy::SystemTemp,
        };
        ComposeOptions {
            debug_copies,
            missing_artifacts: self.missing_artifacts,
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("recstat").join("config.toml"))
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
