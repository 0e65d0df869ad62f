//! Startup configuration loading.
//!
//! Layers, lowest priority first: defaults derived from the home directory,
//! `~/.cheat-sheet/config.json`, then environment variables.

use std::path::PathBuf;

use super::{Config, ConfigFile};
use crate::error::{Error, Result};

pub const TLDR_PATH_ENV: &str = "CHEAT_SHEET_TLDR";
pub const EDITOR_PATH_ENV: &str = "CHEAT_SHEET_EDITOR";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment and create the
    /// personal store directory.
    pub fn load() -> Result<Config> {
        let config = Self::load_with(|key| std::env::var(key).ok())?;
        config.ensure_store_dir()?;
        Ok(config)
    }

    /// Resolve configuration using `env` for every environment lookup.
    pub fn load_with<F>(env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = Self::home_dir(&env)?;
        let mut config = Config::for_home(&home);

        let file_path = config.config_file_path();
        if file_path.is_file() {
            tracing::debug!("Loading config from {}", file_path.display());
            config.apply_file(ConfigFile::load_from_file(&file_path)?);
        } else {
            tracing::debug!("No config file at {}", file_path.display());
        }

        if let Some(tldr) = env(TLDR_PATH_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!("{} overrides tldr path: {}", TLDR_PATH_ENV, tldr);
            config.tldr_path = tldr;
        }
        if let Some(editor) = env(EDITOR_PATH_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!("{} overrides editor: {}", EDITOR_PATH_ENV, editor);
            config.editor_path = editor;
        }

        Ok(config)
    }

    fn home_dir<F>(env: &F) -> Result<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        env("HOME")
            .or_else(|| env("USERPROFILE"))
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .ok_or(Error::HomeDirUnavailable)
    }
}
