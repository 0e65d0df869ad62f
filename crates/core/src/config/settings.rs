use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const STORE_DIR_NAME: &str = ".cheat-sheet";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_TLDR_PATH: &str = "tldr";
pub const DEFAULT_EDITOR_PATH: &str = "vim";
pub const DEFAULT_PAGE_SETS: [&str; 2] = ["common", "linux"];

/// Location of tldr's page cache relative to the home directory.
const TLDR_CACHE_SUBPATH: [&str; 3] = [".tldr", "cache", "pages"];

/// Resolved runtime configuration. Built once at startup and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Personal override store, e.g. `~/.cheat-sheet`.
    pub cheat_sheets_dir: PathBuf,
    pub tldr_path: String,
    /// Base of tldr's page cache, e.g. `~/.tldr/cache/pages`.
    pub tldr_cache_path: PathBuf,
    /// Cache categories, searched in this order.
    pub page_sets: Vec<String>,
    pub editor_path: String,
}

impl Config {
    pub fn for_home(home: &Path) -> Self {
        let tldr_cache_path = TLDR_CACHE_SUBPATH
            .iter()
            .fold(home.to_path_buf(), |path, part| path.join(part));

        Self {
            cheat_sheets_dir: home.join(STORE_DIR_NAME),
            tldr_path: DEFAULT_TLDR_PATH.to_string(),
            tldr_cache_path,
            page_sets: DEFAULT_PAGE_SETS.iter().map(|s| s.to_string()).collect(),
            editor_path: DEFAULT_EDITOR_PATH.to_string(),
        }
    }

    pub fn config_file_path(&self) -> PathBuf {
        self.cheat_sheets_dir.join(CONFIG_FILE_NAME)
    }

    /// Full path of a document in the personal store.
    pub fn local_path(&self, filename: &str) -> PathBuf {
        self.cheat_sheets_dir.join(filename)
    }

    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(tldr_path) = file.tldr_path {
            self.tldr_path = tldr_path;
        }
        if let Some(cache) = file.tldr_cache_path {
            self.tldr_cache_path = cache;
        }
        if let Some(page_sets) = file.page_sets {
            self.page_sets = page_sets;
        }
        if let Some(editor_path) = file.editor_path {
            self.editor_path = editor_path;
        }
    }

    /// Create the personal store if it does not exist yet.
    pub fn ensure_store_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.cheat_sheets_dir)?;
        Ok(())
    }
}

/// Optional on-disk overrides, read from `~/.cheat-sheet/config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub tldr_path: Option<String>,
    #[serde(default)]
    pub tldr_cache_path: Option<PathBuf>,
    #[serde(default)]
    pub page_sets: Option<Vec<String>>,
    #[serde(default)]
    pub editor_path: Option<String>,
}

impl ConfigFile {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&contents).map_err(|e| Error::ConfigError {
            path: path.to_path_buf(),
            message: format!("Failed to parse config: {e}"),
        })?;
        file.validate(path)?;
        Ok(file)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: &str| Error::ConfigError {
            path: path.to_path_buf(),
            message: message.to_string(),
        };

        if self.tldr_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(invalid("tldr_path must not be empty"));
        }
        if self.editor_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(invalid("editor_path must not be empty"));
        }
        if let Some(ref pages) = self.page_sets {
            if pages.iter().any(|p| p.is_empty() || p.contains(['/', '\\'])) {
                return Err(invalid("page_sets entries must be plain directory names"));
            }
        }
        Ok(())
    }
}
