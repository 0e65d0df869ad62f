//! Configuration management for cheat-sheet

mod loader;
mod settings;

pub use loader::{ConfigLoader, EDITOR_PATH_ENV, TLDR_PATH_ENV};
pub use settings::{
    CONFIG_FILE_NAME, Config, ConfigFile, DEFAULT_EDITOR_PATH, DEFAULT_PAGE_SETS,
    DEFAULT_TLDR_PATH, STORE_DIR_NAME,
};
