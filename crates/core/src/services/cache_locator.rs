//! Locates pages in tldr's on-disk cache.

use std::path::PathBuf;

use crate::error::Result;
use crate::utils::file_exists;

/// Searches `base/<page set>` directories in configured order.
#[derive(Debug, Clone)]
pub struct CacheLocator {
    base: PathBuf,
    page_sets: Vec<String>,
}

impl CacheLocator {
    pub fn new(base: impl Into<PathBuf>, page_sets: Vec<String>) -> Self {
        Self {
            base: base.into(),
            page_sets,
        }
    }

    /// The first page-set directory that contains `filename`, if any.
    pub fn locate(&self, filename: &str) -> Result<Option<PathBuf>> {
        for page_set in &self.page_sets {
            let dir = self.base.join(page_set);
            if file_exists(&dir, filename)? {
                return Ok(Some(dir));
            }
        }
        Ok(None)
    }
}
