use crate::error::Result;
use std::path::Path;

/// Opens a document for interactive editing and blocks until it is closed.
pub trait Editor {
    /// `path` may not exist yet; editors treat that as a new file.
    fn open(&self, path: &Path) -> Result<()>;
}
