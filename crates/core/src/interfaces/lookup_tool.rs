//! External lookup tool interface

use crate::error::Result;
use std::path::Path;

/// A page lookup backend such as `tldr`.
///
/// A lookup that finds nothing is not an error: implementations report it
/// as `Ok(())` and let the backend tell the user.
pub trait LookupTool {
    /// Look a topic up by name, streaming the page to the terminal.
    fn find(&self, tokens: &[String]) -> Result<()>;

    /// Render a specific markdown file.
    fn render(&self, path: &Path) -> Result<()>;

    /// Refresh the backend's local page cache.
    fn update(&self) -> Result<()>;

    /// The backend's own version string, trimmed.
    fn version(&self) -> Result<String>;
}
