//! Concrete implementations of the core interfaces

pub mod cache_locator;
pub mod editor;
pub mod tldr;

pub use cache_locator::CacheLocator;
pub use editor::ProcessEditor;
pub use tldr::{NOT_FOUND_EXIT_CODE, Tldr};
