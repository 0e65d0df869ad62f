//! Seams between the resolver and the processes it drives.
//!
//! The resolver only talks to these traits, so the tldr contract (and its
//! exit code conventions) stays inside one implementation.

pub mod editor;
pub mod lookup_tool;

pub use editor::Editor;
pub use lookup_tool::LookupTool;
