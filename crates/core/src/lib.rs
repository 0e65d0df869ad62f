//! cheat-sheet - personal overrides on top of tldr
//!
//! This crate provides functionality to:
//! - Resolve a topic to a locally edited markdown page or to a tldr lookup
//! - Seed a local page from tldr's cache and open it in an editor
//! - Drive the tldr executable and translate its exit codes
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod resolver;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{Action, Request, ToolCommand};
pub use config::{Config, ConfigLoader};
pub use interfaces::{Editor, LookupTool};
pub use resolver::{Resolver, VERSION, VersionReport, usage};
