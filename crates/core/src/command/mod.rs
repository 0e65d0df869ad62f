pub mod request;
pub mod tool_command;

pub use request::{Action, Request};
pub use tool_command::{StdioMode, ToolCommand};
