pub mod cli;
pub mod commands;
pub mod logging;
pub mod utils;

// Re-export commonly used items
pub use cli::Cli;
pub use commands::run_command;
pub use logging::init_tracing;
pub use utils::normalize_args;
