use std::io;
use std::path::PathBuf;

/// Errors that can occur during cheat-sheet operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to spawn `{program}`: {source}")]
    SpawnError {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {}", describe_code(.code))]
    ToolFailed { program: String, code: Option<i32> },

    #[error("Cannot determine home directory (HOME is not set)")]
    HomeDirUnavailable,

    #[error("Configuration error in {path}: {message}")]
    ConfigError { path: PathBuf, message: String },

    #[error("Command `{0}` requires a topic name")]
    MissingTopic(String),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Result type alias for cheat-sheet operations
pub type Result<T> = std::result::Result<T, Error>;
