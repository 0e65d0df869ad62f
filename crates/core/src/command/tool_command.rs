use std::io;
use std::process::{Command, ExitStatus, Output, Stdio};

use crate::error::{Error, Result};

/// How the child's standard streams are wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Child shares our terminal (paging, interactive editors).
    Inherit,
    /// Stdout is captured and returned to the caller.
    Capture,
}

/// A single external program invocation.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    fn build(&self, mode: StdioMode) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        match mode {
            StdioMode::Inherit => {
                cmd.stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
            StdioMode::Capture => {
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::inherit());
            }
        }
        cmd
    }

    /// Run to completion with inherited stdio and return the exit status.
    pub fn status(&self) -> Result<ExitStatus> {
        tracing::debug!("Running: {}", self.to_shell_command());
        self.build(StdioMode::Inherit)
            .status()
            .map_err(|source| self.spawn_error(source))
    }

    /// Run to completion and capture stdout.
    pub fn output(&self) -> Result<Output> {
        tracing::debug!("Capturing: {}", self.to_shell_command());
        self.build(StdioMode::Capture)
            .output()
            .map_err(|source| self.spawn_error(source))
    }

    /// Run with inherited stdio; any unsuccessful exit is an error.
    pub fn execute(&self) -> Result<()> {
        let status = self.status()?;
        if status.success() {
            Ok(())
        } else {
            Err(self.failed(status))
        }
    }

    pub fn failed(&self, status: ExitStatus) -> Error {
        Error::ToolFailed {
            program: self.program.clone(),
            code: status.code(),
        }
    }

    fn spawn_error(&self, source: io::Error) -> Error {
        Error::SpawnError {
            program: self.program.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_shell_command_quotes_spaced_args() {
        let cmd = ToolCommand::new("tldr")
            .arg("--render")
            .arg("/home/me/My Notes/git.md");
        assert_eq!(
            cmd.to_shell_command(),
            "tldr --render '/home/me/My Notes/git.md'"
        );
    }

    #[test]
    fn test_args_extend_in_order() {
        let cmd = ToolCommand::new("tldr").args(["git", "commit"]);
        assert_eq!(cmd.args, vec!["git".to_string(), "commit".to_string()]);
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        let cmd = ToolCommand::new("cheat-sheet-definitely-not-installed");
        let err = cmd.status().unwrap_err();
        assert!(matches!(err, Error::SpawnError { ref program, .. } if program == "cheat-sheet-definitely-not-installed"));
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_reports_exit_code() {
        let cmd = ToolCommand::new("sh").args(["-c", "exit 7"]);
        let err = cmd.execute().unwrap_err();
        assert!(matches!(err, Error::ToolFailed { code: Some(7), .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_captures_stdout() {
        let cmd = ToolCommand::new("sh").args(["-c", "echo hello"]);
        let output = cmd.output().unwrap();
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }
}
