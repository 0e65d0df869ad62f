//! `tldr` adapter.

use std::path::Path;

use tracing::debug;

use crate::command::ToolCommand;
use crate::error::Result;
use crate::interfaces::LookupTool;

/// Exit code tldr uses when it has no page for the requested topic.
pub const NOT_FOUND_EXIT_CODE: i32 = 3;

const RENDER_FLAG: &str = "--render";
const UPDATE_FLAG: &str = "--update";
const VERSION_FLAG: &str = "--version";

/// Runs the configured tldr executable.
#[derive(Debug, Clone)]
pub struct Tldr {
    program: String,
}

impl Tldr {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self) -> ToolCommand {
        ToolCommand::new(&self.program)
    }

    /// Run with inherited stdio. A "no such page" exit is not an error.
    fn stream(&self, command: ToolCommand) -> Result<()> {
        let status = command.status()?;
        if status.success() {
            return Ok(());
        }
        if status.code() == Some(NOT_FOUND_EXIT_CODE) {
            debug!("{} found no page", command.to_shell_command());
            return Ok(());
        }
        Err(command.failed(status))
    }
}

impl LookupTool for Tldr {
    fn find(&self, tokens: &[String]) -> Result<()> {
        self.stream(self.command().args(tokens.iter().cloned()))
    }

    fn render(&self, path: &Path) -> Result<()> {
        self.stream(
            self.command()
                .arg(RENDER_FLAG)
                .arg(path.to_string_lossy().into_owned()),
        )
    }

    fn update(&self) -> Result<()> {
        self.stream(self.command().arg(UPDATE_FLAG))
    }

    fn version(&self) -> Result<String> {
        let command = self.command().arg(VERSION_FLAG);
        let output = command.output()?;
        if !output.status.success() {
            return Err(command.failed(output.status));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Write an executable shell script that logs its arguments to
    /// `calls.log` next to it, then runs `body`.
    fn fake_tldr(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("tldr");
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"{}\"\n{}\n",
            dir.join("calls.log").display(),
            body
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn calls(dir: &Path) -> Vec<String> {
        fs::read_to_string(dir.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn tldr_at(path: &Path) -> Tldr {
        Tldr::new(path.to_str().unwrap())
    }

    #[test]
    fn test_find_passes_tokens_as_arguments() {
        let temp = TempDir::new().unwrap();
        let tldr = tldr_at(&fake_tldr(temp.path(), "exit 0"));

        tldr.find(&["git".to_string(), "commit".to_string()]).unwrap();

        assert_eq!(calls(temp.path()), vec!["git commit"]);
    }

    #[test]
    fn test_not_found_exit_code_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let tldr = tldr_at(&fake_tldr(temp.path(), "exit 3"));

        assert!(tldr.find(&["nope".to_string()]).is_ok());
        assert!(tldr.render(Path::new("/tmp/nope.md")).is_ok());
        assert!(tldr.update().is_ok());
    }

    #[test]
    fn test_other_exit_codes_are_errors() {
        let temp = TempDir::new().unwrap();
        let tldr = tldr_at(&fake_tldr(temp.path(), "exit 1"));

        let err = tldr.find(&["git".to_string()]).unwrap_err();
        assert!(matches!(err, Error::ToolFailed { code: Some(1), .. }));
        assert!(tldr.update().is_err());
    }

    #[test]
    fn test_render_and_update_flags() {
        let temp = TempDir::new().unwrap();
        let tldr = tldr_at(&fake_tldr(temp.path(), "exit 0"));

        tldr.render(Path::new("/home/me/.cheat-sheet/git.md")).unwrap();
        tldr.update().unwrap();

        assert_eq!(
            calls(temp.path()),
            vec!["--render /home/me/.cheat-sheet/git.md", "--update"]
        );
    }

    #[test]
    fn test_version_is_captured_and_trimmed() {
        let temp = TempDir::new().unwrap();
        let tldr = tldr_at(&fake_tldr(temp.path(), "printf '  tldr v3.3.0\\n\\n'"));

        assert_eq!(tldr.version().unwrap(), "tldr v3.3.0");
        assert_eq!(calls(temp.path()), vec!["--version"]);
    }

    #[test]
    fn test_version_does_not_special_case_not_found() {
        let temp = TempDir::new().unwrap();
        let tldr = tldr_at(&fake_tldr(temp.path(), "exit 3"));

        let err = tldr.version().unwrap_err();
        assert!(matches!(err, Error::ToolFailed { code: Some(3), .. }));
    }

    #[test]
    fn test_missing_executable_is_a_spawn_error() {
        let temp = TempDir::new().unwrap();
        let tldr = tldr_at(&temp.path().join("missing-tldr"));

        assert!(matches!(
            tldr.find(&["git".to_string()]).unwrap_err(),
            Error::SpawnError { .. }
        ));
        assert!(matches!(tldr.version().unwrap_err(), Error::SpawnError { .. }));
    }
}
