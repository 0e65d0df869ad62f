use std::path::Path;

use crate::command::ToolCommand;
use crate::error::Result;
use crate::interfaces::Editor;

/// Launches an editor executable on the terminal we were started from.
#[derive(Debug, Clone)]
pub struct ProcessEditor {
    program: String,
}

impl ProcessEditor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Editor for ProcessEditor {
    fn open(&self, path: &Path) -> Result<()> {
        ToolCommand::new(&self.program)
            .arg(path.to_string_lossy().into_owned())
            .execute()
    }
}
