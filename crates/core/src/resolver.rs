//! Resolves a request against the personal store, tldr, and the editor.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::{
    command::{Action, Request},
    config::Config,
    error::{Error, Result},
    interfaces::{Editor, LookupTool},
    services::{CacheLocator, ProcessEditor, Tldr},
    types::Topic,
    utils::{copy_file, file_exists, list_documents},
};

/// Version of this tool, fixed at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
Usage: cs [options] <name>...
Options:
\t-h\t\tprint usage
\t-v\t\tprint version
\t-u\t\tupdate tldr cache
\t-l\t\tlist local cheat-sheets
\t-e <name>\tedit cheat-sheet name
\t-log\t\tprint log
Examples:
\tTo list cheat-sheet of `git`
\t$ cs git

\tTo edit cheat-sheet of `git`
\t$ cs -e git
";

pub fn usage() -> &'static str {
    USAGE
}

/// Versions reported by `cs -v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub cheat_sheet: String,
    pub tldr: String,
}

impl fmt::Display for VersionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cheat-sheet:\t{}", self.cheat_sheet)?;
        write!(f, "tldr:\t{}", self.tldr)
    }
}

pub struct Resolver<T = Tldr, E = ProcessEditor> {
    config: Config,
    tool: T,
    editor: E,
    cache: CacheLocator,
}

impl Resolver {
    /// Resolver backed by the configured tldr and editor executables.
    pub fn new(config: Config) -> Self {
        let tool = Tldr::new(config.tldr_path.clone());
        let editor = ProcessEditor::new(config.editor_path.clone());
        Self::with_backends(config, tool, editor)
    }
}

impl<T: LookupTool, E: Editor> Resolver<T, E> {
    pub fn with_backends(config: Config, tool: T, editor: E) -> Self {
        let cache = CacheLocator::new(config.tldr_cache_path.clone(), config.page_sets.clone());
        Self {
            config,
            tool,
            editor,
            cache,
        }
    }

    /// Run `request`, writing anything this tool prints itself to `out`.
    /// Output of tldr and the editor goes straight to the terminal.
    pub fn execute<W: Write>(&self, request: &Request, out: &mut W) -> Result<()> {
        debug!("Executing {} request: {:?}", request.action, request);

        match request.action {
            Action::Help => {
                write!(out, "{}", usage())?;
            }
            Action::Version => {
                let report = self.version()?;
                writeln!(out, "{report}")?;
            }
            Action::Find => self.find(Self::topic_for(request)?)?,
            Action::Edit => self.edit(Self::topic_for(request)?)?,
            Action::Update => self.update()?,
            Action::List => {
                for topic in self.list()? {
                    writeln!(out, "{topic}")?;
                }
            }
        }

        Ok(())
    }

    fn topic_for(request: &Request) -> Result<&Topic> {
        request
            .topic
            .as_ref()
            .ok_or_else(|| Error::MissingTopic(request.action.to_string()))
    }

    /// Show a local override if there is one, otherwise ask tldr.
    pub fn find(&self, topic: &Topic) -> Result<()> {
        let filename = topic.filename();
        let found = file_exists(&self.config.cheat_sheets_dir, &filename)?;
        debug!("has found local cheat-sheet: {}", found);

        if found {
            return self.tool.render(&self.config.local_path(&filename));
        }

        // tldr does its own matching on the raw tokens.
        self.tool.find(topic.tokens())
    }

    /// Edit the local copy, seeding it from tldr's cache on first edit,
    /// then show the result.
    pub fn edit(&self, topic: &Topic) -> Result<()> {
        let filename = topic.filename();
        let local_path = self.config.local_path(&filename);

        if !file_exists(&self.config.cheat_sheets_dir, &filename)? {
            let located = self.cache.locate(&filename)?;
            debug!(
                "find cheat sheet stored in {:?} of tldr cache",
                located.as_deref().map(|dir| dir.display().to_string())
            );

            if let Some(dir) = located {
                let bytes = copy_file(&dir.join(&filename), &local_path)?;
                debug!("seeded {} ({} bytes)", local_path.display(), bytes);
            }
        }

        // With no local file and no cache hit the editor creates a new one.
        self.editor.open(&local_path)?;
        self.find(topic)
    }

    pub fn update(&self) -> Result<()> {
        self.tool.update()
    }

    pub fn version(&self) -> Result<VersionReport> {
        let tldr = self.tool.version()?;
        Ok(VersionReport {
            cheat_sheet: VERSION.to_string(),
            tldr,
        })
    }

    /// Topics that have a local override.
    pub fn list(&self) -> Result<Vec<String>> {
        list_documents(&self.config.cheat_sheets_dir)
    }
}
