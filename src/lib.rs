//! Shared fixtures for the workspace integration tests.
//!
//! A [`Sandbox`] is a throwaway home directory with its own personal store,
//! tldr page cache, and a fake `tldr` executable that records how it was
//! called.

use std::fs;
use std::path::{Path, PathBuf};

use cheat_sheet_core::Config;
use tempfile::TempDir;

pub struct Sandbox {
    home: TempDir,
    bin: TempDir,
}

impl Sandbox {
    /// New sandbox whose fake tldr runs `tldr_body` after logging its
    /// arguments, e.g. `"exit 3"`.
    pub fn new(tldr_body: &str) -> Self {
        let home = TempDir::new().expect("create home dir");
        let bin = TempDir::new().expect("create bin dir");
        let sandbox = Self { home, bin };
        sandbox.write_script("tldr", tldr_body);
        sandbox
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Configuration pointing at this sandbox's home and fake tldr.
    pub fn config(&self) -> Config {
        let mut config = Config::for_home(self.home());
        config.tldr_path = self.tool_path("tldr").to_string_lossy().into_owned();
        config
            .ensure_store_dir()
            .expect("create personal store");
        config
    }

    pub fn store(&self) -> PathBuf {
        Config::for_home(self.home()).cheat_sheets_dir
    }

    pub fn put_local(&self, filename: &str, body: &str) -> PathBuf {
        let path = self.store().join(filename);
        fs::create_dir_all(self.store()).expect("create store");
        fs::write(&path, body).expect("write local page");
        path
    }

    pub fn put_cached(&self, page_set: &str, filename: &str, body: &str) -> PathBuf {
        let dir = Config::for_home(self.home()).tldr_cache_path.join(page_set);
        fs::create_dir_all(&dir).expect("create cache dir");
        let path = dir.join(filename);
        fs::write(&path, body).expect("write cached page");
        path
    }

    /// Write an executable script named `name` into the sandbox bin dir.
    /// Every invocation appends `<name> <args>` to the call log.
    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.tool_path(name);
        let script = format!(
            "#!/bin/sh\necho \"{name} $@\" >> \"{}\"\n{body}\n",
            self.call_log().display()
        );
        fs::write(&path, script).expect("write script");
        make_executable(&path);
        path
    }

    pub fn tool_path(&self, name: &str) -> PathBuf {
        self.bin.path().join(name)
    }

    /// Lines logged by the fake executables, in call order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.call_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn call_log(&self) -> PathBuf {
        self.bin.path().join("calls.log")
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod script");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
