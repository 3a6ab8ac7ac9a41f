use std::path::{Path, PathBuf};

use smartterm_commons::{normalize_path, resolve_path};
use tracing::debug;

use crate::error::{ShellError, ShellResult};

/// Per-session state shared by every filesystem handler.
///
/// The working directory is always absolute, normalized, and pointed at an
/// existing directory when it was last set. All path arguments are resolved
/// through [`Session::resolve`].
#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
}

impl Session {
    pub fn new(cwd: impl AsRef<Path>) -> ShellResult<Self> {
        let cwd = cwd.as_ref();
        if !cwd.is_absolute() {
            return Err(ShellError::usage(format!(
                "working directory must be absolute: {}",
                cwd.display()
            )));
        }
        let cwd = normalize_path(cwd);
        if !cwd.is_dir() {
            return Err(ShellError::operation(format!(
                "no such directory: {}",
                cwd.display()
            )));
        }
        Ok(Self { cwd })
    }

    /// Start a session in the process's current directory.
    pub fn from_process() -> ShellResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|err| ShellError::io("cannot read current directory", ".", err))?;
        Self::new(cwd)
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a user-supplied path against the working directory. The target
    /// does not need to exist.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve_path(&self.cwd, path)
    }

    /// Switch to `path`. On failure the working directory is left untouched.
    pub fn change_dir(&mut self, path: &str) -> ShellResult<&Path> {
        let target = self.resolve(path);
        if !target.is_dir() {
            return Err(ShellError::operation(format!("cd: no such directory: {path}")));
        }
        debug!(from = %self.cwd.display(), to = %target.display(), "changing directory");
        self.cwd = target;
        Ok(&self.cwd)
    }
}
