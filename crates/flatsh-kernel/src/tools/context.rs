//! Execution context for tools.

use std::time::Instant;

use crate::fs::{FlatFs, FsError};
use crate::path;

/// Execution context passed to tools.
///
/// Borrows the session's filesystem and working directory for the duration
/// of one command. The filesystem is `None` until the session has loaded
/// state; tools surface that as `Filesystem not initialized`.
pub struct ExecContext<'a> {
    /// The flat virtual filesystem, if loaded.
    pub fs: &'a mut Option<FlatFs>,
    /// Current working directory (absolute, no trailing slash except `/`).
    pub cwd: &'a mut String,
    /// When the session started, for `uptime`.
    pub started: Instant,
}

impl<'a> ExecContext<'a> {
    /// Create a context starting the uptime clock now.
    pub fn new(fs: &'a mut Option<FlatFs>, cwd: &'a mut String) -> Self {
        Self {
            fs,
            cwd,
            started: Instant::now(),
        }
    }

    /// Create a context with an explicit session start instant.
    pub fn with_started(fs: &'a mut Option<FlatFs>, cwd: &'a mut String, started: Instant) -> Self {
        Self { fs, cwd, started }
    }

    /// Resolve a command argument against the current working directory.
    pub fn resolve(&self, arg: &str) -> String {
        path::resolve(self.cwd, arg)
    }

    /// The filesystem, or `FsError::NotInitialized`.
    pub fn fs(&self) -> Result<&FlatFs, FsError> {
        self.fs.as_ref().ok_or(FsError::NotInitialized)
    }

    /// Mutable filesystem access, or `FsError::NotInitialized`.
    pub fn fs_mut(&mut self) -> Result<&mut FlatFs, FsError> {
        self.fs.as_mut().ok_or(FsError::NotInitialized)
    }

    /// Change the current working directory.
    ///
    /// The stored cwd never carries a trailing slash (`/` stays `/`).
    pub fn set_cwd(&mut self, new_cwd: &str) {
        *self.cwd = path::trim_trailing_slash(new_cwd).to_string();
    }
}
