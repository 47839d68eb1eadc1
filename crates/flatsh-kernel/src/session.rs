//! One interactive shell session.
//!
//! A session exclusively owns the filesystem, the current working directory,
//! and the scrollback. Each call to [`Session::step`] processes one input
//! line to completion, including the persistence write it may trigger,
//! before the next line is accepted.

use std::sync::Arc;
use std::time::Instant;

use crate::fs::FlatFs;
use crate::interp::{Interpreter, Step};
use crate::store::StateStore;
use crate::tools::ExecContext;

const LOAD_WARNING: &str = "> Warning: Failed to load saved filesystem";
const SAVE_WARNING: &str = "> Warning: Failed to save filesystem";

pub struct Session {
    cwd: String,
    scrollback: Vec<String>,
    fs: Option<FlatFs>,
    store: Arc<dyn StateStore>,
    interp: Interpreter,
    started: Instant,
}

impl Session {
    /// Start a session, loading persisted state from `store`.
    ///
    /// A missing blob seeds a fresh root-only filesystem silently; an
    /// unreadable or unparsable blob seeds the same and appends a warning
    /// line to the scrollback.
    pub async fn load(store: Arc<dyn StateStore>) -> Self {
        let mut session = Self::with_fs(FlatFs::new(), store);
        match session.store.load().await {
            Ok(None) => {}
            Ok(Some(blob)) => match FlatFs::from_json(&blob) {
                Ok(fs) => session.fs = Some(fs),
                Err(e) => {
                    tracing::warn!(error = %e, "persisted state unparsable, starting fresh");
                    session.scrollback.push(LOAD_WARNING.to_string());
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted state, starting fresh");
                session.scrollback.push(LOAD_WARNING.to_string());
            }
        }
        session
    }

    /// Start a session around an already-built filesystem.
    pub fn with_fs(fs: FlatFs, store: Arc<dyn StateStore>) -> Self {
        Self {
            cwd: "/".to_string(),
            scrollback: Vec::new(),
            fs: Some(fs),
            store,
            interp: Interpreter::new(),
            started: Instant::now(),
        }
    }

    /// Start a session whose filesystem has not been loaded.
    pub fn uninitialized(store: Arc<dyn StateStore>) -> Self {
        let mut session = Self::with_fs(FlatFs::new(), store);
        session.fs = None;
        session
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn scrollback(&self) -> &[String] {
        &self.scrollback
    }

    pub fn fs(&self) -> Option<&FlatFs> {
        self.fs.as_ref()
    }

    /// Process one input line to completion.
    ///
    /// The raw line is echoed as `> line`, the response (if non-empty) is
    /// appended, and a revision change triggers a persist. Returns the lines
    /// appended after the echo, which is what the REPL prints.
    pub async fn step(&mut self, line: &str) -> Vec<String> {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }

        let rev_before = self.fs.as_ref().map(FlatFs::rev);
        let step = {
            let mut ctx = ExecContext::with_started(&mut self.fs, &mut self.cwd, self.started);
            self.interp.interpret(line, &mut ctx).await
        };

        let mut appended = Vec::new();
        match step {
            Step::Clear => {
                self.scrollback.clear();
                return appended;
            }
            Step::Done(result) => {
                self.scrollback.push(format!("> {line}"));
                let response = result.response();
                if !response.is_empty() {
                    self.scrollback.push(response.to_string());
                    appended.push(response.to_string());
                }
            }
        }

        if self.fs.as_ref().map(FlatFs::rev) != rev_before {
            if let Some(warning) = self.persist().await {
                self.scrollback.push(warning.clone());
                appended.push(warning);
            }
        }
        appended
    }

    /// Write the full mapping back to the store. Returns the warning line on
    /// failure; the in-memory state is kept either way.
    async fn persist(&self) -> Option<String> {
        let fs = self.fs.as_ref()?;
        let blob = match fs.to_json() {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize filesystem");
                return Some(SAVE_WARNING.to_string());
            }
        };
        match self.store.save(&blob).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist filesystem");
                Some(SAVE_WARNING.to_string())
            }
        }
    }
}
