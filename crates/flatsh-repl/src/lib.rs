//! flatsh REPL — interactive front end for the flatsh kernel.
//!
//! It handles:
//! - Meta-commands: `/help`, `/quit`
//! - Line execution via the kernel `Session`
//! - Command history via rustyline
//!
//! Everything a command prints is what the session appended to its
//! scrollback for that step; the echo line is implicit in a terminal.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::runtime::Runtime;

use flatsh_kernel::{path, paths, FileStore, Session, StateStore};

/// Result from meta-command handling.
#[derive(Debug)]
enum MetaResult {
    /// Continue with optional output
    Continue(Option<String>),
    /// Exit the REPL (caller should save history and exit)
    Exit,
}

/// REPL configuration and state.
pub struct Repl {
    session: Session,
    runtime: Runtime,
}

impl Repl {
    /// Create a REPL backed by the default on-disk state file.
    pub fn new() -> Result<Self> {
        Self::with_store(Arc::new(FileStore::default_location()))
    }

    /// Create a REPL over an explicit store.
    pub fn with_store(store: Arc<dyn StateStore>) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let session = runtime.block_on(Session::load(store));
        Ok(Self { session, runtime })
    }

    /// The session's current working directory.
    pub fn cwd(&self) -> &str {
        self.session.cwd()
    }

    /// The prompt, rendered from the cwd.
    pub fn prompt(&self) -> String {
        format!("{}$ ", path::with_trailing_slash(self.session.cwd()))
    }

    /// Lines the session has appended while the REPL started up
    /// (the load warning, if any).
    pub fn startup_lines(&self) -> &[String] {
        self.session.scrollback()
    }

    /// Process a single line of input.
    /// Returns Ok(None) for empty input or silent commands, Ok(Some(output))
    /// for output to display, or Err to signal the REPL should exit.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();

        if trimmed.starts_with('/') {
            return match handle_meta_command(trimmed) {
                MetaResult::Continue(output) => Ok(output),
                MetaResult::Exit => Err(anyhow::anyhow!("__REPL_EXIT__")),
            };
        }

        if trimmed.is_empty() {
            return Ok(None);
        }

        let output = self.runtime.block_on(self.session.step(trimmed));
        if output.is_empty() {
            Ok(None)
        } else {
            Ok(Some(output.join("\n")))
        }
    }
}

/// Handle a meta-command (starts with /).
fn handle_meta_command(cmd: &str) -> MetaResult {
    match cmd.split_whitespace().next().unwrap_or("") {
        "/quit" | "/q" | "/exit" => MetaResult::Exit,
        "/help" | "/h" | "/?" => MetaResult::Continue(Some(META_HELP.to_string())),
        other => MetaResult::Continue(Some(format!(
            "Unknown command: {other}\nType /help for meta-commands, help for shell commands."
        ))),
    }
}

const META_HELP: &str = "\
flatsh meta-commands:
  /help, /h, /?   Show this help
  /quit, /q       Exit the REPL

Shell commands: type `help` or `man`.";

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<(), DefaultHistory>, history_path: &PathBuf) {
    if let Some(parent) = history_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("Failed to create history directory: {}", e);
        }
    }
    if let Err(e) = rl.save_history(history_path) {
        tracing::warn!("Failed to save history: {}", e);
    }
}

/// Run the interactive REPL.
pub fn run() -> Result<()> {
    println!("flatsh v{}", env!("CARGO_PKG_VERSION"));
    println!("Type help for commands, /quit to exit.");

    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;

    let history_path = paths::history_file();
    if let Err(e) = rl.load_history(&history_path) {
        // First run has no history file.
        let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
        if !is_not_found {
            tracing::warn!("Failed to load history: {}", e);
        }
    }

    let mut repl = Repl::new()?;
    for line in repl.startup_lines() {
        println!("{line}");
    }
    println!();

    loop {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("Failed to add history entry: {}", e);
                }

                match repl.process_line(&line) {
                    Ok(Some(output)) => println!("{output}"),
                    Ok(None) => {}
                    Err(_) => {
                        // User requested exit
                        save_history(&mut rl, &history_path);
                        return Ok(());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    save_history(&mut rl, &history_path);
    Ok(())
}
