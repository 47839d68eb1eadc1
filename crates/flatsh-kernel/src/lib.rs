//! flatsh-kernel: the core of flatsh.
//!
//! This crate provides:
//!
//! - **Path**: cwd-relative path resolution over absolute string paths
//! - **Fs**: a flat path→node virtual filesystem with a JSON wire format
//! - **Store**: whole-blob persistence backends (file, memory)
//! - **Tools**: the `Tool` trait and one builtin per shell command
//! - **Interp**: line parsing (including `echo ... > file`) and dispatch
//! - **Session**: cwd + scrollback + the read-eval-print step
//! - **Paths**: XDG-compliant locations for state and history

pub mod fs;
pub mod interp;
pub mod path;
pub mod paths;
pub mod session;
pub mod store;
pub mod tools;

pub use fs::{FlatFs, FsError, Node, NodeStat};
pub use interp::{ExecResult, Interpreter, Step};
pub use session::Session;
pub use store::{FileStore, MemoryStore, StateStore};
pub use tools::{ExecContext, Tool, ToolArgs, ToolRegistry, ToolSchema};
