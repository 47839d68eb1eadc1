//! Tool system for flatsh.
//!
//! Every shell command except `clear` (intercepted by the interpreter) and
//! the `echo ... > file` redirect (a dedicated grammar rule) is a tool
//! implementing the same `Tool` trait, registered by name and dispatched on
//! the first token of the input line.

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{usage_error, Tool, ToolArgs, ToolSchema};

#[cfg(test)]
pub(crate) mod testbench {
    //! Shared fixture for builtin tests.

    use std::time::Instant;

    use crate::fs::FlatFs;

    use super::{ExecContext, ToolArgs};

    /// Owns the state an `ExecContext` borrows.
    pub struct Bench {
        pub fs: Option<FlatFs>,
        pub cwd: String,
        started: Instant,
    }

    impl Bench {
        /// A fresh filesystem containing only `/`.
        pub fn new() -> Self {
            Self {
                fs: Some(FlatFs::new()),
                cwd: "/".to_string(),
                started: Instant::now(),
            }
        }

        /// A filesystem pre-populated with files and directories.
        pub fn seeded() -> Self {
            let mut bench = Self::new();
            let fs = bench.fs.as_mut().unwrap();
            fs.write_file("/file.txt", "hello world");
            fs.make_dir("/dir").unwrap();
            fs.write_file("/dir/nested.txt", "nested content");
            fs.write_file("/dir/sub/deep.txt", "deep content");
            fs.make_dir("/destdir").unwrap();
            bench
        }

        /// The state before any filesystem has been loaded.
        pub fn uninitialized() -> Self {
            Self {
                fs: None,
                cwd: "/".to_string(),
                started: Instant::now(),
            }
        }

        pub fn ctx(&mut self) -> ExecContext<'_> {
            ExecContext::with_started(&mut self.fs, &mut self.cwd, self.started)
        }

        pub fn fs(&self) -> &FlatFs {
            self.fs.as_ref().unwrap()
        }
    }

    /// Build `ToolArgs` from string literals.
    pub fn args(tokens: &[&str]) -> ToolArgs {
        ToolArgs::from_tokens(tokens.iter().copied())
    }
}
