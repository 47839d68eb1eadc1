//! ls — List the current directory.
//!
//! Children are inferred by string-prefix matching on the flat map, so
//! entries created under a path that was never `mkdir`ed still show up.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Ls tool: list immediate children of the working directory.
pub struct Ls;

#[async_trait]
impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "Lists files and directories in the current directory")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let fs = match ctx.fs() {
            Ok(fs) => fs,
            Err(e) => return ExecResult::failure(1, e.to_string()),
        };
        ExecResult::success(fs.list(ctx.cwd).join("  "))
    }
}
