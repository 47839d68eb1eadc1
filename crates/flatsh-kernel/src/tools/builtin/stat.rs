//! stat — Display entry metadata.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Stat tool: path, type, and size of one entry.
pub struct Stat;

#[async_trait]
impl Tool for Stat {
    fn name(&self) -> &str {
        "stat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("stat", "Displays the status (metadata) of a file or directory")
            .usage("stat [file|dir]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        // A missing argument resolves the empty string against cwd, which
        // stats the root when cwd is `/`.
        let target_arg = args.get(0).unwrap_or("").to_string();
        let target = ctx.resolve(&target_arg);
        let fs = match ctx.fs() {
            Ok(fs) => fs,
            Err(e) => return ExecResult::failure(1, e.to_string()),
        };
        match fs.stat(&target) {
            Ok(st) => ExecResult::success(format!(
                "Path: {}\nType: {}\nSize: {} bytes",
                st.path, st.kind, st.size
            )),
            Err(_) => ExecResult::failure(1, format!("No such file or directory: {target_arg}")),
        }
    }
}
