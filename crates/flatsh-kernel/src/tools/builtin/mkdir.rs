//! mkdir — Create a directory.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{usage_error, ExecContext, Tool, ToolArgs, ToolSchema};

/// Mkdir tool: create a directory entry.
pub struct Mkdir;

#[async_trait]
impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mkdir", "Creates a directory named [dir]").usage("mkdir [dirname]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let name = match args.get(0) {
            Some(n) => n.to_string(),
            None => return usage_error(&self.schema()),
        };
        let full = ctx.resolve(&name);
        let fs = match ctx.fs_mut() {
            Ok(fs) => fs,
            Err(e) => return ExecResult::failure(1, e.to_string()),
        };
        match fs.make_dir(&full) {
            Ok(()) => ExecResult::success(""),
            Err(_) => ExecResult::failure(1, format!("Directory already exists: {name}")),
        }
    }
}
