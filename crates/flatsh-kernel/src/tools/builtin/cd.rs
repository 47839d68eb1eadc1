//! cd — Change working directory.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::path;
use crate::tools::{usage_error, ExecContext, Tool, ToolArgs, ToolSchema};

/// Cd tool: change the current working directory.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Changes the current directory to [dir]").usage("cd [directory]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let target = match args.get(0) {
            Some(t) => t.to_string(),
            None => return usage_error(&self.schema()),
        };

        // `..` pops a segment off cwd instead of going through resolution.
        let new_path = if target == ".." {
            path::parent(ctx.cwd)
        } else {
            ctx.resolve(&target)
        };

        let fs = match ctx.fs() {
            Ok(fs) => fs,
            Err(e) => return ExecResult::failure(1, e.to_string()),
        };
        match fs.require_dir(path::trim_trailing_slash(&new_path)) {
            Ok(()) => {
                ctx.set_cwd(&new_path);
                ExecResult::success("")
            }
            Err(_) => ExecResult::failure(1, format!("No such directory: {target}")),
        }
    }
}
