//! cp — Copy files and directories.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{usage_error, ExecContext, Tool, ToolArgs, ToolSchema};

/// Cp tool: deep-copy an entry and everything under it.
pub struct Cp;

#[async_trait]
impl Tool for Cp {
    fn name(&self) -> &str {
        "cp"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cp", "Copies a file or directory from [source] to [destination]")
            .usage("cp [source] [destination]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        if args.len() != 2 {
            return usage_error(&self.schema());
        }
        let (Some(src_arg), Some(dst_arg)) = (args.get(0), args.get(1)) else {
            return usage_error(&self.schema());
        };
        let (src_arg, dst_arg) = (src_arg.to_string(), dst_arg.to_string());
        let src = ctx.resolve(&src_arg);
        let dst = ctx.resolve(&dst_arg);

        let fs = match ctx.fs_mut() {
            Ok(fs) => fs,
            Err(e) => return ExecResult::failure(1, e.to_string()),
        };
        match fs.copy(&src, &dst) {
            Ok(()) => ExecResult::success(""),
            Err(_) => ExecResult::failure(1, format!("No such file or directory: {src_arg}")),
        }
    }
}
