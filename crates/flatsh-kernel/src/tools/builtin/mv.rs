//! mv — Move (rename) files and directories.

use async_trait::async_trait;

use crate::fs::FsError;
use crate::interp::ExecResult;
use crate::tools::{usage_error, ExecContext, Tool, ToolArgs, ToolSchema};

/// Mv tool: relocate an entry and everything under it.
pub struct Mv;

#[async_trait]
impl Tool for Mv {
    fn name(&self) -> &str {
        "mv"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mv", "Moves a file or directory from [source] to [destination]")
            .usage("mv [source] [destination]")
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
        match fs.rename(&src, &dst) {
            Ok(()) => ExecResult::success(""),
            Err(FsError::SameSource) => {
                ExecResult::failure(1, "Source and destination are the same.")
            }
            Err(_) => ExecResult::failure(1, format!("No such file or directory: {src_arg}")),
        }
    }
}
