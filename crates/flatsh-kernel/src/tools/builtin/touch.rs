//! touch — Create an empty file.
//!
//! Unconditional insert-or-overwrite: touching an existing file resets its
//! contents to the empty string, matching the flat model's semantics.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{usage_error, ExecContext, Tool, ToolArgs, ToolSchema};

/// Touch tool: create or reset a file.
pub struct Touch;

#[async_trait]
impl Tool for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("touch", "Creates a file named [file]").usage("touch [filename]")
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
        fs.touch_file(&full);
        ExecResult::success("")
    }
}
