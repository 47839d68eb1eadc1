//! echo — Print arguments.
//!
//! The redirect form `echo text > file` never reaches this tool; the
//! interpreter matches it as a dedicated grammar rule first.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Echo tool: prints its arguments.
pub struct Echo;

#[async_trait]
impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("echo", "Displays [text] in the terminal").usage("echo [text]")
    }

    async fn execute(&self, args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success(args.join())
    }
}
