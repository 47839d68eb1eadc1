//! help — List available commands.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

const HELP_LINE: &str = "Available commands: help, clear, echo [text], echo [text] > [file], \
ls, pwd, cd [dir], mkdir [dir], touch [file], cat [file], mv, rm, cp, stat, whoami, date, \
uptime, version, man";

/// Help tool: one-line command list.
pub struct Help;

#[async_trait]
impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "Displays available commands with brief descriptions")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success(HELP_LINE)
    }
}
