//! uptime — Time since the session started.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Uptime tool: session age as `up Hh Mm Ss`.
pub struct Uptime;

#[async_trait]
impl Tool for Uptime {
    fn name(&self) -> &str {
        "uptime"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("uptime", "Displays the systems uptime")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let seconds = ctx.started.elapsed().as_secs();
        let hrs = seconds / 3600;
        let mins = (seconds % 3600) / 60;
        let secs = seconds % 60;
        ExecResult::success(format!("up {hrs}h {mins}m {secs}s"))
    }
}
