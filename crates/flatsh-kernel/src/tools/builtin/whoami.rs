//! whoami — Display the current user.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Whoami tool: there is only one user here.
pub struct Whoami;

#[async_trait]
impl Tool for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("whoami", "Displays the current user (usually root)")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success("root")
    }
}
