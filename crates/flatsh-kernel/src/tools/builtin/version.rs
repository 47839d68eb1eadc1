//! version — Display the shell version.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Version tool: prints the shell version string.
pub struct Version;

#[async_trait]
impl Tool for Version {
    fn name(&self) -> &str {
        "version"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("version", "Displays the current version of the shell")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success(format!("Shell v{}", env!("CARGO_PKG_VERSION")))
    }
}
