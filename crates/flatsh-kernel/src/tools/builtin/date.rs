//! date — Display current date and time.

use async_trait::async_trait;
use chrono::Local;

use crate::interp::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Date tool: local date/time.
pub struct Date;

#[async_trait]
impl Tool for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("date", "Displays the current system date and time")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success(Local::now().format("%a %b %d %Y %H:%M:%S %z").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testbench::Bench;
    use chrono::Datelike;

    #[tokio::test]
    async fn output_contains_the_current_year() {
        let mut bench = Bench::new();
        let result = Date.execute(ToolArgs::new(), &mut bench.ctx()).await;
        assert!(result.ok());
        assert!(result.out.contains(&Local::now().year().to_string()));
    }
}
