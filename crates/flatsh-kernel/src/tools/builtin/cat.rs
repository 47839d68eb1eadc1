//! cat — Print file contents.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{usage_error, ExecContext, Tool, ToolArgs, ToolSchema};

/// Cat tool: print the contents of one file.
pub struct Cat;

#[async_trait]
impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cat", "Displays the contents of the file [file]").usage("cat [filename]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let name = match args.get(0) {
            Some(n) => n.to_string(),
            None => return usage_error(&self.schema()),
        };
        let full = ctx.resolve(&name);
        let fs = match ctx.fs() {
            Ok(fs) => fs,
            Err(e) => return ExecResult::failure(1, e.to_string()),
        };
        match fs.read_file(&full) {
            Ok(contents) => ExecResult::success(contents.to_string()),
            Err(_) => ExecResult::failure(1, format!("No such file: {name}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testbench::{args, Bench};

    #[tokio::test]
    async fn prints_file_contents() {
        let mut bench = Bench::seeded();
        let result = Cat.execute(args(&["file.txt"]), &mut bench.ctx()).await;
        assert!(result.ok());
        assert_eq!(result.out, "hello world");
    }

    #[tokio::test]
    async fn empty_file_is_an_empty_response() {
        let mut bench = Bench::new();
        bench.fs.as_mut().unwrap().touch_file("/a.txt");
        let result = Cat.execute(args(&["a.txt"]), &mut bench.ctx()).await;
        assert!(result.ok());
        assert_eq!(result.out, "");
    }

    #[tokio::test]
    async fn missing_file_is_reported_with_the_raw_argument() {
        let mut bench = Bench::new();
        let result = Cat.execute(args(&["nope.txt"]), &mut bench.ctx()).await;
        assert_eq!(result.err, "No such file: nope.txt");
    }

    #[tokio::test]
    async fn directory_target_is_not_a_file() {
        let mut bench = Bench::seeded();
        let result = Cat.execute(args(&["dir"]), &mut bench.ctx()).await;
        assert_eq!(result.err, "No such file: dir");
    }

    #[tokio::test]
    async fn no_argument_is_a_usage_error() {
        let mut bench = Bench::new();
        let result = Cat.execute(ToolArgs::new(), &mut bench.ctx()).await;
        assert_eq!(result.err, "Usage: cat [filename]");
    }
}
