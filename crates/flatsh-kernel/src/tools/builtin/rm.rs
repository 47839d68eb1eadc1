//! rm — Remove files and directories.

use async_trait::async_trait;

use crate::fs::FsError;
use crate::interp::ExecResult;
use crate::tools::{usage_error, ExecContext, Tool, ToolArgs, ToolSchema};

const FORCE_FLAG: &str = "-rf";

/// Rm tool: delete an entry, recursively with `-rf`.
pub struct Rm;

#[async_trait]
impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rm", "Removes a file or directory [file|dir]")
            .usage("rm -rf [file|dir] or rm [file|dir]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        // One target, optionally the -rf flag in either position.
        if args.is_empty() || args.len() > 2 {
            return usage_error(&self.schema());
        }
        let target_arg = match args.first_non_flag(FORCE_FLAG) {
            Some(t) => t.to_string(),
            None => return usage_error(&self.schema()),
        };
        let recursive = args.has_flag(FORCE_FLAG);
        let target = ctx.resolve(&target_arg);

        let fs = match ctx.fs_mut() {
            Ok(fs) => fs,
            Err(e) => return ExecResult::failure(1, e.to_string()),
        };
        match fs.remove(&target, recursive) {
            Ok(()) => ExecResult::success(""),
            Err(FsError::NotEmpty(_)) => {
                ExecResult::failure(1, format!("Directory not empty: {target_arg}"))
            }
            Err(_) => ExecResult::failure(1, format!("No such file or directory: {target_arg}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testbench::{args, Bench};

    #[tokio::test]
    async fn removes_a_file() {
        let mut bench = Bench::seeded();
        let result = Rm.execute(args(&["file.txt"]), &mut bench.ctx()).await;
        assert!(result.ok());
        assert!(!bench.fs().contains("/file.txt"));
    }

    #[tokio::test]
    async fn non_empty_directory_needs_the_flag() {
        let mut bench = Bench::seeded();
        let result = Rm.execute(args(&["dir"]), &mut bench.ctx()).await;
        assert_eq!(result.err, "Directory not empty: dir");
        assert!(bench.fs().contains("/dir"));

        let result = Rm.execute(args(&["dir", "-rf"]), &mut bench.ctx()).await;
        assert!(result.ok());
        assert!(!bench.fs().contains("/dir"));
        assert!(!bench.fs().contains("/dir/nested.txt"));
        assert!(!bench.fs().contains("/dir/sub/deep.txt"));
    }

    #[tokio::test]
    async fn flag_may_come_first() {
        let mut bench = Bench::seeded();
        let result = Rm.execute(args(&["-rf", "dir"]), &mut bench.ctx()).await;
        assert!(result.ok());
        assert!(!bench.fs().contains("/dir"));
    }

    #[tokio::test]
    async fn empty_directory_is_removed_without_the_flag() {
        let mut bench = Bench::seeded();
        let result = Rm.execute(args(&["destdir"]), &mut bench.ctx()).await;
        assert!(result.ok());
        assert!(!bench.fs().contains("/destdir"));
    }

    #[tokio::test]
    async fn missing_target_reports_the_raw_argument() {
        let mut bench = Bench::new();
        let before = bench.fs().clone();
        let result = Rm.execute(args(&["nope"]), &mut bench.ctx()).await;
        assert_eq!(result.err, "No such file or directory: nope");
        assert_eq!(*bench.fs(), before);
    }

    #[tokio::test]
    async fn recursive_root_removal_keeps_root() {
        let mut bench = Bench::seeded();
        let result = Rm.execute(args(&["/", "-rf"]), &mut bench.ctx()).await;
        assert!(result.ok());
        assert_eq!(bench.fs().len(), 1);
        assert!(bench.fs().get("/").unwrap().is_dir());
    }

    #[tokio::test]
    async fn wrong_arity_is_a_usage_error() {
        let mut bench = Bench::new();
        let result = Rm.execute(ToolArgs::new(), &mut bench.ctx()).await;
        assert_eq!(result.err, "Usage: rm -rf [file|dir] or rm [file|dir]");
        let result = Rm.execute(args(&["a", "b", "c"]), &mut bench.ctx()).await;
        assert!(!result.ok());
    }
}
