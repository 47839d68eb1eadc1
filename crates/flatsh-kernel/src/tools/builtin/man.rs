//! man — The command manual.

use async_trait::async_trait;

use crate::interp::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

const MANUAL: &str = "\
Manual for Available Commands:

1. help
   - Displays available commands with brief descriptions.

2. clear
   - Clears the terminal screen.

3. echo [text]
   - Displays [text] in the terminal.
   - Example: echo Hello, World!

4. echo [text] > [file]
   - Writes [text] to [file].
   - Example: echo Hello > myfile.txt

5. ls
   - Lists files and directories in the current directory.

6. pwd
   - Prints the current working directory.

7. cd [dir]
   - Changes the current directory to [dir].

8. mkdir [dir]
   - Creates a directory named [dir].

9. touch [file]
   - Creates a file named [file].

10. cat [file]
   - Displays the contents of the file [file].

11. mv [source] [destination]
   - Moves a file or directory from [source] to [destination].

12. rm [file|dir]
   - Removes a file or directory [file|dir].

13. whoami
   - Displays the current user (usually root).

14. date
   - Displays the current system date and time.

15. uptime
   - Displays the systems uptime.

16. version
   - Displays the current version of the shell.

17. stat [file|dir]
   - Displays the status (metadata) of a file or directory.

18. cp [source] [destination]
   - Copies a file or directory from [source] to [destination].

For detailed information, use the man command.";

/// Man tool: multi-entry command manual.
pub struct Man;

#[async_trait]
impl Tool for Man {
    fn name(&self) -> &str {
        "man"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("man", "Displays the manual for all commands")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success(MANUAL)
    }
}
