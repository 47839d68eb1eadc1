//! Line parsing and command dispatch.
//!
//! One input line becomes one [`Step`]:
//!
//! 1. The redirect grammar `echo <quoted-or-bare text> > <path>` is matched
//!    first, as a dedicated rule that takes precedence over the generic
//!    `echo` tool.
//! 2. `clear` is intercepted because it rewrites the scrollback rather than
//!    producing a response.
//! 3. Everything else is whitespace-split and dispatched to the tool whose
//!    name equals the first token (case-sensitive).

use crate::tools::{register_builtins, ExecContext, ToolArgs, ToolRegistry};

/// The result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Response text on success.
    pub out: String,
    /// Response text on failure, always a single literal message line.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// True if the command succeeded.
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// The line to append to the scrollback: `out` on success, `err` on failure.
    pub fn response(&self) -> &str {
        if self.ok() {
            &self.out
        } else {
            &self.err
        }
    }
}

/// What one interpreted line asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Replace the scrollback with nothing, without echoing the input.
    Clear,
    /// Echo the input, then append the response if non-empty.
    Done(ExecResult),
}

/// A matched `echo ... > path` redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub text: String,
    pub path: String,
}

/// The command interpreter: a fixed, case-sensitive command table.
pub struct Interpreter {
    registry: ToolRegistry,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Create an interpreter with every builtin registered.
    pub fn new() -> Self {
        let mut registry = ToolRegistry::new();
        register_builtins(&mut registry);
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Interpret one trimmed, non-empty input line.
    pub async fn interpret(&self, line: &str, ctx: &mut ExecContext<'_>) -> Step {
        if let Some(redirect) = parse_redirect(line) {
            tracing::debug!(path = %redirect.path, "redirect write");
            let full = ctx.resolve(&redirect.path);
            return match ctx.fs_mut() {
                Ok(fs) => {
                    fs.write_file(&full, &redirect.text);
                    Step::Done(ExecResult::success(""))
                }
                Err(e) => Step::Done(ExecResult::failure(1, e.to_string())),
            };
        }

        let (cmd, args) = parse_line(line);
        if cmd == "clear" {
            return Step::Clear;
        }

        match self.registry.get(&cmd) {
            Some(tool) => {
                tracing::debug!(command = %cmd, argc = args.len(), "dispatch");
                Step::Done(tool.execute(args, ctx).await)
            }
            None => Step::Done(ExecResult::failure(
                127,
                format!("Command not found: {line}"),
            )),
        }
    }
}

/// Split a line into the command name and its argument tokens.
fn parse_line(line: &str) -> (String, ToolArgs) {
    let mut tokens = line.split_whitespace();
    let cmd = tokens.next().unwrap_or("").to_string();
    (cmd, ToolArgs::from_tokens(tokens))
}

/// Match the redirect grammar: `echo <text> > <path>`.
///
/// The path is the single token after the last `>`; the text is everything
/// between `echo` and that `>`, with one optional quote character stripped
/// from each side independently. The quotes do not have to pair up.
fn parse_redirect(line: &str) -> Option<Redirect> {
    let rest = line.strip_prefix("echo")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let gt = rest.rfind('>')?;
    let path = rest[gt + 1..].trim();
    if path.is_empty() || path.contains(char::is_whitespace) {
        return None;
    }
    let mut text = rest[..gt].trim();
    text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    text = text.strip_suffix(['"', '\'']).unwrap_or(text);
    Some(Redirect {
        text: text.to_string(),
        path: path.to_string(),
    })
}
