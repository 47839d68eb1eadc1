//! Core tool traits and types.

use async_trait::async_trait;

use crate::interp::ExecResult;

use super::context::ExecContext;

/// Schema describing a tool's interface, used for usage errors and listings.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Argument synopsis, e.g. `mkdir [dirname]`.
    pub usage: String,
}

impl ToolSchema {
    /// Create a new tool schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            description: description.into(),
        }
    }

    /// Set the argument synopsis.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

/// Raw argument tokens following the command name.
///
/// The grammar is whitespace splitting with no quoting (the only quoted form
/// is the `echo ... > file` redirect, matched before tokenizing), so every
/// tool interprets its own tokens.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Tokens after the command name, in order.
    pub argv: Vec<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build args from string tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Get a token by position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.argv.get(index).map(String::as_str)
    }

    /// True if the exact token (e.g. `-rf`) appears anywhere.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.argv.iter().any(|a| a == flag)
    }

    /// The first token that is not the given flag.
    pub fn first_non_flag(&self, flag: &str) -> Option<&str> {
        self.argv.iter().find(|a| *a != flag).map(String::as_str)
    }

    /// All tokens joined by single spaces (the `echo` behavior).
    pub fn join(&self) -> String {
        self.argv.join(" ")
    }

    pub fn len(&self) -> usize {
        self.argv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}

/// A tool that can be executed.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult;
}

/// The standard missing-argument response for a tool.
pub fn usage_error(schema: &ToolSchema) -> ExecResult {
    ExecResult::failure(1, format!("Usage: {}", schema.usage))
}
