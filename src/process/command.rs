//! Command description and structured process results.

use crate::error::{Result, ToolError};
use std::fmt;
use std::path::{Path, PathBuf};

/// How a command's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Stream straight to the terminal; nothing is captured
    Inherit,
    /// Capture stdout and stderr for inspection
    Capture,
}

/// A single external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Program name, resolved on PATH
    pub program: String,
    /// Arguments passed verbatim
    pub args: Vec<String>,
    /// Working directory
    pub cwd: PathBuf,
    /// Stream handling
    pub stdio: StdioMode,
}

impl ToolCommand {
    /// Create a command with inherited stdio
    pub fn new(program: impl Into<String>, cwd: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.as_ref().to_path_buf(),
            stdio: StdioMode::Inherit,
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Capture output instead of streaming it
    pub fn captured(mut self) -> Self {
        self.stdio = StdioMode::Capture;
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Result of running a command to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    /// Captured stdout (empty for inherited stdio)
    pub stdout: String,
    /// Captured stderr (empty for inherited stdio)
    pub stderr: String,
}

impl CommandOutput {
    /// Successful run with the given stdout
    pub fn success_with(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed run with the given exit code and stderr
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the process exited with status 0
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into [`ToolError::NonZeroExit`]
    pub fn ensure_success(self, command: &ToolCommand) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(ToolError::NonZeroExit {
                command: command.to_string(),
                code: self.code,
                stderr: self.stderr,
            }
            .into())
        }
    }
}
