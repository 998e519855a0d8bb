//! Command runners: the real system, and a dry-run printer.

use super::{CommandOutput, StdioMode, ToolCommand};
use crate::cli::OutputManager;
use crate::error::{Result, ToolError};
use std::future::Future;
use std::process::Stdio;

/// Capability to run an external command to completion
///
/// A non-zero exit is *not* an error at this level; callers decide what a
/// failure means via [`CommandOutput::ensure_success`] or their own mapping.
pub trait CommandRunner {
    /// Run the command and wait for it to exit
    fn run(&self, command: &ToolCommand) -> impl Future<Output = Result<CommandOutput>>;
}

/// Runs commands on the host with tokio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner {
    stdout_to_stderr: bool,
}

impl SystemRunner {
    /// Create a system runner
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the stdout of inherited-stdio commands to our stderr.
    ///
    /// Keeps our own stdout free for machine-readable output.
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn inherited_stdout(&self) -> Stdio {
        if self.stdout_to_stderr {
            Stdio::from(std::io::stderr())
        } else {
            Stdio::inherit()
        }
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &ToolCommand) -> Result<CommandOutput> {
        let program = which::which(&command.program).map_err(|e| ToolError::NotFound {
            program: command.program.clone(),
            reason: e.to_string(),
        })?;

        log::debug!("Running `{}` in {}", command, command.cwd.display());

        let mut process = tokio::process::Command::new(&program);
        process.args(&command.args).current_dir(&command.cwd);

        let spawn_error = |source| ToolError::SpawnFailed {
            command: command.to_string(),
            source,
        };

        let output = match command.stdio {
            StdioMode::Inherit => {
                let status = process
                    .stdin(Stdio::inherit())
                    .stdout(self.inherited_stdout())
                    .stderr(Stdio::inherit())
                    .status()
                    .await
                    .map_err(spawn_error)?;
                CommandOutput {
                    code: status.code(),
                    ..CommandOutput::default()
                }
            }
            StdioMode::Capture => {
                let output = process
                    .stdin(Stdio::null())
                    .output()
                    .await
                    .map_err(spawn_error)?;
                CommandOutput {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
        };

        log::debug!("`{}` exited with {:?}", command, output.code);
        if !output.stdout.is_empty() {
            log::trace!("stdout:\n{}", output.stdout);
        }
        if !output.stderr.is_empty() {
            log::trace!("stderr:\n{}", output.stderr);
        }

        Ok(output)
    }
}

/// Prints each command instead of running it and reports success with no output
#[derive(Debug, Clone)]
pub struct DryRunRunner {
    output: OutputManager,
}

impl DryRunRunner {
    /// Create a dry-run runner printing through `output`
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl CommandRunner for DryRunRunner {
    async fn run(&self, command: &ToolCommand) -> Result<CommandOutput> {
        log::debug!("Dry run, skipping `{}`", command);
        let _ = self
            .output
            .indent(&format!("would run: {} (in {})", command, command.cwd.display()));
        Ok(CommandOutput::success_with(""))
    }
}
