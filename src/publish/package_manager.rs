//! pnpm-compatible package manager invocations.

use super::{PublishOutcome, classify_publish_output};
use crate::error::Result;
use crate::process::{CommandRunner, ToolCommand};
use crate::workspace::WorkspacePackage;
use std::path::Path;

/// Package manager bound to a command runner
#[derive(Debug)]
pub struct PackageManager<'a, R> {
    runner: &'a R,
    program: &'a str,
    changelog_script: &'a str,
}

impl<'a, R: CommandRunner> PackageManager<'a, R> {
    /// Create a package manager running `program` through `runner`
    pub fn new(runner: &'a R, program: &'a str, changelog_script: &'a str) -> Self {
        Self {
            runner,
            program,
            changelog_script,
        }
    }

    /// `<pm> install`: refresh the lockfile
    pub async fn install(&self, root: &Path) -> Result<()> {
        let command = ToolCommand::new(self.program, root).arg("install");
        self.runner.run(&command).await?.ensure_success(&command)?;
        Ok(())
    }

    /// `<pm> <changelog script>`: regenerate changelog files
    pub async fn generate_changelog(&self, root: &Path) -> Result<()> {
        let command = ToolCommand::new(self.program, root).arg(self.changelog_script);
        self.runner.run(&command).await?.ensure_success(&command)?;
        Ok(())
    }

    /// `<pm> publish --publish-branch <branch>` from the package directory.
    ///
    /// Output is captured so a version conflict can be told apart from a real
    /// failure. Only a failure to start the tool is returned as `Err`.
    pub async fn publish(
        &self,
        package: &WorkspacePackage,
        publish_branch: &str,
    ) -> Result<PublishOutcome> {
        let command = ToolCommand::new(self.program, &package.path)
            .args(["publish", "--publish-branch", publish_branch])
            .captured();
        let output = self.runner.run(&command).await?;
        let outcome = classify_publish_output(&output);
        log::debug!("Publish of {} classified as {:?}", package.name, outcome);
        Ok(outcome)
    }
}
