//! Git commands used by a release, built on [`CommandRunner`].

use crate::error::Result;
use crate::process::{CommandOutput, CommandRunner, ToolCommand};
use std::path::Path;

/// Committer identity written to the repository config before committing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitIdentity {
    /// `user.name`
    pub name: String,
    /// `user.email`
    pub email: String,
}

impl Default for GitIdentity {
    fn default() -> Self {
        Self {
            name: "github-actions[bot]".to_string(),
            email: "41898282+github-actions[bot]@users.noreply.github.com".to_string(),
        }
    }
}

/// Git repository driven through the `git` binary
#[derive(Debug)]
pub struct GitCli<'a, R> {
    runner: &'a R,
    repo: &'a Path,
}

impl<'a, R: CommandRunner> GitCli<'a, R> {
    /// Operate on the repository containing `repo`
    pub fn new(runner: &'a R, repo: &'a Path) -> Self {
        Self { runner, repo }
    }

    fn command<I, S>(&self, args: I) -> ToolCommand
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ToolCommand::new("git", self.repo).args(args)
    }

    async fn run(&self, command: ToolCommand) -> Result<CommandOutput> {
        self.runner.run(&command).await?.ensure_success(&command)
    }

    /// Whether `git diff` reports anything
    pub async fn has_changes(&self) -> Result<bool> {
        let output = self.run(self.command(["diff"]).captured()).await?;
        Ok(!output.stdout.is_empty())
    }

    /// Set `user.name` and `user.email` in the repository config
    pub async fn configure_identity(&self, identity: &GitIdentity) -> Result<()> {
        self.run(self.command(["config", "user.name", identity.name.as_str()]))
            .await?;
        self.run(self.command(["config", "user.email", identity.email.as_str()]))
            .await?;
        Ok(())
    }

    /// Stage everything and commit with `message`
    pub async fn commit_all(&self, message: &str) -> Result<()> {
        self.run(self.command(["add", "-A"])).await?;
        self.run(self.command(["commit", "-m", message])).await?;
        Ok(())
    }

    /// Create a lightweight tag at HEAD
    pub async fn create_tag(&self, tag: &str) -> Result<()> {
        self.run(self.command(["tag", tag])).await?;
        Ok(())
    }

    /// Push a single tag to `remote`
    pub async fn push_tag(&self, remote: &str, tag: &str) -> Result<()> {
        let refspec = format!("refs/tags/{tag}");
        self.run(self.command(["push", remote, refspec.as_str()]))
            .await?;
        Ok(())
    }

    /// Push the current branch to its upstream
    pub async fn push_branch(&self) -> Result<()> {
        self.run(self.command(["push"])).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ReleaseError, ToolError};
    use crate::process::testing::RecordingRunner;
    use crate::process::StdioMode;

    #[tokio::test]
    async fn test_has_changes_reads_diff_output() {
        let runner = RecordingRunner::new().respond_to(
            "git diff",
            CommandOutput::success_with("diff --git a/package.json b/package.json\n"),
        );
        let git = GitCli::new(&runner, Path::new("."));

        assert!(git.has_changes().await.unwrap());
        assert_eq!(runner.calls()[0].stdio, StdioMode::Capture);
    }

    #[tokio::test]
    async fn test_clean_tree_has_no_changes() {
        let runner = RecordingRunner::new();
        let git = GitCli::new(&runner, Path::new("."));
        assert!(!git.has_changes().await.unwrap());
    }

    #[tokio::test]
    async fn test_commit_sequence() {
        let runner = RecordingRunner::new();
        let git = GitCli::new(&runner, Path::new("/repo"));

        git.configure_identity(&GitIdentity::default()).await.unwrap();
        git.commit_all("chore(release): v1.0.0").await.unwrap();

        assert_eq!(
            runner.lines(),
            vec![
                "git config user.name github-actions[bot]",
                "git config user.email 41898282+github-actions[bot]@users.noreply.github.com",
                "git add -A",
                r#"git commit -m "chore(release): v1.0.0""#,
            ]
        );
        assert!(runner.calls().iter().all(|c| c.cwd == Path::new("/repo")));
    }

    #[tokio::test]
    async fn test_push_tag_uses_full_refspec() {
        let runner = RecordingRunner::new();
        let git = GitCli::new(&runner, Path::new("."));

        git.push_tag("upstream", "v1.0.0").await.unwrap();

        assert_eq!(runner.lines(), vec!["git push upstream refs/tags/v1.0.0"]);
    }

    #[tokio::test]
    async fn test_failed_tag_stops() {
        let runner = RecordingRunner::new().respond_to(
            "git tag v1.0.0",
            CommandOutput::failure(128, "fatal: tag 'v1.0.0' already exists"),
        );
        let git = GitCli::new(&runner, Path::new("."));

        let err = git.create_tag("v1.0.0").await.unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::Tool(ToolError::NonZeroExit { code: Some(128), .. })
        ));
    }
}
