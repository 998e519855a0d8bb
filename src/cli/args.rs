//! Command line argument parsing and validation.
//!
//! Every setting has a flag, most have an environment variable, and anything
//! left unset falls back to [`ReleaseConfig::default`].

use crate::{GitIdentity, ReleaseConfig};
use clap::Parser;
use std::path::PathBuf;

/// Release every package of a workspace at one version
#[derive(Parser, Debug, Clone)]
#[command(
    name = "kitdocs_release",
    version,
    about = "Release every package of a pnpm workspace at one version",
    long_about = "Bump versions, regenerate the lockfile and changelog, commit, publish each package, tag and push.

Usage:
  kitdocs_release 1.4.0
  kitdocs_release 1.4.0 --dry-run
  kitdocs_release 2.0.0 --publish-branch main --remote upstream

Re-running with the same version is safe: packages already on the registry are skipped."
)]
pub struct Args {
    /// Version to release, used verbatim in manifests, the commit message and the tag
    #[arg(index = 1, value_name = "VERSION")]
    pub target_version: String,

    /// Workspace root containing the root package.json
    #[arg(long, value_name = "DIR", env = "KITDOCS_RELEASE_ROOT")]
    pub root: Option<PathBuf>,

    /// Directory under the root whose entries are packages
    #[arg(long, value_name = "DIR", env = "KITDOCS_RELEASE_PACKAGES_DIR")]
    pub packages_dir: Option<String>,

    /// Package manager binary
    #[arg(long, value_name = "BIN", env = "KITDOCS_RELEASE_PACKAGE_MANAGER")]
    pub package_manager: Option<String>,

    /// Package script that regenerates the changelog
    #[arg(long, value_name = "NAME", env = "KITDOCS_RELEASE_CHANGELOG_SCRIPT")]
    pub changelog_script: Option<String>,

    /// Branch passed to `publish --publish-branch`
    #[arg(long, value_name = "BRANCH", env = "KITDOCS_RELEASE_PUBLISH_BRANCH")]
    pub publish_branch: Option<String>,

    /// Git remote receiving the release tag
    #[arg(long, value_name = "NAME", env = "KITDOCS_RELEASE_REMOTE")]
    pub remote: Option<String>,

    /// Committer name for the release commit
    #[arg(long, value_name = "NAME", env = "KITDOCS_RELEASE_GIT_USER_NAME")]
    pub git_user_name: Option<String>,

    /// Committer email for the release commit
    #[arg(long, value_name = "EMAIL", env = "KITDOCS_RELEASE_GIT_USER_EMAIL")]
    pub git_user_email: Option<String>,

    /// Reject versions that are not valid semver
    #[arg(long)]
    pub strict_semver: bool,

    /// Show what would happen without writing files or running tools
    #[arg(long)]
    pub dry_run: bool,

    /// Print the release summary as JSON on stdout (implies --quiet)
    #[arg(long)]
    pub json: bool,

    /// Show detail lines such as the discovered packages
    #[arg(long, short)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        let named = [
            ("--packages-dir", &self.packages_dir),
            ("--package-manager", &self.package_manager),
            ("--changelog-script", &self.changelog_script),
            ("--publish-branch", &self.publish_branch),
            ("--remote", &self.remote),
            ("--git-user-name", &self.git_user_name),
            ("--git-user-email", &self.git_user_email),
        ];
        for (flag, value) in named {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(format!("{flag} must not be empty"));
            }
        }

        if let Some(dir) = &self.packages_dir
            && std::path::Path::new(dir).is_absolute()
        {
            return Err("--packages-dir must be relative to the workspace root".to_string());
        }

        Ok(())
    }

    /// Resolve the release configuration, filling gaps from the defaults
    pub fn release_config(&self) -> ReleaseConfig {
        let defaults = ReleaseConfig::default();
        ReleaseConfig {
            root: self.root.clone().unwrap_or(defaults.root),
            packages_dir: self.packages_dir.clone().unwrap_or(defaults.packages_dir),
            package_manager: self
                .package_manager
                .clone()
                .unwrap_or(defaults.package_manager),
            changelog_script: self
                .changelog_script
                .clone()
                .unwrap_or(defaults.changelog_script),
            publish_branch: self
                .publish_branch
                .clone()
                .unwrap_or(defaults.publish_branch),
            remote: self.remote.clone().unwrap_or(defaults.remote),
            identity: GitIdentity {
                name: self
                    .git_user_name
                    .clone()
                    .unwrap_or(defaults.identity.name),
                email: self
                    .git_user_email
                    .clone()
                    .unwrap_or(defaults.identity.email),
            },
            strict_semver: self.strict_semver,
            dry_run: self.dry_run,
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            output: super::OutputManager::new(verbose, quiet),
        }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(args.verbose, args.quiet || args.json)
    }
}

impl RuntimeConfig {
    /// Print a step header
    pub fn step(&self, message: &str) {
        let _ = self.output.section(message);
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print informational message
    pub fn info_println(&self, message: &str) {
        let _ = self.output.info(message);
    }

    /// Print verbose message
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }

    /// Check if progress output is suppressed
    pub fn is_quiet(&self) -> bool {
        self.output.is_quiet()
    }

    /// Check if detail lines are shown
    pub fn is_verbose(&self) -> bool {
        self.output.is_verbose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_unset_flags() {
        let args = Args::try_parse_from(["kitdocs_release", "1.4.0"]).unwrap();
        let config = args.release_config();

        assert_eq!(args.target_version, "1.4.0");
        assert_eq!(config.publish_branch, "standalone");
        assert_eq!(config.remote, "origin");
        assert_eq!(config.package_manager, "pnpm");
        assert_eq!(config.identity, GitIdentity::default());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "kitdocs_release",
            "2.0.0",
            "--publish-branch",
            "main",
            "--remote",
            "upstream",
            "--git-user-name",
            "release-bot",
            "--dry-run",
        ])
        .unwrap();
        let config = args.release_config();

        assert_eq!(config.publish_branch, "main");
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.identity.name, "release-bot");
        assert_eq!(
            config.identity.email,
            GitIdentity::default().email
        );
        assert!(config.dry_run);
    }

    #[test]
    fn test_version_is_required() {
        assert!(Args::try_parse_from(["kitdocs_release"]).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_and_absolute_values() {
        let args = Args::try_parse_from(["kitdocs_release", "1.0.0", "--remote", ""]).unwrap();
        assert_eq!(args.validate().unwrap_err(), "--remote must not be empty");

        let args =
            Args::try_parse_from(["kitdocs_release", "1.0.0", "--packages-dir", "/abs"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_json_implies_quiet() {
        let args = Args::try_parse_from(["kitdocs_release", "1.0.0", "--json"]).unwrap();
        assert!(RuntimeConfig::from(&args).is_quiet());
    }

    #[test]
    fn test_verbose_flag_reaches_output() {
        let args = Args::try_parse_from(["kitdocs_release", "1.0.0", "-v"]).unwrap();
        assert!(RuntimeConfig::from(&args).is_verbose());

        let args = Args::try_parse_from(["kitdocs_release", "1.0.0"]).unwrap();
        assert!(!RuntimeConfig::from(&args).is_verbose());

        let args = Args::try_parse_from(["kitdocs_release", "1.0.0", "--verbose", "--json"]).unwrap();
        assert!(!RuntimeConfig::from(&args).is_verbose());
    }
}
