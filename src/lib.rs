//! # kitdocs_release
//!
//! Release management for pnpm-style JavaScript workspaces.
//!
//! One invocation releases every package under `packages/` at the same
//! version: manifests are bumped, the lockfile and changelog regenerated, the
//! result committed, each package published, and the release tagged and
//! pushed.
//!
//! ## Features
//!
//! - **Fail-fast sequencing**: every step waits for the previous one; any failure stops the run
//! - **Idempotent publishing**: versions the registry already has are skipped, so a failed
//!   release can simply be re-run with the same version
//! - **Explicit configuration**: committer identity, publish branch and remote are flags
//!   (or environment variables), not literals
//! - **Dry run**: print the plan without touching files, the registry or git
//!
//! ## Usage
//!
//! ```bash
//! kitdocs_release 1.4.0                    # Release all packages at 1.4.0
//! kitdocs_release 1.4.0 --dry-run          # Show what would happen
//! kitdocs_release 2.0.0 --strict-semver    # Reject non-semver versions
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod git;
pub mod process;
pub mod publish;
pub mod version;
pub mod workspace;

// Re-export main types for public API
pub use cli::Args;
pub use error::{ReleaseError, Result};
pub use git::{GitCli, GitIdentity};
pub use process::{CommandRunner, DryRunRunner, SystemRunner};
pub use publish::{PackageManager, PublishOutcome};
pub use workspace::{Workspace, WorkspacePackage};

use serde::Serialize;
use std::path::PathBuf;

/// Configuration for release operations
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Workspace root holding the root manifest
    pub root: PathBuf,
    /// Directory (relative to root) whose entries are the packages
    pub packages_dir: String,
    /// Package manager binary
    pub package_manager: String,
    /// Package script that regenerates the changelog
    pub changelog_script: String,
    /// Branch passed to `publish --publish-branch`
    pub publish_branch: String,
    /// Remote receiving the tag
    pub remote: String,
    /// Identity configured before the release commit
    pub identity: GitIdentity,
    /// Require the target version to be valid semver
    pub strict_semver: bool,
    /// Print planned actions instead of performing them
    pub dry_run: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            packages_dir: "packages".to_string(),
            package_manager: "pnpm".to_string(),
            changelog_script: "changelog".to_string(),
            publish_branch: "standalone".to_string(),
            remote: "origin".to_string(),
            identity: GitIdentity::default(),
            strict_semver: false,
            dry_run: false,
        }
    }
}

/// Result of a release operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseResult {
    /// Released version
    pub version: String,
    /// Packages found in the workspace, in publish order
    pub packages: Vec<String>,
    /// Packages the registry accepted in this run
    pub published_packages: Vec<String>,
    /// Packages skipped because the version was already on the registry
    pub skipped_packages: Vec<String>,
    /// Whether a release commit was created
    pub committed: bool,
    /// Tag created and pushed
    pub git_tag: Option<String>,
    /// Whether this was a dry run
    pub dry_run: bool,
}
