//! Git operations for release workflows.
//!
//! Releases drive the system `git` binary through the shared command runner:
//! change detection, committer identity, the release commit, the version tag
//! and the final pushes.

mod operations;

pub use operations::{GitCli, GitIdentity};
