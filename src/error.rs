//! Error types for kitdocs_release operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kitdocs_release operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all kitdocs_release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Workspace enumeration errors
    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    /// Manifest read/parse/write errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Target version errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// External tool errors (package manager, git)
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Publishing errors
    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Workspace-specific errors
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// The packages directory is missing or cannot be listed
    #[error("Cannot read packages directory {path}: {source}")]
    PackagesDirUnreadable {
        /// Directory that was listed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Manifest (package.json) errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file missing or unreadable
    #[error("Cannot read manifest {path}: {source}")]
    Missing {
        /// Path where package.json was expected
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not a JSON object
    #[error("Malformed manifest {path}: {reason}")]
    Malformed {
        /// Path to package.json
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Rewriting the manifest failed
    #[error("Failed to write manifest {path}: {source}")]
    WriteFailed {
        /// Path to package.json
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Target version errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// No version given, or only whitespace
    #[error("Target version must not be empty")]
    Empty,

    /// Strict mode rejected the version
    #[error("Invalid version '{version}': {source}")]
    InvalidSemver {
        /// Version string
        version: String,
        /// Parsing error
        #[source]
        source: semver::Error,
    },
}

/// External process errors
#[derive(Error, Debug)]
pub enum ToolError {
    /// Program not found on PATH
    #[error("'{program}' not found on PATH: {reason}")]
    NotFound {
        /// Program name
        program: String,
        /// Reason reported by the lookup
        reason: String,
    },

    /// Program could not be started
    #[error("Failed to start '{command}': {source}")]
    SpawnFailed {
        /// Rendered command line
        command: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Program exited unsuccessfully
    #[error("'{command}' exited with {}{}", exit_label(.code), stderr_suffix(.stderr))]
    NonZeroExit {
        /// Rendered command line
        command: String,
        /// Exit code (None when terminated by a signal)
        code: Option<i32>,
        /// Captured error output (empty when stdio was inherited)
        stderr: String,
    },
}

/// Publishing errors
#[derive(Error, Debug)]
pub enum PublishError {
    /// Registry rejected the package for a reason other than a version conflict
    #[error("Publishing '{package}' failed: {reason}")]
    Rejected {
        /// Package name
        package: String,
        /// Reason for the error
        reason: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Workspace(WorkspaceError::PackagesDirUnreadable { path, .. }) => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Use --root or --packages-dir to point at the workspace".to_string(),
            ],
            ReleaseError::Manifest(ManifestError::Malformed { path, .. }) => vec![
                format!("Fix the JSON in {}", path.display()),
                "Manifests updated before this one already carry the new version".to_string(),
            ],
            ReleaseError::Tool(ToolError::NotFound { program, .. }) => vec![
                format!("Install '{program}' or add it to PATH"),
            ],
            ReleaseError::Publish(PublishError::Rejected { .. }) => vec![
                "Check registry authentication (npm whoami)".to_string(),
                "Re-run with the same version: already published packages are skipped".to_string(),
                "No tag was created; tag and push manually if you abandon the release".to_string(),
            ],
            ReleaseError::Version(VersionError::InvalidSemver { .. }) => vec![
                "Use MAJOR.MINOR.PATCH, e.g. 1.4.0, or drop --strict-semver".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero_exit_message_includes_stderr() {
        let err = ToolError::NonZeroExit {
            command: "pnpm publish".to_string(),
            code: Some(1),
            stderr: "  E401 Unauthorized\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'pnpm publish' exited with status 1: E401 Unauthorized"
        );
    }

    #[test]
    fn test_non_zero_exit_message_without_stderr() {
        let err = ToolError::NonZeroExit {
            command: "git push".to_string(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "'git push' exited with a signal");
    }

    #[test]
    fn test_publish_rejection_suggests_rerun() {
        let err: ReleaseError = PublishError::Rejected {
            package: "alpha".to_string(),
            reason: "E401".to_string(),
        }
        .into();
        let suggestions = err.recovery_suggestions();
        assert!(suggestions.iter().any(|s| s.contains("Re-run")));
    }
}
