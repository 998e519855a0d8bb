//! Mapping raw publish output to a typed outcome.

use crate::process::CommandOutput;

/// Marker the registry prints when the version already exists
const ALREADY_PUBLISHED_MARKER: &str = "previously published";

/// Outcome of publishing one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Registry accepted the package
    Published,
    /// The version is already on the registry; safe to skip
    AlreadyPublished,
    /// Any other failure
    Failed {
        /// Tool output explaining the failure
        reason: String,
    },
}

impl PublishOutcome {
    /// Whether the release may continue past this package
    pub fn is_tolerated(&self) -> bool {
        !matches!(self, PublishOutcome::Failed { .. })
    }
}

/// Classify a finished `publish` invocation.
///
/// A non-zero exit counts as [`PublishOutcome::AlreadyPublished`] only when
/// the registry's "previously published" marker appears in stderr or stdout;
/// some package managers relay registry errors on stdout. The failure reason
/// carries both streams for the same reason.
pub fn classify_publish_output(output: &CommandOutput) -> PublishOutcome {
    if output.success() {
        return PublishOutcome::Published;
    }

    if output.stderr.contains(ALREADY_PUBLISHED_MARKER)
        || output.stdout.contains(ALREADY_PUBLISHED_MARKER)
    {
        return PublishOutcome::AlreadyPublished;
    }

    let text = [output.stderr.trim(), output.stdout.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    let reason = match (text.is_empty(), output.code) {
        (true, Some(code)) => format!("publish exited with status {code}"),
        (true, None) => "publish terminated by a signal".to_string(),
        (false, _) => text,
    };
    PublishOutcome::Failed { reason }
}
