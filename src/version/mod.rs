//! Target version handling and manifest rewriting.
//!
//! The target version is passed through verbatim by default; strict mode
//! checks it against semantic versioning first. Manifests are rewritten in
//! place with only the `version` field changed.

mod manifest;

pub use manifest::{ManifestUpdate, update_manifest_version};

use crate::error::{Result, VersionError};

/// Accept a target version string.
///
/// The string is returned verbatim; only an empty or all-whitespace value is
/// rejected. With `strict`, the version must also parse as semver (no leading
/// `v`, no surrounding whitespace).
pub fn parse_target_version(raw: &str, strict: bool) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(VersionError::Empty.into());
    }

    if strict {
        semver::Version::parse(raw).map_err(|source| VersionError::InvalidSemver {
            version: raw.to_string(),
            source,
        })?;
    }

    Ok(raw.to_string())
}

/// Tag name for a release version
pub fn tag_name(version: &str) -> String {
    format!("v{version}")
}

/// Commit message for a release version
pub fn release_commit_message(version: &str) -> String {
    format!("chore(release): v{version}")
}
