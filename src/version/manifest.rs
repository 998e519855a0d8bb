//! In-place `version` rewrite for package.json manifests.

use crate::error::{ManifestError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// What happened (or would happen) to one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestUpdate {
    /// Manifest path
    pub path: PathBuf,
    /// Version before the update, if the field was present and a string
    pub previous: Option<String>,
    /// Version after the update
    pub version: String,
    /// Whether the file was written
    pub written: bool,
}

impl ManifestUpdate {
    /// Whether the version field actually changes
    pub fn changes_version(&self) -> bool {
        self.previous.as_deref() != Some(self.version.as_str())
    }
}

/// Set the `version` field of the manifest at `path`.
///
/// Every other field keeps its value and position. The file is re-serialized
/// with 2-space indentation and a trailing newline. When `write` is false the
/// manifest is only parsed and the planned update returned.
pub fn update_manifest_version(path: &Path, version: &str, write: bool) -> Result<ManifestUpdate> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|e| ManifestError::Malformed {
            path: path.to_path_buf(),
            reason: format!("Failed to parse JSON: {}", e),
        })?;

    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| ManifestError::Malformed {
            path: path.to_path_buf(),
            reason: "top-level value is not an object".to_string(),
        })?;

    let previous = fields
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string);
    fields.insert("version".to_string(), Value::String(version.to_string()));

    if write {
        let mut updated = serde_json::to_string_pretty(&manifest)?;
        updated.push('\n');
        std::fs::write(path, updated).map_err(|source| ManifestError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Updated {} version {} -> {}",
            path.display(),
            previous.as_deref().unwrap_or("<none>"),
            version
        );
    }

    Ok(ManifestUpdate {
        path: path.to_path_buf(),
        previous,
        version: version.to_string(),
        written: write,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{"name":"@kitdocs/core","version":"1.3.2","private":false,"scripts":{"build":"vite build"},"files":["dist"]}"#;

    #[test]
    fn test_update_preserves_fields_and_order() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("package.json");
        fs::write(&path, MANIFEST).unwrap();

        let update = update_manifest_version(&path, "1.4.0", true).unwrap();

        assert_eq!(update.previous.as_deref(), Some("1.3.2"));
        assert!(update.changes_version());
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"name\": \"@kitdocs/core\",\n  \"version\": \"1.4.0\",\n  \"private\": false,\n  \"scripts\": {\n    \"build\": \"vite build\"\n  },\n  \"files\": [\n    \"dist\"\n  ]\n}\n"
        );
    }

    #[test]
    fn test_missing_version_field_is_added() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("package.json");
        fs::write(&path, r#"{"name":"root"}"#).unwrap();

        let update = update_manifest_version(&path, "0.1.0", true).unwrap();

        assert_eq!(update.previous, None);
        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["version"], "0.1.0");
    }

    #[test]
    fn test_numbers_keep_their_written_form() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("package.json");
        fs::write(
            &path,
            "{\n  \"version\": \"1.0.0\",\n  \"ratio\": 1.0,\n  \"limit\": 1e3,\n  \"id\": 12345678901234567890123\n}\n",
        )
        .unwrap();

        update_manifest_version(&path, "1.1.0", true).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"version\": \"1.1.0\",\n  \"ratio\": 1.0,\n  \"limit\": 1e3,\n  \"id\": 12345678901234567890123\n}\n"
        );
    }

    #[test]
    fn test_plan_only_leaves_file_untouched() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("package.json");
        fs::write(&path, MANIFEST).unwrap();

        let update = update_manifest_version(&path, "1.3.2", false).unwrap();

        assert!(!update.written);
        assert!(!update.changes_version());
        assert_eq!(fs::read_to_string(&path).unwrap(), MANIFEST);
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let err = update_manifest_version(&temp.path().join("package.json"), "1.0.0", true)
            .unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::Manifest(ManifestError::Missing { .. })
        ));
    }

    #[test]
    fn test_malformed_manifests() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("package.json");

        for content in ["{ not json", "[1, 2, 3]"] {
            fs::write(&path, content).unwrap();
            let err = update_manifest_version(&path, "1.0.0", true).unwrap_err();
            assert!(
                matches!(err, ReleaseError::Manifest(ManifestError::Malformed { .. })),
                "unexpected error for {content:?}: {err:?}"
            );
            assert_eq!(fs::read_to_string(&path).unwrap(), content);
        }
    }
}
