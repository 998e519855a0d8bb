//! Package enumeration under the workspace packages directory.

use crate::error::{Result, WorkspaceError};
use std::path::{Path, PathBuf};

/// Manifest file name in the root and in every package
pub const MANIFEST_FILE: &str = "package.json";

/// A workspace root and its enumerated packages
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Workspace root (holds the root manifest and lockfile)
    pub root: PathBuf,
    /// Packages in enumeration order
    pub packages: Vec<WorkspacePackage>,
}

/// One sub-package directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePackage {
    /// Directory name, used as the package's display name
    pub name: String,
    /// Absolute or root-relative package directory
    pub path: PathBuf,
}

impl WorkspacePackage {
    /// Path of this package's manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(MANIFEST_FILE)
    }
}

impl Workspace {
    /// List `root/packages_dir`, skipping hidden entries.
    ///
    /// Names are sorted so repeated runs attempt packages in the same order.
    pub fn discover(root: &Path, packages_dir: &str) -> Result<Self> {
        let dir = root.join(packages_dir);
        let unreadable = |source| WorkspaceError::PackagesDirUnreadable {
            path: dir.clone(),
            source,
        };

        let mut packages = Vec::new();
        for entry in std::fs::read_dir(&dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                log::trace!("Skipping hidden entry {}", name);
                continue;
            }
            packages.push(WorkspacePackage {
                path: entry.path(),
                name,
            });
        }
        packages.sort_by(|a, b| a.name.cmp(&b.name));

        log::debug!(
            "Discovered {} package(s) in {}",
            packages.len(),
            dir.display()
        );

        Ok(Self {
            root: root.to_path_buf(),
            packages,
        })
    }

    /// Path of the root manifest
    pub fn root_manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Package names in enumeration order
    pub fn package_names(&self) -> Vec<String> {
        self.packages.iter().map(|p| p.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_skips_hidden_entries() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let packages = temp.path().join("packages");
        fs::create_dir_all(packages.join("kit-docs")).unwrap();
        fs::create_dir_all(packages.join("create-kit-docs")).unwrap();
        fs::create_dir_all(packages.join(".turbo")).unwrap();
        fs::write(packages.join(".DS_Store"), b"").unwrap();

        let workspace = Workspace::discover(temp.path(), "packages").unwrap();

        assert_eq!(workspace.package_names(), vec!["create-kit-docs", "kit-docs"]);
        assert_eq!(
            workspace.packages[1].manifest_path(),
            packages.join("kit-docs").join("package.json")
        );
    }

    #[test]
    fn test_discover_empty_packages_dir() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp.path().join("packages")).unwrap();

        let workspace = Workspace::discover(temp.path(), "packages").unwrap();
        assert!(workspace.packages.is_empty());
        assert_eq!(workspace.root_manifest_path(), temp.path().join("package.json"));
    }

    #[test]
    fn test_discover_missing_dir_is_filesystem_error() {
        let temp = TempDir::new().expect("Failed to create temp dir");

        let err = Workspace::discover(temp.path(), "packages").unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::Workspace(WorkspaceError::PackagesDirUnreadable { .. })
        ));
    }
}
