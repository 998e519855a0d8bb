//! Context structure for executing release phases with all required dependencies.

use crate::ReleaseConfig;
use crate::cli::RuntimeConfig;
use crate::git::GitCli;
use crate::process::CommandRunner;
use crate::publish::PackageManager;

/// Context for executing release phases with all required dependencies
pub struct ReleasePhaseContext<'a, R> {
    /// Release settings
    pub settings: &'a ReleaseConfig,
    /// Version being released
    pub version: &'a str,
    /// Runtime configuration for output
    pub config: &'a RuntimeConfig,
    /// Runner for every external command
    pub runner: &'a R,
}

impl<'a, R: CommandRunner> ReleasePhaseContext<'a, R> {
    /// Git bound to the workspace root
    pub fn git(&self) -> GitCli<'a, R> {
        GitCli::new(self.runner, &self.settings.root)
    }

    /// Package manager bound to the configured binary
    pub fn package_manager(&self) -> PackageManager<'a, R> {
        PackageManager::new(
            self.runner,
            &self.settings.package_manager,
            &self.settings.changelog_script,
        )
    }
}
