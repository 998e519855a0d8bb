//! Main release implementation.
//!
//! Runs the release phases strictly in order and stops at the first fatal
//! error. The only failure that does not stop the run is publishing a version
//! the registry already has.

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::process::CommandRunner;
use crate::{ReleaseConfig, ReleaseResult, version};

use super::context::ReleasePhaseContext;
use super::phases;

/// Release every workspace package at `raw_version`.
///
/// Manifests are updated before the lockfile and changelog are regenerated
/// and before anything is published; the tag is created only after every
/// package was published or skipped.
pub async fn perform_release<R: CommandRunner>(
    settings: &ReleaseConfig,
    raw_version: &str,
    config: &RuntimeConfig,
    runner: &R,
) -> Result<ReleaseResult> {
    let version = version::parse_target_version(raw_version, settings.strict_semver)?;

    let ctx = ReleasePhaseContext {
        settings,
        version: &version,
        config,
        runner,
    };

    if settings.dry_run {
        config.info_println(&format!("Dry run for v{version}: nothing will be written or pushed"));
    }

    let workspace = phases::enumerate_packages(&ctx)?;

    config.step(&format!("Updating versions to {version}..."));
    let updates = phases::update_versions(&ctx, &workspace)?;
    log::info!("Updated {} manifest(s) to {}", updates.len(), version);

    phases::regenerate_lockfile(&ctx).await?;
    phases::regenerate_changelog(&ctx).await?;

    let mut result = ReleaseResult {
        version: version.clone(),
        packages: workspace.package_names(),
        dry_run: settings.dry_run,
        ..ReleaseResult::default()
    };

    result.committed = phases::commit_release(&ctx).await?;
    phases::publish_packages(&ctx, &workspace, &mut result).await?;
    result.git_tag = Some(phases::tag_and_push(&ctx).await?);

    config.success_println(&format!("Release v{version} complete"));
    config.indent(&format!("Published: {}", result.published_packages.len()));
    if !result.skipped_packages.is_empty() {
        config.indent(&format!(
            "Already published: {}",
            result.skipped_packages.join(", ")
        ));
    }

    Ok(result)
}
