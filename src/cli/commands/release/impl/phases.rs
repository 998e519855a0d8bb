//! Release phase execution.
//!
//! Each phase runs to completion before the next starts. Phases after the
//! manifest update have external side effects and are never rolled back.

use crate::ReleaseResult;
use crate::error::{PublishError, Result};
use crate::process::CommandRunner;
use crate::publish::PublishOutcome;
use crate::version::{self, ManifestUpdate};
use crate::workspace::Workspace;

use super::context::ReleasePhaseContext;

/// Phase 1: list the workspace packages
pub fn enumerate_packages<R: CommandRunner>(ctx: &ReleasePhaseContext<'_, R>) -> Result<Workspace> {
    let workspace = Workspace::discover(&ctx.settings.root, &ctx.settings.packages_dir)?;
    ctx.config.verbose_println(&format!(
        "Found {} package(s): {}",
        workspace.packages.len(),
        workspace.package_names().join(", ")
    ));
    Ok(workspace)
}

/// Phase 2: set the version in the root manifest, then in every package manifest.
///
/// Stops at the first bad manifest; earlier manifests keep the new version.
pub fn update_versions<R: CommandRunner>(
    ctx: &ReleasePhaseContext<'_, R>,
    workspace: &Workspace,
) -> Result<Vec<ManifestUpdate>> {
    let write = !ctx.settings.dry_run;
    let manifests = std::iter::once(workspace.root_manifest_path())
        .chain(workspace.packages.iter().map(|p| p.manifest_path()));

    let mut updates = Vec::new();
    for path in manifests {
        let update = version::update_manifest_version(&path, ctx.version, write)?;
        if !write {
            ctx.config.indent(&format!(
                "would set {} version {} -> {}",
                path.display(),
                update.previous.as_deref().unwrap_or("<none>"),
                update.version
            ));
        }
        updates.push(update);
    }
    Ok(updates)
}

/// Phase 3: refresh the lockfile
pub async fn regenerate_lockfile<R: CommandRunner>(ctx: &ReleasePhaseContext<'_, R>) -> Result<()> {
    ctx.config.step("Updating lockfile...");
    ctx.package_manager().install(&ctx.settings.root).await
}

/// Phase 4: regenerate the changelog
pub async fn regenerate_changelog<R: CommandRunner>(
    ctx: &ReleasePhaseContext<'_, R>,
) -> Result<()> {
    ctx.config.step("Generating changelog...");
    ctx.package_manager()
        .generate_changelog(&ctx.settings.root)
        .await
}

/// Phase 5: commit if the working tree changed. Returns whether a commit was made.
pub async fn commit_release<R: CommandRunner>(ctx: &ReleasePhaseContext<'_, R>) -> Result<bool> {
    let git = ctx.git();
    if !git.has_changes().await? {
        log::info!("Working tree clean after version update, skipping commit");
        ctx.config.println("No changes to commit.");
        return Ok(false);
    }

    ctx.config.step("Committing changes...");
    git.configure_identity(&ctx.settings.identity).await?;
    git.commit_all(&version::release_commit_message(ctx.version))
        .await?;
    Ok(true)
}

/// Phase 6: publish every package in order.
///
/// Already-published versions are recorded as skipped; any other failure
/// aborts before the remaining packages are attempted.
pub async fn publish_packages<R: CommandRunner>(
    ctx: &ReleasePhaseContext<'_, R>,
    workspace: &Workspace,
    result: &mut ReleaseResult,
) -> Result<()> {
    let package_manager = ctx.package_manager();

    for package in &workspace.packages {
        ctx.config.step(&format!("Publishing {}...", package.name));

        match package_manager
            .publish(package, &ctx.settings.publish_branch)
            .await?
        {
            PublishOutcome::Published => {
                ctx.config.success_println(&format!(
                    "Successfully published {}@{}",
                    package.name, ctx.version
                ));
                result.published_packages.push(package.name.clone());
            }
            PublishOutcome::AlreadyPublished => {
                log::warn!("{}@{} already on the registry", package.name, ctx.version);
                ctx.config
                    .warning_println(&format!("Skipping already published: {}", package.name));
                result.skipped_packages.push(package.name.clone());
            }
            PublishOutcome::Failed { reason } => {
                return Err(PublishError::Rejected {
                    package: package.name.clone(),
                    reason,
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Phase 7: tag HEAD, push the tag, push the branch. Returns the tag name.
pub async fn tag_and_push<R: CommandRunner>(ctx: &ReleasePhaseContext<'_, R>) -> Result<String> {
    ctx.config.step("Pushing to remote...");

    let git = ctx.git();
    let tag = version::tag_name(ctx.version);
    git.create_tag(&tag).await?;
    git.push_tag(&ctx.settings.remote, &tag).await?;
    git.push_branch().await?;
    Ok(tag)
}
