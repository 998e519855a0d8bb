//! Release command execution module.
//!
//! Resolves the configuration from the arguments, picks the command runner
//! (real or dry-run) and drives the release phases.

mod r#impl;

pub use r#impl::{ReleasePhaseContext, perform_release};

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use crate::process::{DryRunRunner, SystemRunner};

/// Execute release command
pub(super) async fn execute_release(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let settings = args.release_config();
    log::debug!("Release settings: {:?}", settings);

    let result = if settings.dry_run {
        let runner = DryRunRunner::new(config.output().clone());
        perform_release(&settings, &args.target_version, config, &runner).await?
    } else {
        let runner = SystemRunner::new().with_stdout_to_stderr(args.json);
        perform_release(&settings, &args.target_version, config, &runner).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(0)
}
