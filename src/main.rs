//! kitdocs_release - release every package of a pnpm workspace at one version.
//!
//! Bumps manifests, regenerates the lockfile and changelog, commits, publishes
//! each package, then tags and pushes.

use kitdocs_release::cli;
use kitdocs_release::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Create output manager for error display (never quiet for fatal errors)
            let output = OutputManager::new(false, false);
            output.error(&format!("Fatal error: {e}"));
            process::exit(1);
        }
    }
}
