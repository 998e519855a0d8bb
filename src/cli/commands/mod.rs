//! Command execution coordinating the release operation.
//!
//! Validates arguments, runs the release, and turns any fatal error into an
//! error report on stderr plus a non-zero exit code.

mod release;

pub use release::{ReleasePhaseContext, perform_release};

use crate::cli::{Args, RuntimeConfig};
use crate::error::{CliError, ReleaseError, Result};

use release::execute_release;

/// Execute the release based on parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    // Validate arguments
    if let Err(validation_error) = args.validate() {
        // Create output for validation errors (never quiet)
        let error = ReleaseError::from(CliError::InvalidArguments {
            reason: validation_error,
        });
        let output = super::OutputManager::new(false, false);
        output.error(&error.to_string());
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);

    match execute_release(&args, &config).await {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            config.error_println(&format!("Release failed: {}", e));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                config.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    config.println(&format!("  • {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}
