//! External process execution for release workflows.
//!
//! Every package-manager and git invocation goes through the [`CommandRunner`]
//! trait, so the release phases can run against the real system, a dry-run
//! printer, or an in-memory fake in tests.

mod command;
mod runner;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{CommandOutput, StdioMode, ToolCommand};
pub use runner::{CommandRunner, DryRunRunner, SystemRunner};
