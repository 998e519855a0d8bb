//! Package-manager operations for workspace releases.
//!
//! This module wraps lockfile regeneration, changelog generation and
//! per-package publishing. Publish results are mapped to a typed
//! [`PublishOutcome`] in one place so the rest of the release never looks at
//! tool output text.

mod outcome;
mod package_manager;

pub use outcome::{PublishOutcome, classify_publish_output};
pub use package_manager::PackageManager;
