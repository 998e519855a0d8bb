//! Release implementation modules.
//!
//! This module contains the decomposed release implementation logic:
//! - `context`: Context structure for phase execution
//! - `phases`: The individual release steps
//! - `release`: Main release orchestration logic

mod context;
mod phases;
mod release;

pub use context::ReleasePhaseContext;
pub use release::perform_release;
