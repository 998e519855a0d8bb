//! Workspace package discovery.
//!
//! This module lists the sub-packages of a pnpm-style workspace so the
//! release phases can update, publish and report on each one.

mod discovery;

pub use discovery::{MANIFEST_FILE, Workspace, WorkspacePackage};
