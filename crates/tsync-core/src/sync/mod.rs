//! File classification for a sync run
//!
//! This module provides:
//! - **state**: The per-file records going in and coming out
//! - **classifier**: The pure decision from three fingerprints to one action
//! - **planner**: Batch classification of a project against upstream content

mod classifier;
mod planner;
mod state;

pub use classifier::FileStateClassifier;
pub use planner::{PlanIssue, PlanReport, SyncPlanner};
pub use state::{CustomizedOverride, FileAction, FileHashes, FileState, TrackedFileRecord};
