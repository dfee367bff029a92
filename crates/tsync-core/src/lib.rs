//! Decision engine for template sync
//!
//! For every tracked file, decides whether it is unmodified, customized by
//! the user, changed upstream, or both, and presents conflicts for review
//! instead of merging them blindly.
//!
//! # Architecture
//!
//! ```text
//!              orchestrator (caller)
//!                        |
//!                   tsync-core
//!        sync (classify, plan)   conflict (present, clean up)
//!                        |
//!            +-----------+-----------+
//!            |                       |
//!        tsync-fs               tsync-content
//!  (fingerprints, scan, I/O)  (section diff, rendering)
//! ```
//!
//! Nothing here keeps state between calls. The caller owns the per-run
//! values ([`PlanReport`], [`ConflictArtifacts`]) and decides which files to
//! copy or delete.

pub mod config;
pub mod conflict;
pub mod error;
pub mod sync;

pub use config::SyncSettings;
pub use conflict::{
    ArtifactJanitor, CleanupOutcome, ConflictArtifacts, ConflictInput, ConflictPresenter,
    Resolution, ResolutionKind,
};
pub use error::{Error, Result};
pub use sync::{
    CustomizedOverride, FileAction, FileHashes, FileState, FileStateClassifier, PlanIssue,
    PlanReport, SyncPlanner, TrackedFileRecord,
};
