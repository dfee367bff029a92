//! Conflict presentation and the artifacts it leaves behind
//!
//! Small conflicts are written into the file as diff3 markers. Large ones get
//! a Markdown review document in the artifacts directory and the file is left
//! as the user's version. The documents live for one run and are removed by
//! [`ArtifactJanitor`].

mod artifacts;
mod janitor;
mod presenter;

pub use artifacts::ConflictArtifacts;
pub use janitor::{ArtifactJanitor, CleanupOutcome};
pub use presenter::{ConflictInput, ConflictPresenter, Resolution, ResolutionKind};
