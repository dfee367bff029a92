//! Section diffing and conflict rendering for template sync
//!
//! Everything here is pure text processing: positional line comparison
//! grouped into context-padded sections, Git-style conflict markers, and
//! Markdown review documents for conflicts too large to inline.

pub mod diff;
pub mod error;
pub mod format;
pub mod markers;
pub mod review;

pub use diff::{
    ChangeType, ComparisonResult, DEFAULT_CONTEXT_LINES, DiffSection, LineRange, SectionDiffer,
};
pub use error::{Error, Result};
pub use format::{Format, language_hint};
pub use markers::{has_conflict_markers, render_markers};
pub use review::{REVIEW_SUFFIX, ReviewDocument};
