//! The per-file sync decision
//!
//! | local | upstream | customized | upstream changed | action   |
//! |-------|----------|------------|------------------|----------|
//! | no    | no       |            |                  | skip     |
//! | no    | yes      |            |                  | add      |
//! | yes   | no       | no         |                  | remove   |
//! | yes   | no       | yes        |                  | preserve |
//! | yes   | yes      | no         | no               | skip     |
//! | yes   | yes      | no         | yes              | update   |
//! | yes   | yes      | yes        | no               | preserve |
//! | yes   | yes      | yes        | yes              | merge    |

use tracing::debug;

use super::state::{CustomizedOverride, FileAction, FileHashes, FileState};

/// Decides what happens to a file from its current, baseline and upstream
/// fingerprints. Pure: no I/O, no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStateClassifier;

impl FileStateClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(
        &self,
        path: &str,
        hashes: &FileHashes,
        is_official: bool,
        customized_override: CustomizedOverride,
    ) -> FileState {
        let exists_locally = hashes.current.is_some();
        let exists_upstream = hashes.upstream.is_some();
        let has_baseline = hashes.baseline.as_ref().is_some_and(|b| !b.is_empty());

        // A baseline recorded at tracking time can equal the current content
        // of a file the user already owns, so a declared override wins.
        let is_customized = match customized_override.as_option() {
            Some(declared) => declared,
            None if !has_baseline => false,
            None => hashes.current != hashes.baseline,
        };

        let has_upstream_changes = if has_baseline {
            hashes.upstream != hashes.baseline
        } else {
            hashes.current != hashes.upstream
        };

        let action = match (exists_locally, exists_upstream) {
            (false, false) => FileAction::Skip,
            (false, true) => FileAction::Add,
            (true, false) if is_customized => FileAction::Preserve,
            (true, false) => FileAction::Remove,
            (true, true) => match (is_customized, has_upstream_changes) {
                (false, false) => FileAction::Skip,
                (false, true) => FileAction::Update,
                (true, false) => FileAction::Preserve,
                (true, true) => FileAction::Merge,
            },
        };

        debug!(
            path,
            %action,
            is_customized,
            has_upstream_changes,
            has_baseline,
            "classified file"
        );

        FileState {
            path: path.to_string(),
            current_hash: hashes.current.clone(),
            baseline_hash: hashes.baseline.clone(),
            upstream_hash: hashes.upstream.clone(),
            is_customized,
            has_upstream_changes,
            is_conflict: action == FileAction::Merge,
            is_official,
            action,
        }
    }
}
