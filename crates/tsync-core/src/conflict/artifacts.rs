//! Run-scoped registry of generated review documents

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tsync_fs::NormalizedPath;

use super::janitor::{ArtifactJanitor, CleanupOutcome};
use super::presenter::Resolution;

/// Maps each conflicted file to the review document written for it.
///
/// Owned by the caller for one run. Two files with the same basename share a
/// document name; the later one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictArtifacts {
    documents: BTreeMap<String, PathBuf>,
}

impl ConflictArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the document from `resolution`, if it produced one.
    pub fn record(&mut self, resolution: &Resolution) {
        if let Some(document) = resolution.document() {
            self.documents
                .insert(resolution.path.clone(), document.to_native());
        }
    }

    pub fn document_for(&self, path: &str) -> Option<&Path> {
        self.documents.get(path).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.documents
            .iter()
            .map(|(path, document)| (path.as_str(), document.as_path()))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Delete the artifacts directory and forget its documents.
    ///
    /// The mapping is kept when deletion fails so the caller can still point
    /// the user at the documents.
    pub fn cleanup(
        &mut self,
        janitor: &ArtifactJanitor,
        root: &NormalizedPath,
        artifacts_dir: &str,
    ) -> CleanupOutcome {
        let outcome = janitor.cleanup(root, artifacts_dir);
        if outcome != CleanupOutcome::Failed {
            self.documents.clear();
        }
        outcome
    }
}
