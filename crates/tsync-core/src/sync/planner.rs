//! Batch classification of a project

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tsync_fs::{Fingerprint, NormalizedPath, fingerprint_file_if_exists, fingerprint_str};

use super::classifier::FileStateClassifier;
use super::state::{CustomizedOverride, FileAction, FileHashes, FileState, TrackedFileRecord};

/// A file that could not be classified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanIssue {
    pub path: String,
    pub message: String,
}

/// Classification of every tracked and newly discovered file in one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Tracked files in manifest order, then new upstream files by path
    pub states: Vec<FileState>,
    /// Files skipped because they could not be fingerprinted
    pub issues: Vec<PlanIssue>,
}

impl PlanReport {
    pub fn conflicts(&self) -> impl Iterator<Item = &FileState> {
        self.states.iter().filter(|s| s.is_conflict)
    }

    pub fn count(&self, action: FileAction) -> usize {
        self.states.iter().filter(|s| s.action == action).count()
    }

    /// Number of files per action. Actions with no files are left out.
    pub fn summary(&self) -> BTreeMap<FileAction, usize> {
        let mut summary = BTreeMap::new();
        for state in &self.states {
            *summary.entry(state.action).or_insert(0) += 1;
        }
        summary
    }

    /// True when there is nothing to do and nothing went wrong.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.states.iter().all(|s| s.action == FileAction::Skip)
    }

    pub fn get(&self, path: &str) -> Option<&FileState> {
        self.states.iter().find(|s| s.path == path)
    }
}

/// Classifies a project's tracked files against upstream content.
#[derive(Debug, Clone)]
pub struct SyncPlanner {
    root: NormalizedPath,
    classifier: FileStateClassifier,
}

impl SyncPlanner {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            classifier: FileStateClassifier::new(),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Classify every record, then every upstream path no record tracks.
    ///
    /// `upstream` maps relative paths to already downloaded content. A file
    /// that cannot be fingerprinted becomes a [`PlanIssue`]; the rest of the
    /// run continues.
    pub fn plan(
        &self,
        records: &[TrackedFileRecord],
        upstream: &BTreeMap<String, String>,
    ) -> PlanReport {
        let mut report = PlanReport::default();
        let mut tracked = HashSet::with_capacity(records.len());

        for record in records {
            tracked.insert(record.path.as_str());
            self.plan_one(
                &mut report,
                &record.path,
                record.baseline_hash.clone(),
                upstream.get(&record.path),
                record.is_official,
                record.customized_override,
            );
        }

        for (path, content) in upstream {
            if tracked.contains(path.as_str()) {
                continue;
            }
            debug!(path = %path, "discovered new upstream file");
            self.plan_one(
                &mut report,
                path,
                None,
                Some(content),
                true,
                CustomizedOverride::Unset,
            );
        }

        debug!(
            files = report.states.len(),
            issues = report.issues.len(),
            conflicts = report.conflicts().count(),
            "planned sync"
        );
        report
    }

    fn plan_one(
        &self,
        report: &mut PlanReport,
        path: &str,
        baseline: Option<Fingerprint>,
        upstream: Option<&String>,
        is_official: bool,
        customized_override: CustomizedOverride,
    ) {
        let local = self.root.join(path);
        let current = match fingerprint_file_if_exists(&local.to_native()) {
            Ok(current) => current,
            Err(e) => {
                warn!(path = %path, error = %e, "cannot fingerprint file, skipping");
                report.issues.push(PlanIssue {
                    path: path.to_string(),
                    message: e.to_string(),
                });
                return;
            }
        };

        let hashes = FileHashes {
            current,
            baseline,
            upstream: upstream.map(|content| fingerprint_str(content)),
        };
        report.states.push(
            self.classifier
                .classify(path, &hashes, is_official, customized_override),
        );
    }
}
