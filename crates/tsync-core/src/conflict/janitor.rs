//! Best-effort removal of the artifacts directory

use std::fs;
use std::io::ErrorKind;

use tracing::{debug, info, warn};
use tsync_fs::{NormalizedPath, RobustnessConfig, SyncPath, io};

use crate::Error;

/// What a cleanup call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    Removed,
    NotPresent,
    /// Deletion failed or was refused. Already logged.
    Failed,
}

/// Deletes the conflict artifacts directory at the end of a run.
///
/// Never fails the caller: errors are logged as warnings and reported as
/// [`CleanupOutcome::Failed`]. Calling it again after success, or when the
/// directory never existed, is a no-op.
#[derive(Debug, Clone, Default)]
pub struct ArtifactJanitor {
    robustness: RobustnessConfig,
}

impl ArtifactJanitor {
    pub fn new(robustness: RobustnessConfig) -> Self {
        Self { robustness }
    }

    /// Remove `artifacts_dir` (relative to `root`) and everything in it.
    pub fn cleanup(&self, root: &NormalizedPath, artifacts_dir: &str) -> CleanupOutcome {
        let dir = root.join(artifacts_dir);

        let root_prefix = format!("{}/", root.as_str().trim_end_matches('/'));
        if !dir.as_str().starts_with(&root_prefix) {
            warn!(
                root = %root,
                artifacts_dir,
                "refusing to clean up a directory outside the project root"
            );
            return CleanupOutcome::Failed;
        }

        if !dir.exists() {
            debug!(dir = %dir, "no conflict artifacts to clean up");
            return CleanupOutcome::NotPresent;
        }

        let native = dir.to_native();
        let result = io::retry(self.robustness, || match fs::remove_dir_all(&native) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            other => other,
        });

        match result {
            Ok(()) => {
                info!(dir = %dir, "removed conflict artifacts");
                CleanupOutcome::Removed
            }
            Err(source) => {
                let error = Error::Cleanup {
                    path: native,
                    source,
                };
                warn!(error = %error, "conflict artifact cleanup failed, continuing");
                CleanupOutcome::Failed
            }
        }
    }

    /// Remove the default artifacts directory.
    pub fn cleanup_default(&self, root: &NormalizedPath) -> CleanupOutcome {
        self.cleanup(root, SyncPath::ConflictsDir.as_str())
    }
}
