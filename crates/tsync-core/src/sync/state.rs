//! Value types for file classification

use std::fmt;

use serde::{Deserialize, Serialize};
use tsync_fs::Fingerprint;

/// What the orchestrator should do with a tracked file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    /// New upstream file, copy it in
    Add,
    /// Gone upstream and untouched locally, delete it
    Remove,
    /// Changed upstream and untouched locally, overwrite it
    Update,
    /// Customized locally, keep the local copy
    Preserve,
    /// Customized locally and changed upstream
    Merge,
    /// Nothing to do
    Skip,
}

impl FileAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Update => "update",
            Self::Preserve => "preserve",
            Self::Merge => "merge",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Out-of-band declaration of whether a file belongs to the user.
///
/// When set it wins over the hash comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomizedOverride {
    #[default]
    Unset,
    Customized,
    NotCustomized,
}

impl CustomizedOverride {
    pub fn as_option(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Customized => Some(true),
            Self::NotCustomized => Some(false),
        }
    }
}

impl From<Option<bool>> for CustomizedOverride {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Unset,
            Some(true) => Self::Customized,
            Some(false) => Self::NotCustomized,
        }
    }
}

/// A file the manifest tracks. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedFileRecord {
    /// Path relative to the project root, `/` separated
    pub path: String,
    /// Fingerprint recorded when the file last matched upstream
    pub baseline_hash: Option<Fingerprint>,
    /// Whether the template ships this file
    pub is_official: bool,
    #[serde(default)]
    pub customized_override: CustomizedOverride,
}

impl TrackedFileRecord {
    pub fn new(path: impl Into<String>, baseline_hash: Option<Fingerprint>) -> Self {
        Self {
            path: path.into(),
            baseline_hash,
            is_official: true,
            customized_override: CustomizedOverride::Unset,
        }
    }

    pub fn with_override(mut self, customized_override: CustomizedOverride) -> Self {
        self.customized_override = customized_override;
        self
    }

    pub fn unofficial(mut self) -> Self {
        self.is_official = false;
        self
    }
}

/// The three fingerprints a classification looks at. `None` means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHashes {
    pub current: Option<Fingerprint>,
    pub baseline: Option<Fingerprint>,
    pub upstream: Option<Fingerprint>,
}

/// Result of classifying one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileState {
    pub path: String,
    pub current_hash: Option<Fingerprint>,
    pub baseline_hash: Option<Fingerprint>,
    pub upstream_hash: Option<Fingerprint>,
    pub is_customized: bool,
    pub has_upstream_changes: bool,
    pub is_conflict: bool,
    pub is_official: bool,
    pub action: FileAction,
}

impl FileState {
    pub fn exists_locally(&self) -> bool {
        self.current_hash.is_some()
    }

    pub fn exists_upstream(&self) -> bool {
        self.upstream_hash.is_some()
    }
}
