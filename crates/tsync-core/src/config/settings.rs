//! `SyncSettings` loading and validation

use serde::{Deserialize, Serialize};
use tsync_content::{DEFAULT_CONTEXT_LINES, SectionDiffer};
use tsync_fs::{ConfigStore, CustomFileScanner, NormalizedPath, SyncPath};

use crate::{Error, Result};

/// Files with at most this many lines get inline conflict markers
pub const DEFAULT_MARKER_LINE_THRESHOLD: usize = 100;

/// Tunables for classification, conflict presentation and cleanup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Unchanged lines shown around each diff section
    pub context_lines: usize,
    /// Largest line count that still gets inline markers
    pub marker_line_threshold: usize,
    /// Review document directory, relative to the project root
    pub artifacts_dir: String,
    /// Extension (without dot) of files considered by the custom file scan
    pub custom_file_extension: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            marker_line_threshold: DEFAULT_MARKER_LINE_THRESHOLD,
            artifacts_dir: SyncPath::ConflictsDir.as_str().to_string(),
            custom_file_extension: "md".to_string(),
        }
    }
}

impl SyncSettings {
    /// Load settings for a project, falling back to defaults when the
    /// project has no settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if the
    /// loaded values fail [`SyncSettings::validate`].
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let path = root.join(SyncPath::ConfigFile.as_str());
        let settings = ConfigStore::new()
            .load_optional::<Self>(&path)?
            .unwrap_or_default();
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        let dir = self.artifacts_dir.replace('\\', "/");
        if dir.trim().is_empty() || dir.split('/').all(|c| c.is_empty() || c == ".") {
            return Err(Error::invalid_settings(
                "artifacts_dir must name a directory below the project root",
            ));
        }
        if dir.starts_with('/') || dir.contains(':') || dir.split('/').any(|c| c == "..") {
            return Err(Error::invalid_settings(format!(
                "artifacts_dir must stay inside the project root, got {}",
                self.artifacts_dir
            )));
        }

        let ext = &self.custom_file_extension;
        if ext.is_empty() || ext.contains(['.', '/', '\\']) {
            return Err(Error::invalid_settings(format!(
                "custom_file_extension must be a bare extension like \"md\", got {ext:?}"
            )));
        }

        Ok(())
    }

    pub fn differ(&self) -> SectionDiffer {
        SectionDiffer::new(self.context_lines)
    }

    pub fn scanner(&self) -> CustomFileScanner {
        CustomFileScanner::new(self.custom_file_extension.clone())
    }

    /// Absolute location of the artifacts directory for a project
    pub fn artifacts_path(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(&self.artifacts_dir)
    }
}
