//! Discovery of user-added files in tracked directories
//!
//! A tracked directory (for example a folder of agent prompts) holds both
//! files shipped by the template and files the user created alongside them.
//! The scanner reports the latter so they are never mistaken for stale
//! template files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// Lists files with a given extension that the template does not ship.
#[derive(Debug, Clone)]
pub struct CustomFileScanner {
    extension: String,
}

impl Default for CustomFileScanner {
    fn default() -> Self {
        Self::new("md")
    }
}

impl CustomFileScanner {
    /// Create a scanner for files ending in `.<extension>`.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Return the names of files directly under `directory` whose extension
    /// matches and whose name is not in `official_names`, sorted by name.
    ///
    /// A missing directory yields an empty list. The extension matches
    /// ignoring ASCII case, so `Notes.MD` counts for `md`. Name comparison
    /// against `official_names` is exact; whether it is case sensitive
    /// depends on how the host filesystem reports names.
    pub fn scan(&self, directory: &Path, official_names: &HashSet<String>) -> Vec<String> {
        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(directory = %directory.display(), "tracked directory absent");
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    directory = %directory.display(),
                    error = %e,
                    "cannot list tracked directory"
                );
                return Vec::new();
            }
        };

        let mut custom = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(
                        directory = %directory.display(),
                        error = %e,
                        "skipping unreadable entry"
                    );
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let matches_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension));
            if !matches_extension {
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !official_names.contains(&name) {
                custom.push(name);
            }
        }

        custom.sort();
        debug!(directory = %directory.display(), count = custom.len(), "found custom files");
        custom
    }
}
