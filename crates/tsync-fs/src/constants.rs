//! Well-known paths used by the sync engine inside a project.

use std::path::Path;

/// Standard template-sync filesystem locations, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPath {
    /// The `.template-sync` state directory
    StateDir,
    /// The `.template-sync/conflicts` directory holding review documents
    ConflictsDir,
    /// The `.template-sync/config.toml` settings file
    ConfigFile,
}

impl SyncPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StateDir => ".template-sync",
            Self::ConflictsDir => ".template-sync/conflicts",
            Self::ConfigFile => ".template-sync/config.toml",
        }
    }
}

impl AsRef<Path> for SyncPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for SyncPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for SyncPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
