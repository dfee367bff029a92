//! Filesystem layer for template sync
//!
//! Provides normalized content fingerprints, safe I/O, format-agnostic
//! config loading, and discovery of user-added files in tracked directories.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod scan;

pub use checksum::{
    Fingerprint, fingerprint, fingerprint_file, fingerprint_file_if_exists, fingerprint_str,
};
pub use config::ConfigStore;
pub use constants::SyncPath;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
pub use scan::CustomFileScanner;
