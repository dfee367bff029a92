//! Engine settings
//!
//! Settings are read from `.template-sync/config.toml` in the project root.
//! Every key is optional; missing keys take their defaults:
//!
//! ```toml
//! context_lines = 3
//! marker_line_threshold = 100
//! artifacts_dir = ".template-sync/conflicts"
//! custom_file_extension = "md"
//! ```

mod settings;

pub use settings::SyncSettings;
