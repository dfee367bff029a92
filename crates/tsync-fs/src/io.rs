//! Atomic I/O operations with file locking and bounded retries

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;
use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Retry policy for filesystem operations that may transiently fail,
/// for example because another process briefly holds a file open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// Delay before the first retry
    pub initial_retry_interval: Duration,
    /// Total time budget for retries; zero means a single attempt
    pub max_retry_elapsed: Duration,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            initial_retry_interval: Duration::from_millis(25),
            max_retry_elapsed: Duration::from_secs(2),
        }
    }
}

impl RobustnessConfig {
    /// A policy that performs exactly one attempt.
    pub fn no_retry() -> Self {
        Self {
            initial_retry_interval: Duration::ZERO,
            max_retry_elapsed: Duration::ZERO,
        }
    }
}

/// Run `op`, retrying any error with exponential backoff until the
/// configured time budget is spent. The last error is returned.
pub fn retry<T, F>(config: RobustnessConfig, mut op: F) -> std::io::Result<T>
where
    F: FnMut() -> std::io::Result<T>,
{
    if config.max_retry_elapsed.is_zero() {
        return op();
    }

    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(config.initial_retry_interval)
        .with_max_elapsed_time(Some(config.max_retry_elapsed))
        .build();

    backoff::retry(policy, || {
        op().map_err(|e| {
            tracing::debug!(error = %e, "retrying filesystem operation");
            backoff::Error::transient(e)
        })
    })
    .map_err(|e| match e {
        backoff::Error::Permanent(err) => err,
        backoff::Error::Transient { err, .. } => err,
    })
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock on the temp file, retrying per `config`.
pub fn write_atomic(path: &NormalizedPath, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file in the same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    retry(config, || temp_file.try_lock_exclusive()).map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    drop(temp_file);

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes(), RobustnessConfig::default())
}
