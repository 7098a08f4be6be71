//! Error types for the persistence layer.
//!
//! None of these are fatal. A failed load means "start with an empty
//! hotel"; a failed save is logged and the process exits normally.

use std::path::PathBuf;

/// Errors that can occur while saving or loading a snapshot.
///
/// The encode and decode variants wrap `serde_json::Error` directly and
/// only exist with the `json` feature, matching the codec that can
/// produce them. Callers usually don't match on the variant at all:
/// [`load_or_empty`](crate::load_or_empty) logs any of them and starts
/// fresh, and a failed save is logged by the task that ran it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    ///
    /// Carries the path so the log line says which file. A missing file
    /// on load is not an error; [`FileStore`](crate::FileStore) reports
    /// it as "no snapshot yet".
    #[error("snapshot I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the inventory failed.
    #[cfg(feature = "json")]
    #[error("snapshot encode failed: {0}")]
    Encode(serde_json::Error),

    /// The snapshot exists but isn't a valid inventory: malformed JSON,
    /// unknown room numbers, duplicate rooms, or guest counts that don't
    /// fit the category.
    #[cfg(feature = "json")]
    #[error("snapshot decode failed: {0}")]
    Decode(serde_json::Error),

    /// The background save task panicked or was cancelled.
    #[error("snapshot task failed: {0}")]
    TaskFailed(String),
}
