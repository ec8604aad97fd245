//! Error types for the storage seam.

/// Errors that can occur against a persistent key-value store.
///
/// Callers in this workspace treat these as *degradation signals*, not
/// failures: a read error means "behave as if no data existed", a write
/// error is reported to the caller and logged, and nothing above this
/// layer ever panics on one.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading the value for a key failed (I/O level, not parse level —
    /// a malformed value is handled by the consumer that decodes it).
    #[error("failed to read key {key}: {source}")]
    Read {
        /// The key being read.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Persisting the value for a key failed (quota, permissions, disk).
    #[error("failed to write key {key}: {source}")]
    Write {
        /// The key being written.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Removing a key failed. Removing a key that does not exist is NOT
    /// an error — backends treat that as success.
    #[error("failed to remove key {key}: {source}")]
    Remove {
        /// The key being removed.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backend is unusable as a whole (e.g. its directory cannot be
    /// created). Also the variant custom backends and test doubles reach
    /// for when nothing finer fits.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}
