//! The [`KeyValueStore`] trait: the seam between Snaprally's local state
//! and whatever the device actually persists to.
//!
//! Snaprally doesn't own durable storage — the host platform does
//! (app-private files on mobile, a profile directory on desktop, an
//! in-memory map in tests). This trait is the contract the state crates
//! program against; swap the backend and nothing above notices.

use std::future::Future;

use crate::StoreError;

/// An asynchronous, durable, string-keyed store of JSON-encoded values.
///
/// # Contract
///
/// - `get` returns `Ok(None)` for a key that was never set (or was
///   removed) — absence is not an error.
/// - `set` replaces any existing value wholesale. Values are opaque
///   strings here; by convention every consumer in this workspace
///   stores a single JSON document per key.
/// - `remove` of a missing key succeeds. Removal must be durable for
///   the same reasons writes are.
/// - Operations on *different* keys are independent. Consumers perform
///   read-modify-write cycles on a single key and rely on the
///   application issuing those cycles from one logical thread — the
///   store itself does not provide transactions.
///
/// # Trait bounds
///
/// - `Send + Sync` → a store handle can be shared across async tasks.
/// - The returned futures are `Send` so callers can `tokio::spawn`
///   work that holds a store.
///
/// # Example
///
/// A backend for a host platform is a few lines:
///
/// ```rust
/// use snaprally_store::{KeyValueStore, StoreError};
///
/// /// Discards writes, returns nothing. Useful as a stand-in when a
/// /// host embeds the client without durable storage.
/// struct NullStore;
///
/// impl KeyValueStore for NullStore {
///     async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
///         Ok(None)
///     }
///     async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
///         Ok(())
///     }
///     async fn remove(&self, _key: &str) -> Result<(), StoreError> {
///         Ok(())
///     }
/// }
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StoreError::Read`] only for genuine I/O failures —
    /// a missing key is `Ok(None)`.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Durably stores `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    /// Returns [`StoreError::Write`] when the value could not be
    /// persisted. Consumers log this and keep their in-memory state.
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Removes `key` and its value. Removing a missing key succeeds.
    ///
    /// # Errors
    /// Returns [`StoreError::Remove`] on I/O failure.
    fn remove(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
