//! The session store: the device's collection of remembered identities.
//!
//! This is the central piece of the session layer. It's responsible for:
//! - Saving an identity after a successful join/create
//! - Looking an identity up by event for auto-rejoin
//! - Purging expired sessions lazily, as a side effect of reads
//! - Forgetting sessions on leave and logout
//!
//! # Concurrency note
//!
//! Every operation is a read-modify-write cycle against one serialized
//! JSON blob. There is no locking: the consuming application issues
//! mutating calls from a single UI event loop, so two writers never
//! race. If a host violates that assumption, the last write wins and
//! the other's change is silently dropped — keep mutations on one
//! logical thread.

use snaprally_store::{KeyValueStore, StoreError};
use snaprally_types::{EventId, PlayerId};

use crate::{PlayerSession, SessionConfig};

/// The storage key holding the session collection: a JSON array of
/// [`PlayerSession`]. The `@`-prefixed name is the key existing
/// installs already use, so it is part of the persisted format.
pub const SESSIONS_KEY: &str = "@player_sessions";

/// Persists per-event player identities with automatic expiry.
///
/// ## Lifecycle
///
/// ```text
/// save() ──→ get() / get_all() ──→ clear() / clear_all()
///   │              │
///   │              ▼
///   │        lazy expiry purge (read-time side effect)
///   ▼
/// [at most one live session per event]
/// ```
///
/// Failure contract: reads degrade to "no data" (logged, never
/// surfaced); writes return an explicit `Err` the caller may ignore —
/// nothing here panics or blocks the UI on a broken store.
pub struct SessionStore<S> {
    store: S,
    config: SessionConfig,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Creates a store with the default 7-day TTL.
    pub fn new(store: S) -> Self {
        Self::with_config(store, SessionConfig::default())
    }

    /// Creates a store with a custom config (shorter TTLs in tests).
    pub fn with_config(store: S, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// Records a session for `event_id`, replacing any previous session
    /// for the same event. Returns the saved session, with its
    /// `expires_at` stamped `now + TTL`.
    ///
    /// # Errors
    /// Returns [`StoreError`] when persisting fails. The failure is
    /// also logged; callers doing fire-and-forget saves can drop the
    /// result and keep going — the contract is "never block the UI",
    /// not "never tell the caller".
    pub async fn save(
        &self,
        event_id: EventId,
        player_id: PlayerId,
        player_name: &str,
    ) -> Result<PlayerSession, StoreError> {
        let session = PlayerSession::new(
            event_id,
            player_id,
            player_name.to_string(),
            &self.config,
        );

        // Load the current collection (purging anything expired), drop
        // the entry being superseded, append the fresh one.
        let mut sessions = self.get_all().await;
        sessions.retain(|s| s.event_id != session.event_id);
        sessions.push(session.clone());

        self.write(&sessions).await?;

        tracing::info!(
            event_id = %session.event_id,
            player_id = %session.player_id,
            expires_at = %session.expires_at,
            "session saved"
        );
        Ok(session)
    }

    /// Looks up the session for `event_id`.
    ///
    /// Returns `None` when no session exists, when the stored blob is
    /// unreadable (degrades to "no data"), or when the session has
    /// expired — in which case the expired entry is deleted on the way
    /// out (lazy expiry). A returned session is always live.
    pub async fn get(&self, event_id: &EventId) -> Option<PlayerSession> {
        let sessions = self.get_all().await;
        let session = sessions.into_iter().find(|s| &s.event_id == event_id)?;

        // get_all() already filters expired entries; this re-check
        // covers the window between that filter and now.
        if session.is_expired() {
            tracing::debug!(%event_id, "session expired, purging");
            if let Err(e) = self.clear(event_id).await {
                tracing::warn!(%event_id, error = %e, "failed to purge expired session");
            }
            return None;
        }

        Some(session)
    }

    /// Returns every live session on this device.
    ///
    /// Expired entries are filtered out, and when any were found the
    /// cleaned collection is written back — so expired sessions get
    /// purged opportunistically by reads rather than by a background
    /// sweep. Read or parse failures degrade to an empty list.
    pub async fn get_all(&self) -> Vec<PlayerSession> {
        let all = self.read_raw().await;
        let live: Vec<PlayerSession> =
            all.iter().filter(|s| !s.is_expired()).cloned().collect();

        if live.len() != all.len() {
            tracing::debug!(
                purged = all.len() - live.len(),
                "purging expired sessions"
            );
            // Opportunistic cleanup on a read path: a failed rewrite
            // just means the expired entries get purged on a later read.
            if let Err(e) = self.write(&live).await {
                tracing::warn!(error = %e, "failed to persist session cleanup");
            }
        }

        live
    }

    /// Removes the session for `event_id`, expired or not.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the updated collection cannot be
    /// persisted.
    pub async fn clear(&self, event_id: &EventId) -> Result<(), StoreError> {
        let mut sessions = self.read_raw().await;
        sessions.retain(|s| &s.event_id != event_id);
        self.write(&sessions).await?;
        tracing::info!(%event_id, "session cleared");
        Ok(())
    }

    /// Wipes every session — the "log out everywhere" path.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the key cannot be removed.
    pub async fn clear_all(&self) -> Result<(), StoreError> {
        self.store.remove(SESSIONS_KEY).await?;
        tracing::info!("all sessions cleared");
        Ok(())
    }

    /// Reads and decodes the raw collection, expired entries included.
    /// Any failure degrades to an empty list — for this store, "can't
    /// read" and "never wrote" are the same thing.
    async fn read_raw(&self) -> Vec<PlayerSession> {
        let blob = match self.store.get(SESSIONS_KEY).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read sessions, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(sessions) => sessions,
            Err(e) => {
                tracing::warn!(error = %e, "session blob malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Encodes and persists the collection.
    async fn write(&self, sessions: &[PlayerSession]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(sessions).map_err(|e| {
            // Plain structs of strings and timestamps don't fail to
            // encode; this arm exists to keep the no-panic contract.
            StoreError::Unavailable(format!("session blob encode failed: {e}"))
        })?;
        if let Err(e) = self.store.set(SESSIONS_KEY, &blob).await {
            tracing::warn!(error = %e, "failed to persist sessions");
            return Err(e);
        }
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `SessionStore`.
    //!
    //! # Testing time-dependent behavior
    //!
    //! Expiry depends on wall-clock time. Instead of sleeping, tests
    //! pick the TTL so the interesting case is forced:
    //!   - `session_ttl_secs: 0` → sessions expire the instant they exist
    //!   - `session_ttl_secs: 3600` → sessions never expire during a test
    //!
    //! This keeps tests fast and deterministic.

    use super::*;
    use snaprally_store::MemoryStore;

    // -- Helpers ----------------------------------------------------------

    fn store_with_instant_expiry() -> SessionStore<MemoryStore> {
        SessionStore::with_config(
            MemoryStore::new(),
            SessionConfig {
                session_ttl_secs: 0,
            },
        )
    }

    fn store_with_long_ttl() -> SessionStore<MemoryStore> {
        SessionStore::with_config(
            MemoryStore::new(),
            SessionConfig {
                session_ttl_secs: 3600,
            },
        )
    }

    fn eid(id: &str) -> EventId {
        EventId::from(id)
    }

    /// A store whose every operation fails — the "broken disk" device.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable(format!("get {key}")))
        }
        async fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable(format!("set {key}")))
        }
        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable(format!("remove {key}")))
        }
    }

    // =====================================================================
    // save() / get()
    // =====================================================================

    #[tokio::test]
    async fn test_save_then_get_returns_session() {
        let store = store_with_long_ttl();

        let saved = store
            .save(eid("evt1"), PlayerId::from("p1"), "Alice")
            .await
            .expect("save should succeed");

        let got = store.get(&eid("evt1")).await.expect("session should exist");
        assert_eq!(got, saved);
        assert_eq!(got.player_name, "Alice");
    }

    #[tokio::test]
    async fn test_get_unknown_event_returns_none() {
        let store = store_with_long_ttl();
        assert!(store.get(&eid("nope")).await.is_none());
    }

    #[tokio::test]
    async fn test_save_twice_replaces_session_for_event() {
        // Rejoining an event supersedes the old identity — exactly one
        // entry per event, carrying the second call's values.
        let store = store_with_long_ttl();
        store
            .save(eid("evt1"), PlayerId::from("p1"), "Alice")
            .await
            .unwrap();
        store
            .save(eid("evt1"), PlayerId::from("p2"), "Bob")
            .await
            .unwrap();

        let all = store.get_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].player_id, PlayerId::from("p2"));
        assert_eq!(all[0].player_name, "Bob");
    }

    #[tokio::test]
    async fn test_sessions_for_different_events_are_independent() {
        let store = store_with_long_ttl();
        store
            .save(eid("evt1"), PlayerId::from("p1"), "Alice")
            .await
            .unwrap();
        store
            .save(eid("evt2"), PlayerId::from("p9"), "Alice")
            .await
            .unwrap();

        assert_eq!(store.get_all().await.len(), 2);
        assert_eq!(
            store.get(&eid("evt2")).await.unwrap().player_id,
            PlayerId::from("p9")
        );
    }

    #[tokio::test]
    async fn test_get_expired_session_returns_none_and_purges() {
        let store = store_with_instant_expiry();
        store
            .save(eid("evt1"), PlayerId::from("p1"), "Alice")
            .await
            .unwrap();

        assert!(store.get(&eid("evt1")).await.is_none());
        // The read purged the entry — a raw load shows nothing left.
        assert!(store.get_all().await.is_empty());
    }

    // =====================================================================
    // get_all()
    // =====================================================================

    #[tokio::test]
    async fn test_get_all_filters_expired_and_rewrites_collection() {
        // Seed the underlying store with one live and one expired entry
        // by hand, then confirm a single read both filters and persists
        // the cleanup.
        let kv = MemoryStore::new();
        let live = PlayerSession {
            event_id: eid("live"),
            player_id: PlayerId::from("p1"),
            player_name: "Alice".to_string(),
            joined_at: chrono::Utc::now(),
            expires_at: chrono::Utc::now() + chrono::Duration::hours(1),
        };
        let expired = PlayerSession {
            event_id: eid("stale"),
            player_id: PlayerId::from("p2"),
            player_name: "Bob".to_string(),
            joined_at: chrono::Utc::now() - chrono::Duration::days(8),
            expires_at: chrono::Utc::now() - chrono::Duration::days(1),
        };
        let blob =
            serde_json::to_string(&vec![live.clone(), expired]).unwrap();
        kv.set(SESSIONS_KEY, &blob).await.unwrap();

        let store = SessionStore::new(kv.clone());
        let all = store.get_all().await;
        assert_eq!(all, vec![live]);

        // The cleaned collection was written back: the raw blob no
        // longer mentions the stale event.
        let raw = kv.get(SESSIONS_KEY).await.unwrap().unwrap();
        assert!(!raw.contains("stale"));
    }

    #[tokio::test]
    async fn test_get_all_empty_store_returns_empty() {
        let store = store_with_long_ttl();
        assert!(store.get_all().await.is_empty());
    }

    // =====================================================================
    // clear() / clear_all()
    // =====================================================================

    #[tokio::test]
    async fn test_clear_removes_only_that_event() {
        let store = store_with_long_ttl();
        store
            .save(eid("evt1"), PlayerId::from("p1"), "Alice")
            .await
            .unwrap();
        store
            .save(eid("evt2"), PlayerId::from("p2"), "Bob")
            .await
            .unwrap();

        store.clear(&eid("evt1")).await.unwrap();

        assert!(store.get(&eid("evt1")).await.is_none());
        assert!(store.get(&eid("evt2")).await.is_some());
    }

    #[tokio::test]
    async fn test_clear_unknown_event_succeeds() {
        let store = store_with_long_ttl();
        assert!(store.clear(&eid("never-joined")).await.is_ok());
    }

    #[tokio::test]
    async fn test_clear_all_then_get_all_is_empty() {
        let store = store_with_long_ttl();
        store
            .save(eid("evt1"), PlayerId::from("p1"), "Alice")
            .await
            .unwrap();
        store
            .save(eid("evt2"), PlayerId::from("p2"), "Bob")
            .await
            .unwrap();

        store.clear_all().await.unwrap();

        assert!(store.get_all().await.is_empty());
    }

    // =====================================================================
    // Degraded storage
    // =====================================================================

    #[tokio::test]
    async fn test_malformed_blob_degrades_to_empty() {
        let kv = MemoryStore::new();
        kv.set(SESSIONS_KEY, "not json at all").await.unwrap();

        let store = SessionStore::new(kv);
        assert!(store.get_all().await.is_empty());
        assert!(store.get(&eid("evt1")).await.is_none());
    }

    #[tokio::test]
    async fn test_broken_store_reads_degrade_to_empty() {
        let store = SessionStore::new(BrokenStore);
        assert!(store.get_all().await.is_empty());
        assert!(store.get(&eid("evt1")).await.is_none());
    }

    #[tokio::test]
    async fn test_broken_store_save_reports_error() {
        // The redesigned contract: the failure is observable, not
        // hidden — but it's an Err, never a panic.
        let store = SessionStore::new(BrokenStore);
        let result = store
            .save(eid("evt1"), PlayerId::from("p1"), "Alice")
            .await;
        assert!(result.is_err());
    }
}
