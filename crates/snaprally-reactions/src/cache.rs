//! The reaction cache: which (photo, reaction) pairs this device has on.

use std::collections::HashMap;

use snaprally_store::{KeyValueStore, StoreError};
use snaprally_types::{PhotoId, ReactionKind};

/// The storage key holding the cache: a JSON object mapping
/// `"<photoId>:<kind>"` to a boolean. Part of the persisted format.
pub const REACTIONS_KEY: &str = "@photo_reactions";

// ---------------------------------------------------------------------------
// ToggleOutcome
// ---------------------------------------------------------------------------

/// What a toggle did, and whether it reached disk.
///
/// The in-memory flip has ALREADY happened by the time a caller sees
/// this — `added` is authoritative and drives both the UI state and the
/// increment/decrement pushed to the backend's shared counter.
/// `persisted` reports durability separately so a host can surface or
/// retry a failed write without the toggle itself ever failing.
#[derive(Debug)]
pub struct ToggleOutcome {
    /// `true` if the toggle turned the reaction on (an add),
    /// `false` if it turned it off (a remove).
    pub added: bool,

    /// Whether the updated cache reached durable storage. On `Err`, the
    /// in-memory state is still correct for the rest of this run; the
    /// history may simply be forgotten on the next launch.
    pub persisted: Result<(), StoreError>,
}

impl ToggleOutcome {
    /// Convenience for callers that only care about durability.
    pub fn is_persisted(&self) -> bool {
        self.persisted.is_ok()
    }
}

// ---------------------------------------------------------------------------
// ReactionCache
// ---------------------------------------------------------------------------

/// The device's record of its own reactions, mirrored to storage.
///
/// Owned state, explicit lifecycle: construct it over a store, [`load`]
/// once (or let the first [`toggle`] do it), then query and mutate.
/// Nothing here is ambient or global — a second cache over a different
/// store is a different device.
///
/// # Concurrency note
///
/// Like the session store, this assumes a single logical writer (the
/// UI event loop). Queries are synchronous against the in-memory map;
/// only [`load`] and [`toggle`] touch storage.
///
/// [`load`]: Self::load
/// [`toggle`]: Self::toggle
pub struct ReactionCache<S> {
    store: S,
    entries: HashMap<String, bool>,
    loaded: bool,
}

impl<S: KeyValueStore> ReactionCache<S> {
    /// Creates an empty, not-yet-loaded cache over `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: HashMap::new(),
            loaded: false,
        }
    }

    /// Pulls the persisted history into memory.
    ///
    /// Idempotent — safe to call once per photo view, as the UI does;
    /// only the first call reads storage. A read or parse failure
    /// degrades to an empty history (logged): the user re-reacting to
    /// things is annoying, the app refusing to run is worse.
    pub async fn load(&mut self) {
        if self.loaded {
            return;
        }

        match self.store.get(REACTIONS_KEY).await {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(entries) => self.entries = entries,
                Err(e) => {
                    tracing::warn!(error = %e, "reaction cache malformed, starting empty");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to read reaction cache, starting empty");
            }
        }

        self.loaded = true;
        tracing::debug!(entries = self.entries.len(), "reaction cache loaded");
    }

    /// Whether this device currently has `kind` active on `photo_id`.
    ///
    /// Pure lookup; a pair never toggled reads as `false`. Call
    /// [`load`](Self::load) first — an unloaded cache answers `false`
    /// for everything.
    pub fn has_reacted(&self, photo_id: &PhotoId, kind: ReactionKind) -> bool {
        self.entries
            .get(&entry_key(photo_id, kind))
            .copied()
            .unwrap_or(false)
    }

    /// Flips the reaction and reports whether that was an add or a
    /// remove.
    ///
    /// This is the single authority for add-vs-remove: callers must not
    /// infer intent from UI state, because this map is the only record
    /// of per-device history. A never-seen pair counts as "off", so its
    /// first toggle is always an add.
    ///
    /// Loads the persisted history first if [`load`](Self::load) was
    /// never called, so the alternation survives restarts even for
    /// callers that skip the explicit load.
    pub async fn toggle(
        &mut self,
        photo_id: &PhotoId,
        kind: ReactionKind,
    ) -> ToggleOutcome {
        self.load().await;

        let key = entry_key(photo_id, kind);
        let state = self.entries.entry(key).or_insert(false);
        *state = !*state;
        let added = *state;

        tracing::debug!(
            photo_id = %photo_id,
            kind = %kind,
            added,
            "reaction toggled"
        );

        let persisted = self.persist().await;
        ToggleOutcome { added, persisted }
    }

    /// Number of pairs ever toggled (on or off) on this device.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache has no history at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the whole mapping back to storage.
    async fn persist(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.entries).map_err(|e| {
            StoreError::Unavailable(format!("reaction blob encode failed: {e}"))
        })?;
        if let Err(e) = self.store.set(REACTIONS_KEY, &blob).await {
            tracing::warn!(error = %e, "failed to persist reaction cache");
            return Err(e);
        }
        Ok(())
    }
}

/// Builds the composite storage key for one (photo, reaction) pair.
fn entry_key(photo_id: &PhotoId, kind: ReactionKind) -> String {
    format!("{photo_id}:{kind}")
}

// =========================================================================
// Tests
// =========================================================================
