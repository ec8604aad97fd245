//! The owner-event store: append-or-replace persistence for created events.

use snaprally_store::{KeyValueStore, StoreError};
use snaprally_types::EventId;

use crate::OwnerEvent;

/// The storage key holding the owner-event list: a JSON array of
/// [`OwnerEvent`]. Part of the persisted format.
pub const OWNER_EVENTS_KEY: &str = "@owner_events";

/// Persists the list of events created on this device.
///
/// Same pattern as the session store — read-modify-write on one JSON
/// blob, single logical writer, reads degrade to empty — but with no
/// expiry: entries stay until explicitly removed (which the product
/// currently never does).
pub struct OwnerEventStore<S> {
    store: S,
}

impl<S: KeyValueStore> OwnerEventStore<S> {
    /// Creates a store over the given backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saves an owner event, replacing any existing entry with the same
    /// `event_id` (the collection is unique by id).
    ///
    /// # Errors
    /// Returns [`StoreError`] when persisting fails; the failure is
    /// logged and safe to ignore for fire-and-forget callers.
    pub async fn save(&self, event: OwnerEvent) -> Result<(), StoreError> {
        let mut events = self.all().await;
        events.retain(|e| e.event_id != event.event_id);
        let event_id = event.event_id.clone();
        events.push(event);
        self.write(&events).await?;
        tracing::info!(%event_id, "owner event saved");
        Ok(())
    }

    /// Every event created on this device, oldest first (insertion
    /// order). Read or parse failures degrade to an empty list.
    pub async fn all(&self) -> Vec<OwnerEvent> {
        let blob = match self.store.get(OWNER_EVENTS_KEY).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read owner events, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(error = %e, "owner events blob malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Looks up one created event by id.
    pub async fn find(&self, event_id: &EventId) -> Option<OwnerEvent> {
        self.all()
            .await
            .into_iter()
            .find(|e| &e.event_id == event_id)
    }

    async fn write(&self, events: &[OwnerEvent]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(events).map_err(|e| {
            StoreError::Unavailable(format!("owner events encode failed: {e}"))
        })?;
        if let Err(e) = self.store.set(OWNER_EVENTS_KEY, &blob).await {
            tracing::warn!(error = %e, "failed to persist owner events");
            return Err(e);
        }
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================
