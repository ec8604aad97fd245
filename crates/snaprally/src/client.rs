//! `RallyClient`: one handle over the whole device-local core.
//!
//! The sub-crates each own one concern; the client wires them over a
//! single shared [`KeyValueStore`] so an embedding deals with one
//! object — the "device", as far as game state goes.

use snaprally_events::{OwnerEvent, OwnerEventStore};
use snaprally_notify::{Notifier, RankTracker};
use snaprally_reactions::{ReactionCache, ToggleOutcome};
use snaprally_session::{PlayerSession, SessionConfig, SessionStore};
use snaprally_store::KeyValueStore;
use snaprally_types::{EventId, PhotoId, PlayerId, ReactionCounts, ReactionKind};

use crate::RallyError;

/// Builder for configuring a [`RallyClient`].
///
/// # Example
///
/// ```rust
/// use snaprally::prelude::*;
///
/// let client = RallyClientBuilder::new()
///     .session_config(SessionConfig { session_ttl_secs: 3600 })
///     .build(MemoryStore::new());
/// ```
pub struct RallyClientBuilder {
    session_config: SessionConfig,
}

impl RallyClientBuilder {
    /// Creates a builder with default settings (7-day session TTL).
    pub fn new() -> Self {
        Self {
            session_config: SessionConfig::default(),
        }
    }

    /// Overrides the session configuration.
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Builds the client over `store`. Each subsystem gets a clone of
    /// the store handle — clones share the same underlying data.
    pub fn build<S: KeyValueStore + Clone>(self, store: S) -> RallyClient<S> {
        RallyClient {
            sessions: SessionStore::with_config(
                store.clone(),
                self.session_config,
            ),
            reactions: ReactionCache::new(store.clone()),
            owner_events: OwnerEventStore::new(store),
            rank: RankTracker::new(),
        }
    }
}

impl Default for RallyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The assembled client core: sessions + reactions + owner events +
/// rank tracking, over one shared store.
///
/// Mutating methods take `&mut self` — the client expects a single
/// logical caller (the UI event loop), the same assumption every
/// subsystem beneath it makes.
pub struct RallyClient<S> {
    sessions: SessionStore<S>,
    reactions: ReactionCache<S>,
    owner_events: OwnerEventStore<S>,
    rank: RankTracker,
}

impl<S: KeyValueStore + Clone> RallyClient<S> {
    /// Creates a new builder.
    pub fn builder() -> RallyClientBuilder {
        RallyClientBuilder::new()
    }

    /// Creates a client with default settings over `store`.
    pub fn new(store: S) -> Self {
        Self::builder().build(store)
    }

    // -- Events -----------------------------------------------------------

    /// Records an event created on this device, minting its join code.
    ///
    /// The backend's event row is the caller's business; this remembers
    /// the device's side (id, code, title) for the "your events" list.
    ///
    /// # Errors
    /// Returns [`RallyError::Store`] when the list cannot be persisted.
    pub async fn create_event(
        &self,
        event_id: EventId,
        owner_id: PlayerId,
        title: &str,
    ) -> Result<OwnerEvent, RallyError> {
        let event = OwnerEvent::new(event_id, owner_id, title);
        self.owner_events.save(event.clone()).await?;
        Ok(event)
    }

    /// Every event created on this device.
    pub async fn my_events(&self) -> Vec<OwnerEvent> {
        self.owner_events.all().await
    }

    // -- Sessions ---------------------------------------------------------

    /// Remembers a successful join: who the user is in `event_id`, for
    /// the configured TTL. Rejoining replaces the previous identity.
    ///
    /// # Errors
    /// Returns [`RallyError::Store`] when the session cannot be
    /// persisted — safe to ignore for fire-and-forget joins.
    pub async fn join_event(
        &self,
        event_id: EventId,
        player_id: PlayerId,
        player_name: &str,
    ) -> Result<PlayerSession, RallyError> {
        let session = self
            .sessions
            .save(event_id, player_id, player_name)
            .await?;
        Ok(session)
    }

    /// Looks up the remembered identity for `event_id`; `None` when the
    /// device never joined it or the memory lapsed.
    pub async fn resume(&self, event_id: &EventId) -> Option<PlayerSession> {
        self.sessions.get(event_id).await
    }

    /// Every event this device can still resume into.
    pub async fn active_sessions(&self) -> Vec<PlayerSession> {
        self.sessions.get_all().await
    }

    /// Forgets the identity for one event.
    ///
    /// # Errors
    /// Returns [`RallyError::Store`] when the removal cannot be
    /// persisted.
    pub async fn leave_event(&self, event_id: &EventId) -> Result<(), RallyError> {
        self.sessions.clear(event_id).await?;
        Ok(())
    }

    /// Forgets every event — full logout.
    ///
    /// # Errors
    /// Returns [`RallyError::Store`] when the wipe cannot be persisted.
    pub async fn logout(&self) -> Result<(), RallyError> {
        self.sessions.clear_all().await?;
        Ok(())
    }

    // -- Reactions --------------------------------------------------------

    /// Warms the reaction cache from storage. Idempotent; the first
    /// [`react`](Self::react) does this implicitly.
    pub async fn load_reactions(&mut self) {
        self.reactions.load().await;
    }

    /// Whether this device currently has `kind` active on `photo_id`.
    pub fn has_reacted(&self, photo_id: &PhotoId, kind: ReactionKind) -> bool {
        self.reactions.has_reacted(photo_id, kind)
    }

    /// Toggles a reaction and applies the outcome to the displayed
    /// aggregate in one step.
    ///
    /// The returned [`ToggleOutcome::added`] is also the delta the
    /// caller owes the backend: `true` → increment the shared counter,
    /// `false` → decrement it. `counts` is adjusted the same way here,
    /// so the UI shows the change before the remote write lands.
    pub async fn react(
        &mut self,
        photo_id: &PhotoId,
        kind: ReactionKind,
        counts: &mut ReactionCounts,
    ) -> ToggleOutcome {
        let outcome = self.reactions.toggle(photo_id, kind).await;
        counts.apply(kind, outcome.added);
        outcome
    }

    // -- Leaderboard ------------------------------------------------------

    /// Feeds a fresh leaderboard rank to the tracker and, when it
    /// improved, delivers the "you moved up" notification through
    /// `notifier`.
    ///
    /// # Errors
    /// Returns [`RallyError::Notify`] when delivery fails. The rank is
    /// recorded either way.
    pub async fn observe_rank<N: Notifier>(
        &mut self,
        notifier: &N,
        rank: u32,
    ) -> Result<(), RallyError> {
        if let Some(notification) = self.rank.observe(rank) {
            notifier.deliver(&notification).await?;
        }
        Ok(())
    }

    /// Resets rank tracking (e.g. when switching events).
    pub fn reset_rank(&mut self) {
        self.rank.reset();
    }
}

// =========================================================================
// Tests
// =========================================================================
