//! # Snaprally
//!
//! Client core for an event-photo-game: users create or join events,
//! complete photo challenges, react to each other's photos, and watch a
//! live leaderboard. This workspace is the device-local half of that —
//! remembered sessions, the per-device reaction history, the owner's
//! event list, and notification wording — kept deliberately independent
//! of any particular backend or UI toolkit.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use snaprally::prelude::*;
//!
//! # async fn run() {
//! let store = MemoryStore::new();
//! let client = RallyClient::new(store);
//!
//! // Join an event; the device remembers for 7 days.
//! client
//!     .join_event("evt1".into(), "p1".into(), "Alice")
//!     .await
//!     .ok();
//!
//! // Later launch: resume without re-entering the join code.
//! if let Some(session) = client.resume(&"evt1".into()).await {
//!     println!("welcome back, {}", session.player_name);
//! }
//! # }
//! ```

mod client;
mod error;

pub use client::{RallyClient, RallyClientBuilder};
pub use error::RallyError;

/// The types most embeddings need, re-exported in one place.
pub mod prelude {
    pub use crate::{RallyClient, RallyClientBuilder, RallyError};
    pub use snaprally_events::OwnerEvent;
    pub use snaprally_notify::{
        NoopNotifier, Notification, NotificationKind, Notifier, NotifyError,
        RankTracker,
    };
    pub use snaprally_reactions::{ReactionCache, ToggleOutcome};
    pub use snaprally_session::{PlayerSession, SessionConfig, SessionStore};
    pub use snaprally_store::{FileStore, KeyValueStore, MemoryStore, StoreError};
    pub use snaprally_types::{
        EventId, PhotoId, PlayerId, ReactionCounts, ReactionKind,
    };
}
