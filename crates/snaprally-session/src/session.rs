//! Session types: the data structures that represent a remembered identity.
//!
//! A "session" is the device's record of a joined event. It tracks:
//! - WHERE the user is playing (`event_id`)
//! - WHO they are there (`player_id`, `player_name`)
//! - WHEN they joined and when the memory lapses (`joined_at`, `expires_at`)

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use snaprally_types::{EventId, PlayerId};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for session behavior.
///
/// `#[derive(Clone)]` is needed because the config is shared — the
/// [`SessionStore`](crate::SessionStore) keeps one copy, and a host
/// embedding several stores may hand the same config to each.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long (in seconds) a saved session stays valid before the
    /// device forgets it. The window is fixed at save time — reading a
    /// session does NOT refresh it.
    ///
    /// Default: 7 days. Set to 0 to make every session expire the
    /// moment it is read — useful in tests, pointless in production.
    pub session_ttl_secs: u64,
}

/// Default: the 7-day window the product shipped with.
impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: 7 * 24 * 60 * 60,
        }
    }
}

impl SessionConfig {
    /// The TTL as a chrono duration, for timestamp arithmetic.
    pub(crate) fn ttl(&self) -> Duration {
        Duration::seconds(self.session_ttl_secs as i64)
    }
}

// ---------------------------------------------------------------------------
// PlayerSession
// ---------------------------------------------------------------------------

/// A device's remembered identity for one event.
///
/// Created on a successful join or create; superseded when the same
/// event is joined again; forgotten on leave, logout, or expiry.
///
/// The serde attributes pin the persisted JSON to the format existing
/// installs already have on disk: camelCase field names and ISO-8601
/// timestamps, stored as an array under
/// [`SESSIONS_KEY`](crate::SESSIONS_KEY).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSession {
    /// The event this identity belongs to.
    pub event_id: EventId,

    /// The backend's id for this player within the event.
    pub player_id: PlayerId,

    /// The display name the user picked when joining.
    pub player_name: String,

    /// When the session was created.
    pub joined_at: DateTime<Utc>,

    /// When the device stops honoring this session. Fixed at creation
    /// (`joined_at + TTL`) — never slid forward by reads.
    pub expires_at: DateTime<Utc>,
}

impl PlayerSession {
    /// Builds a fresh session expiring `config.session_ttl_secs` from now.
    pub(crate) fn new(
        event_id: EventId,
        player_id: PlayerId,
        player_name: String,
        config: &SessionConfig,
    ) -> Self {
        let now = Utc::now();
        Self {
            event_id,
            player_id,
            player_name,
            joined_at: now,
            expires_at: now + config.ttl(),
        }
    }

    /// Returns `true` once the session's deadline has been reached.
    ///
    /// The boundary itself counts as expired: a reader at exactly
    /// `expires_at` must not get the session back.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// [`is_expired_at`](Self::is_expired_at) against the current time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

// =========================================================================
// Tests
// =========================================================================
