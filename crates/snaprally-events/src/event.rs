//! The `OwnerEvent` record and join-code generation.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use snaprally_types::{EventId, PlayerId};

/// Characters a join code may contain.
///
/// Uppercase alphanumerics minus the lookalikes (`0/O`, `1/I/L`) —
/// guests read these codes off someone's screen and type them on a
/// phone keyboard, so every character must survive that trip.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// Length of a generated join code.
const CODE_LEN: usize = 6;

/// An event created on this device.
///
/// This is the device's own bookkeeping, not the backend's event row —
/// just enough to list "your events" and re-display the join code.
/// Persisted as camelCase JSON in an array under
/// [`OWNER_EVENTS_KEY`](crate::OWNER_EVENTS_KEY), matching what
/// existing installs have on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerEvent {
    /// The backend's id for the event.
    pub event_id: EventId,

    /// The human-readable join code guests type.
    pub event_code: String,

    /// Who created the event (the owner's player id).
    pub owner_id: PlayerId,

    /// The title the owner gave the event.
    pub title: String,

    /// When the event was created on this device.
    pub created_at: DateTime<Utc>,
}

impl OwnerEvent {
    /// Builds a record for a just-created event, minting a fresh join
    /// code and stamping the creation time.
    pub fn new(event_id: EventId, owner_id: PlayerId, title: &str) -> Self {
        Self {
            event_id,
            event_code: generate_event_code(),
            owner_id,
            title: title.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Generates a random 6-character join code (e.g. `"K7PWQ3"`).
///
/// ~31^6 ≈ 890 million possibilities — not a secret (codes are meant to
/// be shared out loud), just unlikely to collide among the events one
/// backend hosts at a time. Uniqueness is ultimately the backend's job;
/// this is the client-side mint.
pub fn generate_event_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

// =========================================================================
// Tests
// =========================================================================
