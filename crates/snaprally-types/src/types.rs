//! Core domain types shared across the Snaprally crates.
//!
//! These are the structures that get serialized to JSON — either into
//! the device's persistent store or across the boundary to the hosted
//! backend — so their serde attributes pin down exact wire shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for an event.
///
/// This is a "newtype wrapper" around the backend's opaque string id
/// (in practice a UUID, but nothing here depends on that). Why bother?
///
/// 1. **Type safety**: you can't accidentally pass a `PhotoId` where an
///    `EventId` is expected, even though both are strings underneath.
/// 2. **Readability**: `fn resume(event: &EventId)` is clearer than
///    `fn resume(event: &str)`.
///
/// The `#[serde(transparent)]` attribute makes serde serialize this as
/// just the inner string, not as `{ "0": "..." }` — so an
/// `EventId("evt1")` is simply `"evt1"` in JSON, exactly what the
/// backend and the persisted session blobs contain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A unique identifier for a player within an event.
///
/// Same newtype pattern as [`EventId`]. A player id is scoped to the
/// backend, not the device — the same person joining two events has two
/// player ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A unique identifier for a photo submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(pub String);

impl PhotoId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PhotoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ---------------------------------------------------------------------------
// ReactionKind
// ---------------------------------------------------------------------------

/// One of the three fixed reactions a viewer can toggle on a photo.
///
/// The set is closed on purpose: reaction counters live in a shared
/// aggregate on the backend and in per-device cache keys, so adding a
/// variant means touching stored data everywhere.
///
/// `#[serde(rename_all = "lowercase")]` makes the JSON representation
/// `"heart"` / `"fire"` / `"hundred"` — the strings the backend and the
/// persisted cache keys use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    /// ❤️
    Heart,
    /// 🔥
    Fire,
    /// 💯
    Hundred,
}

impl ReactionKind {
    /// All reaction kinds, in display order.
    ///
    /// Handy for UI code that renders one control per kind.
    pub const ALL: [ReactionKind; 3] = [Self::Heart, Self::Fire, Self::Hundred];

    /// The lowercase wire name (`"heart"`, `"fire"`, `"hundred"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Fire => "fire",
            Self::Hundred => "hundred",
        }
    }

    /// The emoji used when a reaction is shown in notification text.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Heart => "❤️",
            Self::Fire => "🔥",
            Self::Hundred => "💯",
        }
    }
}

/// Display prints the wire name, so `format!("{photo}:{kind}")` builds
/// exactly the composite keys the reaction cache persists.
impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heart" => Ok(Self::Heart),
            "fire" => Ok(Self::Fire),
            "hundred" => Ok(Self::Hundred),
            other => Err(format!("unknown reaction kind: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// ReactionCounts
// ---------------------------------------------------------------------------

/// The shared per-photo reaction aggregate.
///
/// These counters are owned by the backend and shared across all
/// devices — they are NOT per-user. The client carries this type for
/// optimistic reconciliation: when a local toggle decides "add" or
/// "remove", [`apply`](Self::apply) adjusts the displayed counts
/// immediately, before (and independently of) the remote write.
///
/// `#[serde(default)]` on each field tolerates sparse backend rows —
/// a photo nobody reacted to may store `{}` rather than three zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    /// Number of ❤️ reactions.
    #[serde(default)]
    pub heart: u32,
    /// Number of 🔥 reactions.
    #[serde(default)]
    pub fire: u32,
    /// Number of 💯 reactions.
    #[serde(default)]
    pub hundred: u32,
}

impl ReactionCounts {
    /// Returns the count for one reaction kind.
    pub const fn count(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Heart => self.heart,
            ReactionKind::Fire => self.fire,
            ReactionKind::Hundred => self.hundred,
        }
    }

    /// Applies a local toggle outcome to the aggregate.
    ///
    /// `added == true` increments the counter; `added == false`
    /// decrements it, saturating at zero. Saturation matters: the local
    /// cache and the shared aggregate can disagree (another device may
    /// have refreshed the counts between our toggles), and a displayed
    /// count must never go negative.
    pub fn apply(&mut self, kind: ReactionKind, added: bool) {
        let slot = match kind {
            ReactionKind::Heart => &mut self.heart,
            ReactionKind::Fire => &mut self.fire,
            ReactionKind::Hundred => &mut self.hundred,
        };
        if added {
            *slot += 1;
        } else {
            *slot = slot.saturating_sub(1);
        }
    }

    /// Total reactions across all kinds.
    pub const fn total(&self) -> u32 {
        self.heart + self.fire + self.hundred
    }
}

// =========================================================================
// Tests
// =========================================================================
