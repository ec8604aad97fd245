//! Notification kinds and their wording.
//!
//! The copy lives here, in one place, so every surface that mentions a
//! game moment says it the same way.

use serde::{Deserialize, Serialize};
use snaprally_types::ReactionKind;

/// The game moments that can produce a notification.
///
/// `#[serde(rename_all = "snake_case")]` keeps the wire names
/// (`"new_photo"`, `"rank_change"`, …) that the host's notification
/// payloads already use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Someone uploaded a photo for a task.
    NewPhoto,
    /// Someone reacted to one of your photos.
    Reaction,
    /// Your leaderboard rank improved.
    RankChange,
    /// The event has started.
    EventStart,
    /// The final winner was announced.
    WinnerAnnounced,
}

/// A composed, ready-to-deliver notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Which game moment this is.
    pub kind: NotificationKind,
    /// Short headline shown by the OS.
    pub title: String,
    /// One-line body under the headline.
    pub body: String,
}

impl Notification {
    /// "📸 New Photo!" — someone fulfilled a task.
    pub fn new_photo(player_name: &str, task_description: &str) -> Self {
        Self {
            kind: NotificationKind::NewPhoto,
            title: "📸 New Photo!".to_string(),
            body: format!("{player_name} just uploaded: \"{task_description}\""),
        }
    }

    /// "❤️ You got a reaction!" — with the reaction's emoji as the lead
    /// and the photo's running total in the body.
    pub fn reaction(player_name: &str, kind: ReactionKind, total: u32) -> Self {
        Self {
            kind: NotificationKind::Reaction,
            title: format!("{} You got a reaction!", kind.emoji()),
            body: format!("{player_name} reacted to your photo ({total} total)"),
        }
    }

    /// "🚀 You moved up!" — only when the rank actually improved.
    ///
    /// Ranks count down toward #1, so improvement means
    /// `new_rank < old_rank`. Dropping (or holding) a rank produces no
    /// notification — the game cheers, it never jeers.
    pub fn rank_change(new_rank: u32, old_rank: u32) -> Option<Self> {
        if new_rank >= old_rank {
            return None;
        }
        Some(Self {
            kind: NotificationKind::RankChange,
            title: "🚀 You moved up!".to_string(),
            body: format!("You're now #{new_rank}! Keep going!"),
        })
    }

    /// "🎉 The game is on!" — the event's tasks are live.
    pub fn event_start(event_title: &str) -> Self {
        Self {
            kind: NotificationKind::EventStart,
            title: "🎉 The game is on!".to_string(),
            body: format!("\"{event_title}\" has started — go get those photos"),
        }
    }

    /// "🏆 We have a winner!" — final standings are in.
    pub fn winner_announced(winner_name: &str) -> Self {
        Self {
            kind: NotificationKind::WinnerAnnounced,
            title: "🏆 We have a winner!".to_string(),
            body: format!("{winner_name} takes it — check the final board"),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
