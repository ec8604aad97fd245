//! Rank-change detection across leaderboard refreshes.

use crate::Notification;

/// Watches a player's leaderboard rank and notices improvements.
///
/// The leaderboard arrives as periodic snapshots (poll or realtime
/// push); nothing in a snapshot says "you climbed". This tracker keeps
/// the previously observed rank and compares:
///
/// ```text
/// observe(5) ──→ None        (first observation: baseline only)
/// observe(5) ──→ None        (no change)
/// observe(3) ──→ Some(🚀)    (improved: 5 → 3)
/// observe(4) ──→ None        (dropped: remembered, not announced)
/// observe(2) ──→ Some(🚀)    (improved again: 4 → 2)
/// ```
///
/// Every observation updates the baseline, including drops — so a
/// drop-then-recover announces the recovery relative to the low point,
/// matching what the user actually watched happen.
#[derive(Debug, Clone, Default)]
pub struct RankTracker {
    last_rank: Option<u32>,
}

impl RankTracker {
    /// Creates a tracker with no baseline yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently observed rank, if any.
    pub fn last_rank(&self) -> Option<u32> {
        self.last_rank
    }

    /// Records a fresh rank and returns a notification if it improved.
    pub fn observe(&mut self, rank: u32) -> Option<Notification> {
        let previous = self.last_rank.replace(rank)?;
        let notification = Notification::rank_change(rank, previous);
        if notification.is_some() {
            tracing::debug!(from = previous, to = rank, "rank improved");
        }
        notification
    }

    /// Forgets the baseline (e.g. when switching events).
    pub fn reset(&mut self) {
        self.last_rank = None;
    }
}

// =========================================================================
// Tests
// =========================================================================
