//! Per-device reaction history for Snaprally.
//!
//! The backend keeps one shared counter per (photo, reaction) — it has
//! no record of WHO reacted. The only place "did *I* react with ❤️ to
//! this photo" exists is on the device, in this cache. That makes the
//! cache load-bearing twice over:
//!
//! 1. The UI reads it to fill in the reaction buttons.
//! 2. A tap consults it to decide add-vs-remove *before* telling the
//!    backend to adjust the shared counter. Guess wrong and counts
//!    drift forever.
//!
//! Known limitation: reinstall the app (or react from a second device)
//! and the history is gone while the shared counters remain, so the
//! same person can then count twice. There is no server-side record to
//! reconcile against, and this crate does not try.

mod cache;

pub use cache::{ReactionCache, ToggleOutcome, REACTIONS_KEY};
