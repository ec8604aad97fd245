//! Player session persistence for Snaprally.
//!
//! A "session" is the device's memory of who the user was in an event:
//! join an event once, and for the next week the app can put you right
//! back into it without asking for the join code again. This crate
//! handles that lifecycle:
//!
//! 1. **Saving** — recording the identity after a successful join/create
//! 2. **Resuming** — looking the identity up by event on relaunch
//! 3. **Expiry** — sessions silently lapse after a TTL (default 7 days),
//!    purged lazily the first time they are read past their deadline
//!
//! # How it fits in the stack
//!
//! ```text
//! UI / client facade (above)  ← auto-rejoin, leave, logout
//!     ↕
//! Session layer (this crate)  ← PlayerSession collection + expiry rules
//!     ↕
//! Storage seam (below)  ← one JSON array under the "@player_sessions" key
//! ```

mod session;
mod store;

pub use session::{PlayerSession, SessionConfig};
pub use store::{SessionStore, SESSIONS_KEY};
