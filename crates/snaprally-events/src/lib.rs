//! Owner-event bookkeeping for Snaprally.
//!
//! When a user creates an event on this device, the device remembers it
//! — id, join code, title — so the home screen can list "your events"
//! without a backend round trip. Unlike sessions, these entries never
//! expire: having once hosted an event is not a thing the device
//! forgets on its own.
//!
//! The join code itself is minted here too: a short, human-readable
//! string guests type to get in.

mod event;
mod store;

pub use event::{generate_event_code, OwnerEvent};
pub use store::{OwnerEventStore, OWNER_EVENTS_KEY};
