//! Persistent key-value storage for Snaprally.
//!
//! Everything the client remembers between launches — player sessions,
//! the reaction cache, the owner-event list — lives behind one small
//! abstraction: the [`KeyValueStore`] trait (string keys, JSON-string
//! values, async get/set/remove).
//!
//! # How it fits in the stack
//!
//! ```text
//! Session / Reactions / Events crates (above)  ← read-modify-write JSON blobs
//!     ↕
//! Storage seam (this crate)  ← KeyValueStore trait + backends
//!     ↕
//! Device storage (below)  ← files, or whatever the host platform provides
//! ```
//!
//! Two backends ship here:
//! - [`MemoryStore`] — in-process, for tests and throwaway demos
//! - [`FileStore`] — one JSON file per key under a base directory

mod error;
mod file;
mod memory;
mod store;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
