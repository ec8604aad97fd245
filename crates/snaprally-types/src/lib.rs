//! Shared identity and domain types for Snaprally.
//!
//! Every other crate in the workspace speaks in terms of these types:
//! who a player is ([`PlayerId`]), which event they're in ([`EventId`]),
//! which photo they're looking at ([`PhotoId`]), and how reactions are
//! named ([`ReactionKind`]) and counted ([`ReactionCounts`]).
//!
//! The JSON shapes here are load-bearing: they match what the hosted
//! backend and the device's persistent store already contain, so a
//! field rename is a data-migration event, not a refactor.

mod types;

pub use types::{EventId, PhotoId, PlayerId, ReactionCounts, ReactionKind};
