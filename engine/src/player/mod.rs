//! Player Module
//!
//! What the engine knows about players: a stable id and a read-only state
//! accessor the host implements.
//!
//! - [`PlayerState`] - Vitals and movement flags read by binding sources
//! - [`PlayerSnapshot`] - Plain-data implementation for hosts and tests

pub mod state;

pub use state::{EntityId, PlayerId, PlayerSnapshot, PlayerState};
