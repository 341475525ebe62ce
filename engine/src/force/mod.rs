//! Force Module
//!
//! Computes the force a field exerts on an entity for one tick. Nothing
//! here integrates motion: callers add the returned vector to velocity
//! themselves.
//!
//! # Unit System
//!
//! Distances are in blocks, forces in blocks/tick². Every config is
//! immutable after construction and has no time-dependent state; anything
//! that varies over time takes the tick as an input.
//!
//! # Submodules
//!
//! - [`context`] - Per-tick entity/field snapshot
//! - [`shape`] - Falloff curves, axes, clamping rules
//! - [`modes`] - The eight mode configs
//! - [`mode`] - `ForceMode` enum over all of them

pub mod context;
pub mod mode;
pub mod modes;
pub mod shape;

pub use context::ForceContext;
pub use mode::{ForceMode, ForceModeKind};
pub use modes::{
    ExplosionModeConfig, ImplosionModeConfig, OrbitModeConfig, PullModeConfig, PushModeConfig,
    RingModeConfig, TornadoModeConfig, VortexModeConfig,
};
pub use shape::{Axis, Falloff, MIN_RADIUS, MIN_STRENGTH};
