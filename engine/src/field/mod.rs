//! Field Module
//!
//! Runtime side of the engine: the shared [`EngineContext`] and the
//! per-field [`FieldInstance`] driver that combines bindings, triggers,
//! lifecycle and force into one frame per tick.

pub mod context;
pub mod instance;

pub use context::EngineContext;
pub use instance::{FieldFrame, FieldInstance};
