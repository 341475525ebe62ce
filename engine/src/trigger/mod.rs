//! Trigger Module
//!
//! Event-driven, time-limited visual effects layered over a field.
//!
//! - [`event`] - Game events and their payload
//! - [`config`] - Trigger rules and effect kinds
//! - [`active`] - A single running trigger
//! - [`processor`] - Per-instance rule set and active triggers
//! - [`dispatcher`] - Routes events to per-player processors

pub mod active;
pub mod config;
pub mod dispatcher;
pub mod event;
pub mod processor;

pub use active::ActiveTrigger;
pub use config::{TriggerConfig, TriggerConfigBuilder, TriggerEffect};
pub use dispatcher::{FnListener, SharedTriggerProcessor, TriggerEventDispatcher, TriggerListener};
pub use event::{EventData, FieldEvent};
pub use processor::TriggerProcessor;
