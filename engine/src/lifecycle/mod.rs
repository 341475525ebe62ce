//! Lifecycle Module
//!
//! Timing envelopes and baseline decay for field instances.

pub mod decay;
pub mod envelope;

pub use decay::DecayConfig;
pub use envelope::{LifecycleConfig, LifecycleConfigBuilder};
