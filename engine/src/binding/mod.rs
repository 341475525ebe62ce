//! Binding Module
//!
//! Maps live player state onto field properties.
//!
//! - [`curve`] - Easing curves
//! - [`source`] - Named signal sources and their registry
//! - [`combat`] - Decaying per-player combat state
//! - [`config`] - One source → one property mapping
//! - [`resolver`] - Evaluates bindings against a player

pub mod combat;
pub mod config;
pub mod curve;
pub mod resolver;
pub mod source;

pub use combat::{COMBAT_WINDOW_TICKS, CombatEntry, CombatTracker, DAMAGE_DECAY_FACTOR};
pub use config::{BindingConfig, BindingConfigBuilder};
pub use curve::InterpolationCurve;
pub use resolver::{BindingMap, BindingResolver, PropertyValues};
pub use source::{BindingSource, BindingSources, BuiltinSource, FnSource, SourceInput};
