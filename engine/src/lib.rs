//! Field Influence Engine
//!
//! Force fields and reactive field appearance for a block game. A field
//! pushes entities around through one of eight force shapes, and drives its
//! rendered properties from live player state, with short event-triggered
//! effects layered on top.
//!
//! # Modules
//!
//! - [`force`] - Force shapes (pull, push, vortex, orbit, tornado, ring, implosion, explosion)
//! - [`binding`] - Player signals mapped through easing curves onto properties
//! - [`trigger`] - Event-driven effects (flash, pulse, shake, glow, color shift)
//! - [`lifecycle`] - Spawn/despawn envelopes and baseline decay
//! - [`player`] - Player identity and state accessor
//! - [`config`] - JSON field definitions
//! - [`field`] - Engine context and per-field tick driver
//!
//! # Example
//!
//! ```ignore
//! use field_engine::{EngineContext, FieldDefinition, FieldInstance, PlayerId, PlayerSnapshot};
//! use glam::Vec3;
//!
//! let ctx = EngineContext::new();
//! let definition = FieldDefinition::load("fields/storm_shield.json")?;
//! let owner = PlayerId(1);
//! let mut field = FieldInstance::spawn(&ctx, definition, owner, Vec3::ZERO);
//!
//! // Every game tick:
//! ctx.tick();
//! let frame = field.tick(&ctx, &PlayerSnapshot::new(owner));
//! let push = field.force_on(None, Vec3::new(3.0, 0.0, 0.0));
//!
//! // From a damage callback:
//! ctx.on_damage_taken(owner, 4.0);
//! ```

pub mod binding;
pub mod config;
pub mod field;
pub mod force;
pub mod lifecycle;
pub mod player;
pub mod trigger;

pub use binding::{BindingConfig, BindingResolver, BindingSources, CombatTracker, InterpolationCurve};
pub use config::{ConfigError, FieldDefinition};
pub use field::{EngineContext, FieldFrame, FieldInstance};
pub use force::{ForceContext, ForceMode, ForceModeKind};
pub use lifecycle::{DecayConfig, LifecycleConfig};
pub use player::{EntityId, PlayerId, PlayerSnapshot, PlayerState};
pub use trigger::{FieldEvent, TriggerConfig, TriggerEffect, TriggerEventDispatcher, TriggerProcessor};
