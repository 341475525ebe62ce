//! Field Instance
//!
//! One live field attached to one owner. Each tick it:
//!
//! 1. advances its age
//! 2. resolves bindings against the owner
//! 3. advances its triggers and drops expired ones
//! 4. decays its baseline values
//! 5. merges per property: trigger override, then binding, then baseline
//!
//! Force queries are separate ([`FieldInstance::force_on`]) since they run
//! once per affected entity rather than once per tick. They belong after
//! `tick` and see the tick just processed as zero-based elapsed time.

use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;
use serde::Serialize;

use super::context::EngineContext;
use crate::binding::PropertyValues;
use crate::config::FieldDefinition;
use crate::force::ForceContext;
use crate::player::{EntityId, PlayerId, PlayerState};
use crate::trigger::{EventData, FieldEvent, SharedTriggerProcessor, TriggerProcessor};

/// Everything a renderer needs for one tick of one field. Serializable so
/// hosts can forward it to clients as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFrame {
    /// Ticks since spawn
    pub age: u64,
    /// Merged property values
    pub properties: PropertyValues,
    pub shake_offset: Vec3,
    pub flash_color: Option<String>,
    pub flash_intensity: f32,
    /// Fade envelope multiplier in `[0, 1]`
    pub alpha: f32,
    /// Scale envelope multiplier in `[0, 1]`
    pub scale: f32,
    pub expired: bool,
}

impl FieldFrame {
    pub fn get(&self, property: &str) -> Option<f32> {
        self.properties.get(property).copied()
    }
}

#[derive(Debug)]
pub struct FieldInstance {
    definition: FieldDefinition,
    owner: PlayerId,
    center: Vec3,
    age: u64,
    baseline: PropertyValues,
    processor: SharedTriggerProcessor,
}

impl FieldInstance {
    /// Create the instance, register its trigger processor for `owner` and
    /// fire [`FieldEvent::FieldSpawn`].
    pub fn spawn(ctx: &EngineContext, definition: FieldDefinition, owner: PlayerId, center: Vec3) -> Self {
        let processor = TriggerProcessor::new(definition.triggers.iter().cloned());
        Self::spawn_with(ctx, definition, owner, center, processor)
    }

    /// As [`FieldInstance::spawn`], with a reproducible shake seed.
    pub fn spawn_seeded(
        ctx: &EngineContext,
        definition: FieldDefinition,
        owner: PlayerId,
        center: Vec3,
        seed: u64,
    ) -> Self {
        let processor = TriggerProcessor::with_seed(definition.triggers.iter().cloned(), seed);
        Self::spawn_with(ctx, definition, owner, center, processor)
    }

    fn spawn_with(
        ctx: &EngineContext,
        definition: FieldDefinition,
        owner: PlayerId,
        center: Vec3,
        processor: TriggerProcessor,
    ) -> Self {
        let processor = Arc::new(Mutex::new(processor));
        if ctx.dispatcher().register(owner, Arc::clone(&processor)).is_some() {
            log::warn!("field {:?} replaced an existing trigger processor for {owner}", definition.id);
        }
        let baseline = definition.base.clone();
        let instance = Self {
            definition,
            owner,
            center,
            age: 0,
            baseline,
            processor,
        };
        ctx.dispatcher()
            .dispatch(FieldEvent::FieldSpawn, Some(owner), &EventData::none());
        instance
    }

    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    /// Current decayed baseline values.
    pub fn baseline(&self) -> &PropertyValues {
        &self.baseline
    }

    pub fn processor(&self) -> &SharedTriggerProcessor {
        &self.processor
    }

    pub fn is_expired(&self) -> bool {
        self.definition.is_bounded() && self.age >= u64::from(self.definition.duration)
    }

    /// Run one tick for `player`, normally the owner.
    pub fn tick(&mut self, ctx: &EngineContext, player: &dyn PlayerState) -> FieldFrame {
        self.age += 1;

        let bound = ctx.resolver().evaluate_all(&self.definition.bindings, player, self.age);

        let mut processor = self.processor.lock();
        processor.tick();

        let decay = self.definition.lifecycle.decay;
        for value in self.baseline.values_mut() {
            *value = decay.apply(*value);
        }

        let mut properties = self.baseline.clone();
        properties.extend(bound);
        for (property, value) in properties.iter_mut() {
            if let Some(overridden) = processor.override_value(property) {
                *value = overridden;
            }
        }

        FieldFrame {
            age: self.age,
            properties,
            shake_offset: processor.shake_offset(),
            flash_color: processor.flash_color().map(str::to_owned),
            flash_intensity: processor.flash_intensity(),
            alpha: self.alpha_envelope(),
            scale: self.scale_envelope(),
            expired: self.is_expired(),
        }
    }

    /// Fade multiplier at the current age.
    pub fn alpha_envelope(&self) -> f32 {
        let lifecycle = &self.definition.lifecycle;
        self.envelope(lifecycle.fade_in, lifecycle.fade_out)
    }

    /// Scale multiplier at the current age.
    pub fn scale_envelope(&self) -> f32 {
        let lifecycle = &self.definition.lifecycle;
        self.envelope(lifecycle.scale_in, lifecycle.scale_out)
    }

    fn envelope(&self, ramp_in: u32, ramp_out: u32) -> f32 {
        let mut value = 1.0_f32;
        if ramp_in > 0 {
            value = value.min(self.age as f32 / ramp_in as f32);
        }
        if ramp_out > 0 && self.definition.is_bounded() {
            let remaining = u64::from(self.definition.duration).saturating_sub(self.age);
            value = value.min(remaining as f32 / ramp_out as f32);
        }
        value.clamp(0.0, 1.0)
    }

    /// Forces are queried after `tick`, so the tick just processed is
    /// `age - 1`. The first tick after spawn is elapsed tick 0.
    fn force_context(&self, entity: Option<EntityId>, position: Vec3) -> ForceContext {
        let elapsed = u32::try_from(self.age.saturating_sub(1)).unwrap_or(u32::MAX);
        ForceContext::new(entity, position, self.center, elapsed, self.definition.duration)
    }

    /// Force on an entity (or a probe when `entity` is `None`) at `position`.
    /// Zero for fields without a force mode.
    pub fn force_on(&self, entity: Option<EntityId>, position: Vec3) -> Vec3 {
        match &self.definition.force {
            Some(force) => force.force_at(&self.force_context(entity, position)),
            None => Vec3::ZERO,
        }
    }

    pub fn strength_at(&self, distance: f32) -> f32 {
        self.definition
            .force
            .as_ref()
            .map_or(0.0, |force| force.strength_at(distance))
    }

    /// Fire [`FieldEvent::FieldDespawn`] on this field's own processor and
    /// release its registration. A successor registered for the same owner
    /// keeps running untouched.
    pub fn despawn(self, ctx: &EngineContext) {
        self.processor.lock().fire_event(FieldEvent::FieldDespawn);
        ctx.dispatcher()
            .notify_listeners(FieldEvent::FieldDespawn, self.owner, &EventData::none());
        // Only release the registration if it is still ours.
        if let Some(current) = ctx.dispatcher().processor(self.owner) {
            if Arc::ptr_eq(&current, &self.processor) {
                ctx.dispatcher().unregister(self.owner);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindingConfig;
    use crate::force::{ExplosionModeConfig, PullModeConfig, PushModeConfig};
    use crate::lifecycle::{DecayConfig, LifecycleConfig};
    use crate::player::PlayerSnapshot;
    use crate::trigger::{TriggerConfig, TriggerEffect};

    #[test]
    fn test_spawn_registers_and_despawn_releases() {
        let ctx = EngineContext::new();
        let owner = PlayerId(1);
        let field = FieldInstance::spawn(&ctx, FieldDefinition::new("aura"), owner, Vec3::ZERO);
        assert!(ctx.dispatcher().is_registered(owner));
        field.despawn(&ctx);
        assert!(!ctx.dispatcher().is_registered(owner));
    }

    #[test]
    fn test_spawn_trigger_fires() {
        let ctx = EngineContext::new();
        let definition = FieldDefinition::new("aura")
            .with_trigger(TriggerConfig::builder(FieldEvent::FieldSpawn, TriggerEffect::Glow).build());
        let field = FieldInstance::spawn(&ctx, definition, PlayerId(1), Vec3::ZERO);
        assert!(field.processor().lock().is_effect_active(TriggerEffect::Glow));
    }

    #[test]
    fn test_merge_order() {
        let ctx = EngineContext::new();
        let owner = PlayerId(2);
        let definition = FieldDefinition::new("aura")
            .with_base("alpha", 0.8)
            .with_base("scale", 1.0)
            .with_binding("scale", BindingConfig::builder("player.health_percent").build())
            .with_trigger(
                TriggerConfig::builder(FieldEvent::PlayerDamage, TriggerEffect::Pulse)
                    .duration(10)
                    .scale(2.0)
                    .build(),
            );
        let mut field = FieldInstance::spawn(&ctx, definition, owner, Vec3::ZERO);
        let player = PlayerSnapshot::new(owner).with_health(10.0, 20.0);

        let frame = field.tick(&ctx, &player);
        assert_eq!(frame.get("alpha"), Some(0.8), "baseline passes through");
        assert_eq!(frame.get("scale"), Some(0.5), "binding beats baseline");

        ctx.on_damage_taken(owner, 2.0);
        for _ in 0..4 {
            field.tick(&ctx, &player);
        }
        let frame = field.tick(&ctx, &player);
        // Pulse at its midpoint peaks at the configured scale.
        assert!((frame.get("scale").unwrap() - 2.0).abs() < 1e-5, "trigger beats binding");
    }

    #[test]
    fn test_baseline_decays_to_floor() {
        let ctx = EngineContext::new();
        let definition = FieldDefinition::new("ember")
            .with_lifecycle(LifecycleConfig::builder().decay(DecayConfig::new(0.5, 0.1)).build())
            .with_base("glow", 1.0);
        let mut field = FieldInstance::spawn(&ctx, definition, PlayerId(3), Vec3::ZERO);
        let player = PlayerSnapshot::new(PlayerId(3));
        assert_eq!(field.tick(&ctx, &player).get("glow"), Some(0.5));
        assert_eq!(field.tick(&ctx, &player).get("glow"), Some(0.25));
        for _ in 0..10 {
            field.tick(&ctx, &player);
        }
        assert_eq!(field.baseline()["glow"], 0.1);
    }

    #[test]
    fn test_envelopes_and_expiry() {
        let ctx = EngineContext::new();
        let definition = FieldDefinition::new("flare")
            .with_duration(20)
            .with_lifecycle(LifecycleConfig::builder().fade_in(4).fade_out(4).scale_in(2).build());
        let mut field = FieldInstance::spawn(&ctx, definition, PlayerId(5), Vec3::ZERO);
        let player = PlayerSnapshot::new(PlayerId(5));

        let frame = field.tick(&ctx, &player);
        assert_eq!(frame.alpha, 0.25);
        assert_eq!(frame.scale, 0.5);
        for _ in 0..8 {
            field.tick(&ctx, &player);
        }
        let frame = field.tick(&ctx, &player);
        assert_eq!(frame.alpha, 1.0);
        assert_eq!(frame.scale, 1.0);

        let mut last = frame;
        while !field.is_expired() {
            last = field.tick(&ctx, &player);
        }
        assert!(last.expired);
        assert_eq!(last.age, 20);
        assert_eq!(last.alpha, 0.0);
        assert_eq!(last.scale, 1.0);
    }

    #[test]
    fn test_force_queries() {
        let ctx = EngineContext::new();
        let definition = FieldDefinition::new("well").with_force(PullModeConfig::new(
            0.15,
            15.0,
            crate::force::Falloff::Linear,
        ));
        let field = FieldInstance::spawn(&ctx, definition, PlayerId(6), Vec3::new(0.0, 64.0, 0.0));
        assert!((field.strength_at(7.5) - 0.075).abs() < 1e-6);

        let force = field.force_on(Some(EntityId(1)), Vec3::new(7.5, 64.0, 0.0));
        assert!((force.x + 0.075).abs() < 1e-6, "pulls toward the center: {force:?}");
        assert!(force.y.abs() < 1e-6);

        let bare = FieldInstance::spawn(&ctx, FieldDefinition::new("bare"), PlayerId(7), Vec3::ZERO);
        assert_eq!(bare.force_on(None, Vec3::X), Vec3::ZERO);
        assert_eq!(bare.strength_at(1.0), 0.0);
    }

    #[test]
    fn test_first_tick_delivers_one_shot_forces() {
        let ctx = EngineContext::new();
        let player = PlayerSnapshot::new(PlayerId(8));
        let probe = Vec3::new(2.0, 0.0, 0.0);

        let push = FieldDefinition::new("shove").with_force(PushModeConfig::builder().burst(true).build());
        let mut push = FieldInstance::spawn(&ctx, push, PlayerId(8), Vec3::ZERO);
        push.tick(&ctx, &player);
        let force = push.force_on(None, probe);
        assert!((force - Vec3::new(0.15, 0.075, 0.0)).length() < 1e-6, "burst lands on the first tick: {force:?}");
        push.tick(&ctx, &player);
        assert_eq!(push.force_on(None, probe), Vec3::ZERO, "burst is spent");

        let blast = FieldDefinition::new("blast")
            .with_force(ExplosionModeConfig::builder().burst_duration(1).build());
        let mut blast = FieldInstance::spawn(&ctx, blast, PlayerId(9), Vec3::ZERO);
        blast.tick(&ctx, &player);
        let force = blast.force_on(None, probe);
        assert!((force - Vec3::new(1.2, 0.32, 0.0)).length() < 1e-5, "detonation on the first tick: {force:?}");
        blast.tick(&ctx, &player);
        assert_eq!(blast.force_on(None, probe), Vec3::ZERO);
    }

    #[test]
    fn test_despawn_leaves_successor_alone() {
        let ctx = EngineContext::new();
        let owner = PlayerId(10);
        let old = FieldInstance::spawn(
            &ctx,
            FieldDefinition::new("old")
                .with_trigger(TriggerConfig::builder(FieldEvent::FieldDespawn, TriggerEffect::Flash).build()),
            owner,
            Vec3::ZERO,
        );
        let new = FieldInstance::spawn(
            &ctx,
            FieldDefinition::new("new")
                .with_trigger(TriggerConfig::builder(FieldEvent::FieldDespawn, TriggerEffect::Glow).build()),
            owner,
            Vec3::ZERO,
        );
        let old_processor = Arc::clone(old.processor());

        old.despawn(&ctx);
        assert!(old_processor.lock().is_effect_active(TriggerEffect::Flash), "own despawn rules ran");
        assert!(!new.processor().lock().is_effect_active(TriggerEffect::Glow), "successor untouched");
        let registered = ctx.dispatcher().processor(owner).expect("successor stays registered");
        assert!(Arc::ptr_eq(&registered, new.processor()));

        let new_processor = Arc::clone(new.processor());
        new.despawn(&ctx);
        assert!(new_processor.lock().is_effect_active(TriggerEffect::Glow));
        assert!(!ctx.dispatcher().is_registered(owner));
    }
}
