//! Trigger Processor
//!
//! Owns one field instance's trigger rules and the triggers currently
//! playing. Queried once per tick by whoever renders the field.

use std::sync::Arc;

use glam::Vec3;

use super::active::ActiveTrigger;
use super::config::{TriggerConfig, TriggerEffect};
use super::event::FieldEvent;

#[derive(Debug)]
pub struct TriggerProcessor {
    rules: Vec<Arc<TriggerConfig>>,
    active: Vec<ActiveTrigger>,
    rng: fastrand::Rng,
}

impl TriggerProcessor {
    pub fn new(rules: impl IntoIterator<Item = TriggerConfig>) -> Self {
        Self::with_rng(rules, fastrand::Rng::new())
    }

    /// Reproducible shake jitter.
    pub fn with_seed(rules: impl IntoIterator<Item = TriggerConfig>, seed: u64) -> Self {
        Self::with_rng(rules, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rules: impl IntoIterator<Item = TriggerConfig>, rng: fastrand::Rng) -> Self {
        Self {
            rules: rules.into_iter().map(Arc::new).collect(),
            active: Vec::new(),
            rng,
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = &TriggerConfig> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Start one trigger per rule matching `event`. Returns how many started.
    pub fn fire_event(&mut self, event: FieldEvent) -> usize {
        let before = self.active.len();
        for rule in self.rules.iter().filter(|rule| rule.matches(event)) {
            log::debug!("{event} fired {} for {} ticks", rule.effect().id(), rule.duration());
            self.active.push(ActiveTrigger::new(Arc::clone(rule)));
        }
        self.active.len() - before
    }

    /// Advance every active trigger and drop the ones that expired.
    pub fn tick(&mut self) {
        self.active.retain_mut(|trigger| trigger.tick());
    }

    pub fn has_active_triggers(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn active_triggers(&self) -> &[ActiveTrigger] {
        &self.active
    }

    pub fn is_effect_active(&self, effect: TriggerEffect) -> bool {
        self.active.iter().any(|trigger| trigger.effect() == effect)
    }

    /// Strongest scaled value among active triggers of `effect`, 0 if none.
    pub fn effect_value(&self, effect: TriggerEffect) -> f32 {
        self.active
            .iter()
            .filter(|trigger| trigger.effect() == effect)
            .map(ActiveTrigger::scaled_value)
            .reduce(f32::max)
            .unwrap_or(0.0)
    }

    /// Whether a trigger currently overrides the bound value of `property`.
    pub fn is_overriding(&self, property: &str) -> bool {
        TriggerEffect::overriding(property).is_some_and(|effect| self.is_effect_active(effect))
    }

    /// The overriding value for `property`, if a trigger owns it right now.
    pub fn override_value(&self, property: &str) -> Option<f32> {
        let effect = TriggerEffect::overriding(property)?;
        self.is_effect_active(effect).then(|| self.effect_value(effect))
    }

    /// Random jitter in `[-1, 1]³` scaled by the current shake magnitude.
    /// Different on every call.
    pub fn shake_offset(&mut self) -> Vec3 {
        let magnitude = self.effect_value(TriggerEffect::Shake);
        if magnitude <= 0.0 {
            return Vec3::ZERO;
        }
        let mut axis = || self.rng.f32() * 2.0 - 1.0;
        Vec3::new(axis(), axis(), axis()) * magnitude
    }

    fn first_flash(&self) -> Option<&ActiveTrigger> {
        self.active.iter().find(|trigger| trigger.effect() == TriggerEffect::Flash)
    }

    /// Color of the first active FLASH trigger.
    pub fn flash_color(&self) -> Option<&str> {
        self.first_flash().and_then(|trigger| trigger.config().color())
    }

    /// Magnitude of the first active FLASH trigger, 0 if none.
    pub fn flash_intensity(&self) -> f32 {
        self.first_flash().map_or(0.0, ActiveTrigger::scaled_value)
    }

    /// Drop every active trigger.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}
