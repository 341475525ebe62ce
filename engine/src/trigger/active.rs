//! A running trigger instance.
//!
//! Two states only: running while `remaining > 0`, expired once it hits 0.
//! The owning processor drops expired instances on the same tick.

use std::f32::consts::PI;
use std::sync::Arc;

use super::config::{TriggerConfig, TriggerEffect};

/// Hold-style effects start fading once progress passes this point.
pub const FADE_START: f32 = 0.8;

#[derive(Debug, Clone)]
pub struct ActiveTrigger {
    config: Arc<TriggerConfig>,
    remaining: u32,
    total: u32,
}

impl ActiveTrigger {
    pub fn new(config: Arc<TriggerConfig>) -> Self {
        let total = config.duration().max(1);
        Self {
            config,
            remaining: total,
            total,
        }
    }

    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    pub fn effect(&self) -> TriggerEffect {
        self.config.effect()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Advance one tick. Returns whether the trigger is still running.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_active()
    }

    /// `0` on creation, `1` at expiry.
    pub fn progress(&self) -> f32 {
        1.0 - self.remaining as f32 / self.total as f32
    }

    /// Unscaled animation value in `[0, 1]`.
    pub fn effect_value(&self) -> f32 {
        let progress = self.progress();
        if self.effect().completes_naturally() {
            (progress * PI).sin().max(0.0)
        } else if progress < FADE_START {
            1.0
        } else {
            ((1.0 - progress) / (1.0 - FADE_START)).clamp(0.0, 1.0)
        }
    }

    /// Effect value in the units the effect's consumer expects.
    pub fn scaled_value(&self) -> f32 {
        let value = self.effect_value();
        match self.effect() {
            TriggerEffect::Pulse => 1.0 + (self.config.scale() - 1.0) * value,
            TriggerEffect::Shake => self.config.amplitude() * value,
            TriggerEffect::Glow => self.config.intensity() * value,
            TriggerEffect::Flash | TriggerEffect::ColorShift => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::event::FieldEvent;

    fn trigger(effect: TriggerEffect, duration: u32) -> ActiveTrigger {
        ActiveTrigger::new(Arc::new(
            TriggerConfig::builder(FieldEvent::PlayerDamage, effect)
                .duration(duration)
                .scale(1.5)
                .amplitude(0.4)
                .intensity(2.0)
                .build(),
        ))
    }

    #[test]
    fn test_expires_after_duration() {
        let mut active = trigger(TriggerEffect::Flash, 6);
        assert_eq!(active.progress(), 0.0);
        for _ in 0..5 {
            assert!(active.tick());
        }
        assert!(!active.tick());
        assert!(!active.is_active());
        assert_eq!(active.progress(), 1.0);
        // Further ticks stay expired.
        assert!(!active.tick());
        assert_eq!(active.remaining(), 0);
    }

    #[test]
    fn test_natural_effects_peak_mid_way() {
        let mut active = trigger(TriggerEffect::Pulse, 10);
        assert!(active.effect_value().abs() < 1e-6);
        for _ in 0..5 {
            active.tick();
        }
        assert!((active.effect_value() - 1.0).abs() < 1e-6);
        assert!((active.scaled_value() - 1.5).abs() < 1e-6);
        for _ in 0..5 {
            active.tick();
        }
        assert!(active.effect_value().abs() < 1e-5);
    }

    #[test]
    fn test_hold_effects_fade_in_last_fifth() {
        let mut active = trigger(TriggerEffect::Glow, 10);
        for _ in 0..8 {
            assert_eq!(active.effect_value(), 1.0);
            active.tick();
        }
        // progress 0.8
        assert!((active.effect_value() - 1.0).abs() < 1e-5);
        active.tick();
        // progress 0.9
        assert!((active.effect_value() - 0.5).abs() < 1e-5);
        assert!((active.scaled_value() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_shake_scaled_by_amplitude() {
        let mut active = trigger(TriggerEffect::Shake, 4);
        active.tick();
        active.tick();
        assert!((active.scaled_value() - 0.4).abs() < 1e-6);
    }
}
