//! PUSH - repels entities away from the field center with an upward kick.
//!
//! Two application styles:
//! - burst: the full push lands on the spawn tick only
//! - sustained: the push repeats every tick, scaled by `burst_decay^elapsed`
//!   (a `burst_decay` of 1.0 never fades)

use glam::Vec3;

use crate::force::context::ForceContext;
use crate::force::shape::{Falloff, clamp_non_negative, clamp_radius, clamp_strength};

/// Repulsion away from the center, fading to zero at `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushModeConfig {
    strength: f32,
    radius: f32,
    falloff: Falloff,
    vertical_boost: f32,
    burst: bool,
    burst_decay: f32,
}

impl Default for PushModeConfig {
    fn default() -> Self {
        Self {
            strength: 0.2,
            radius: 8.0,
            falloff: Falloff::Linear,
            vertical_boost: 0.1,
            burst: false,
            burst_decay: 1.0,
        }
    }
}

impl PushModeConfig {
    pub fn new(
        strength: f32,
        radius: f32,
        falloff: Falloff,
        vertical_boost: f32,
        burst: bool,
        burst_decay: f32,
    ) -> Self {
        let defaults = Self::default();
        let burst_decay = if burst_decay.is_nan() {
            defaults.burst_decay
        } else {
            burst_decay.clamp(0.0, 1.0)
        };
        Self {
            strength: clamp_strength(strength, defaults.strength),
            radius: clamp_radius(radius, defaults.radius),
            falloff,
            vertical_boost: clamp_non_negative(vertical_boost, defaults.vertical_boost),
            burst,
            burst_decay,
        }
    }

    pub fn builder() -> PushModeBuilder {
        PushModeBuilder::default()
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn falloff(&self) -> Falloff {
        self.falloff
    }

    pub fn vertical_boost(&self) -> f32 {
        self.vertical_boost
    }

    pub fn is_burst(&self) -> bool {
        self.burst
    }

    pub fn burst_decay(&self) -> f32 {
        self.burst_decay
    }

    fn falloff_at(&self, distance: f32) -> f32 {
        let distance = distance.max(0.0);
        if distance >= self.radius {
            return 0.0;
        }
        self.falloff.multiplier(distance / self.radius)
    }

    /// Horizontal/radial push magnitude at `distance`.
    pub fn strength_at(&self, distance: f32) -> f32 {
        self.strength * self.falloff_at(distance)
    }

    /// Upward component at `distance`, shaped by the same falloff.
    pub fn vertical_at(&self, distance: f32) -> f32 {
        self.vertical_boost * self.falloff_at(distance)
    }

    /// How much of the push applies on tick `elapsed` of the field.
    pub fn application_multiplier(&self, elapsed: u32) -> f32 {
        if self.burst {
            if elapsed == 0 { 1.0 } else { 0.0 }
        } else if self.burst_decay >= 1.0 {
            1.0
        } else {
            self.burst_decay.powi(elapsed.min(i32::MAX as u32) as i32)
        }
    }

    pub fn force_at(&self, ctx: &ForceContext) -> Vec3 {
        let distance = ctx.distance();
        let multiplier = self.application_multiplier(ctx.elapsed_ticks());
        if multiplier <= 0.0 {
            return Vec3::ZERO;
        }
        let radial = ctx.direction_from_center() * self.strength_at(distance);
        let lift = Vec3::Y * self.vertical_at(distance);
        (radial + lift) * multiplier
    }
}

#[derive(Debug, Clone)]
pub struct PushModeBuilder {
    config: PushModeConfig,
}

impl Default for PushModeBuilder {
    fn default() -> Self {
        Self {
            config: PushModeConfig::default(),
        }
    }
}

impl PushModeBuilder {
    pub fn strength(mut self, strength: f32) -> Self {
        self.config.strength = strength;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.config.radius = radius;
        self
    }

    pub fn falloff(mut self, falloff: Falloff) -> Self {
        self.config.falloff = falloff;
        self
    }

    pub fn vertical_boost(mut self, vertical_boost: f32) -> Self {
        self.config.vertical_boost = vertical_boost;
        self
    }

    pub fn burst(mut self, burst: bool) -> Self {
        self.config.burst = burst;
        self
    }

    pub fn burst_decay(mut self, burst_decay: f32) -> Self {
        self.config.burst_decay = burst_decay;
        self
    }

    pub fn build(self) -> PushModeConfig {
        let c = self.config;
        PushModeConfig::new(
            c.strength,
            c.radius,
            c.falloff,
            c.vertical_boost,
            c.burst,
            c.burst_decay,
        )
    }
}
