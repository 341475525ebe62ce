//! EXPLOSION - an outward blast over one or a few ticks.
//!
//! `strength_at` shapes the blast by distance; `burst_multiplier` shapes it
//! over time: `(1 - tick / burst_duration)^decay_exponent`, zero once the
//! burst is over. A `burst_duration` of 1 is a single-tick blast.

use glam::Vec3;

use crate::force::context::ForceContext;
use crate::force::shape::{Falloff, clamp_non_negative, clamp_radius, clamp_strength};

/// Longest burst accepted, in ticks.
pub const MAX_BURST_DURATION: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionModeConfig {
    blast_radius: f32,
    blast_strength: f32,
    falloff: Falloff,
    vertical_boost: f32,
    burst_duration: u32,
    decay_exponent: f32,
    ignore_knockback_resistance: bool,
}

impl Default for ExplosionModeConfig {
    fn default() -> Self {
        Self {
            blast_radius: 10.0,
            blast_strength: 1.5,
            falloff: Falloff::Linear,
            vertical_boost: 0.4,
            burst_duration: 5,
            decay_exponent: 2.0,
            ignore_knockback_resistance: false,
        }
    }
}

impl ExplosionModeConfig {
    pub fn new(
        blast_radius: f32,
        blast_strength: f32,
        falloff: Falloff,
        vertical_boost: f32,
        burst_duration: u32,
        decay_exponent: f32,
        ignore_knockback_resistance: bool,
    ) -> Self {
        let d = Self::default();
        let decay_exponent = if decay_exponent.is_finite() {
            decay_exponent.clamp(0.1, 8.0)
        } else {
            d.decay_exponent
        };
        Self {
            blast_radius: clamp_radius(blast_radius, d.blast_radius),
            blast_strength: clamp_strength(blast_strength, d.blast_strength),
            falloff,
            vertical_boost: clamp_non_negative(vertical_boost, d.vertical_boost),
            burst_duration: burst_duration.clamp(1, MAX_BURST_DURATION),
            decay_exponent,
            ignore_knockback_resistance,
        }
    }

    pub fn builder() -> ExplosionModeBuilder {
        ExplosionModeBuilder::default()
    }

    pub fn blast_radius(&self) -> f32 {
        self.blast_radius
    }

    pub fn blast_strength(&self) -> f32 {
        self.blast_strength
    }

    pub fn falloff(&self) -> Falloff {
        self.falloff
    }

    pub fn vertical_boost(&self) -> f32 {
        self.vertical_boost
    }

    pub fn burst_duration(&self) -> u32 {
        self.burst_duration
    }

    pub fn decay_exponent(&self) -> f32 {
        self.decay_exponent
    }

    pub fn ignores_knockback_resistance(&self) -> bool {
        self.ignore_knockback_resistance
    }

    pub fn is_one_shot(&self) -> bool {
        self.burst_duration == 1
    }

    fn falloff_at(&self, distance: f32) -> f32 {
        let distance = distance.max(0.0);
        if distance >= self.blast_radius {
            return 0.0;
        }
        self.falloff.multiplier(distance / self.blast_radius)
    }

    pub fn strength_at(&self, distance: f32) -> f32 {
        self.blast_strength * self.falloff_at(distance)
    }

    pub fn vertical_at(&self, distance: f32) -> f32 {
        self.vertical_boost * self.falloff_at(distance)
    }

    /// Time shaping for tick `tick_in_burst` (0 = detonation).
    pub fn burst_multiplier(&self, tick_in_burst: u32) -> f32 {
        if tick_in_burst >= self.burst_duration {
            return 0.0;
        }
        let remaining = 1.0 - tick_in_burst as f32 / self.burst_duration as f32;
        remaining.powf(self.decay_exponent)
    }

    /// Scale a strength by the target's knockback resistance in `[0, 1]`.
    pub fn apply_knockback_resistance(&self, strength: f32, resistance: f32) -> f32 {
        if self.ignore_knockback_resistance {
            strength
        } else {
            strength * (1.0 - resistance.clamp(0.0, 1.0))
        }
    }

    pub fn force_at(&self, ctx: &ForceContext) -> Vec3 {
        let multiplier = self.burst_multiplier(ctx.elapsed_ticks());
        if multiplier <= 0.0 {
            return Vec3::ZERO;
        }
        let distance = ctx.distance();
        let mut outward = ctx.direction_from_center();
        if outward == Vec3::ZERO {
            // Dead center: blow straight up.
            outward = Vec3::Y;
        }
        let blast = outward * self.strength_at(distance) + Vec3::Y * self.vertical_at(distance);
        blast * multiplier
    }
}

#[derive(Debug, Clone)]
pub struct ExplosionModeBuilder {
    config: ExplosionModeConfig,
}

impl Default for ExplosionModeBuilder {
    fn default() -> Self {
        Self {
            config: ExplosionModeConfig::default(),
        }
    }
}

impl ExplosionModeBuilder {
    pub fn blast_radius(mut self, blast_radius: f32) -> Self {
        self.config.blast_radius = blast_radius;
        self
    }

    pub fn blast_strength(mut self, blast_strength: f32) -> Self {
        self.config.blast_strength = blast_strength;
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

    pub fn burst_duration(mut self, burst_duration: u32) -> Self {
        self.config.burst_duration = burst_duration;
        self
    }

    pub fn decay_exponent(mut self, decay_exponent: f32) -> Self {
        self.config.decay_exponent = decay_exponent;
        self
    }

    pub fn ignore_knockback_resistance(mut self, ignore: bool) -> Self {
        self.config.ignore_knockback_resistance = ignore;
        self
    }

    pub fn build(self) -> ExplosionModeConfig {
        let c = self.config;
        ExplosionModeConfig::new(
            c.blast_radius,
            c.blast_strength,
            c.falloff,
            c.vertical_boost,
            c.burst_duration,
            c.decay_exponent,
            c.ignore_knockback_resistance,
        )
    }
}
