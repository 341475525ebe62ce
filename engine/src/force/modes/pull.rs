//! PULL - attracts entities toward the field center.

use glam::Vec3;

use crate::force::context::ForceContext;
use crate::force::shape::{Falloff, clamp_radius, clamp_strength};

/// Attraction toward the center, fading to zero at `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullModeConfig {
    strength: f32,
    radius: f32,
    falloff: Falloff,
}

impl Default for PullModeConfig {
    fn default() -> Self {
        Self {
            strength: 0.1,
            radius: 10.0,
            falloff: Falloff::Linear,
        }
    }
}

impl PullModeConfig {
    pub fn new(strength: f32, radius: f32, falloff: Falloff) -> Self {
        let defaults = Self::default();
        Self {
            strength: clamp_strength(strength, defaults.strength),
            radius: clamp_radius(radius, defaults.radius),
            falloff,
        }
    }

    pub fn builder() -> PullModeBuilder {
        PullModeBuilder::default()
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

    /// Pull magnitude at `distance` from the center.
    pub fn strength_at(&self, distance: f32) -> f32 {
        let distance = distance.max(0.0);
        if distance >= self.radius {
            return 0.0;
        }
        self.strength * self.falloff.multiplier(distance / self.radius)
    }

    pub fn force_at(&self, ctx: &ForceContext) -> Vec3 {
        ctx.direction_to_center() * self.strength_at(ctx.distance())
    }
}

#[derive(Debug, Clone)]
pub struct PullModeBuilder {
    config: PullModeConfig,
}

impl Default for PullModeBuilder {
    fn default() -> Self {
        Self {
            config: PullModeConfig::default(),
        }
    }
}

impl PullModeBuilder {
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

    pub fn build(self) -> PullModeConfig {
        let c = self.config;
        PullModeConfig::new(c.strength, c.radius, c.falloff)
    }
}
