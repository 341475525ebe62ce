//! TORNADO - a funnel that widens with height, lifting and spinning
//! everything inside it.
//!
//! Above the ground plane (`y >= 0` relative to the center) the funnel
//! radius is `base_radius + y * funnel_factor`, up to `height`. Below the
//! ground plane the intake zone has a fixed `suck_radius` and drags entities
//! toward the funnel axis.

use glam::Vec3;

use crate::force::context::ForceContext;
use crate::force::shape::{
    clamp_non_negative, clamp_radius, clamp_strength, project_onto_plane, spin_sign,
    tangent_around,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TornadoModeConfig {
    height: f32,
    base_radius: f32,
    funnel_factor: f32,
    lift_speed: f32,
    spin_speed: f32,
    pull_strength: f32,
    suck_radius: f32,
    suck_strength: f32,
    clockwise: bool,
}

impl Default for TornadoModeConfig {
    fn default() -> Self {
        Self {
            height: 20.0,
            base_radius: 2.0,
            funnel_factor: 0.4,
            lift_speed: 0.3,
            spin_speed: 0.4,
            pull_strength: 0.1,
            suck_radius: 6.0,
            suck_strength: 0.15,
            clockwise: false,
        }
    }
}

impl TornadoModeConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        height: f32,
        base_radius: f32,
        funnel_factor: f32,
        lift_speed: f32,
        spin_speed: f32,
        pull_strength: f32,
        suck_radius: f32,
        suck_strength: f32,
        clockwise: bool,
    ) -> Self {
        let d = Self::default();
        Self {
            height: clamp_radius(height, d.height),
            base_radius: clamp_radius(base_radius, d.base_radius),
            funnel_factor: clamp_non_negative(funnel_factor, d.funnel_factor),
            lift_speed: clamp_non_negative(lift_speed, d.lift_speed),
            spin_speed: clamp_strength(spin_speed, d.spin_speed),
            pull_strength: clamp_non_negative(pull_strength, d.pull_strength),
            suck_radius: clamp_radius(suck_radius, d.suck_radius),
            suck_strength: clamp_non_negative(suck_strength, d.suck_strength),
            clockwise,
        }
    }

    pub fn builder() -> TornadoModeBuilder {
        TornadoModeBuilder::default()
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn funnel_factor(&self) -> f32 {
        self.funnel_factor
    }

    pub fn lift_speed(&self) -> f32 {
        self.lift_speed
    }

    pub fn spin_speed(&self) -> f32 {
        self.spin_speed
    }

    pub fn pull_strength(&self) -> f32 {
        self.pull_strength
    }

    pub fn suck_radius(&self) -> f32 {
        self.suck_radius
    }

    pub fn suck_strength(&self) -> f32 {
        self.suck_strength
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Funnel radius at height `y`. Below ground this is the intake radius;
    /// above `height` the funnel has ended and the radius is 0.
    pub fn radius_at_height(&self, y: f32) -> f32 {
        if y < 0.0 {
            self.suck_radius
        } else if y > self.height {
            0.0
        } else {
            self.base_radius + y * self.funnel_factor
        }
    }

    /// Widest point of the funnel or intake.
    pub fn max_radius(&self) -> f32 {
        self.radius_at_height(self.height).max(self.suck_radius)
    }

    /// Signed spin speed; negative when clockwise.
    pub fn signed_spin_speed(&self) -> f32 {
        spin_sign(self.clockwise) * self.spin_speed
    }

    /// Axis-ward pull at horizontal `distance` and height `y`.
    pub fn strength_at_height(&self, distance: f32, y: f32) -> f32 {
        let distance = distance.max(0.0);
        let radius = self.radius_at_height(y);
        if radius <= 0.0 || distance >= radius {
            return 0.0;
        }
        let strength = if y < 0.0 { self.suck_strength } else { self.pull_strength };
        // Stronger toward the funnel wall, keeping entities inside it.
        strength * (distance / radius)
    }

    /// Strength measured at ground level.
    pub fn strength_at(&self, distance: f32) -> f32 {
        let distance = distance.max(0.0);
        if distance >= self.radius_at_height(0.0) {
            return 0.0;
        }
        self.strength_at_height(distance, 0.0) + self.lift_speed + self.spin_speed
    }

    pub fn is_inside(&self, ctx: &ForceContext) -> bool {
        let radius = self.radius_at_height(ctx.height());
        radius > 0.0 && ctx.horizontal_distance() < radius
    }

    pub fn force_at(&self, ctx: &ForceContext) -> Vec3 {
        if !self.is_inside(ctx) {
            return Vec3::ZERO;
        }
        let y = ctx.height();
        let distance = ctx.horizontal_distance();
        let inward = -project_onto_plane(ctx.offset(), Vec3::Y).normalize_or_zero();
        let pull = inward * self.strength_at_height(distance, y);
        let lift = Vec3::Y * self.lift_speed;
        if y < 0.0 {
            // Intake zone: drag in and up, no spin yet.
            return pull + lift;
        }
        let spin = tangent_around(Vec3::Y, ctx.offset()) * self.signed_spin_speed();
        pull + lift + spin
    }
}

#[derive(Debug, Clone)]
pub struct TornadoModeBuilder {
    config: TornadoModeConfig,
}

impl Default for TornadoModeBuilder {
    fn default() -> Self {
        Self {
            config: TornadoModeConfig::default(),
        }
    }
}

impl TornadoModeBuilder {
    pub fn height(mut self, height: f32) -> Self {
        self.config.height = height;
        self
    }

    pub fn base_radius(mut self, base_radius: f32) -> Self {
        self.config.base_radius = base_radius;
        self
    }

    pub fn funnel_factor(mut self, funnel_factor: f32) -> Self {
        self.config.funnel_factor = funnel_factor;
        self
    }

    pub fn lift_speed(mut self, lift_speed: f32) -> Self {
        self.config.lift_speed = lift_speed;
        self
    }

    pub fn spin_speed(mut self, spin_speed: f32) -> Self {
        self.config.spin_speed = spin_speed;
        self
    }

    pub fn pull_strength(mut self, pull_strength: f32) -> Self {
        self.config.pull_strength = pull_strength;
        self
    }

    pub fn suck_radius(mut self, suck_radius: f32) -> Self {
        self.config.suck_radius = suck_radius;
        self
    }

    pub fn suck_strength(mut self, suck_strength: f32) -> Self {
        self.config.suck_strength = suck_strength;
        self
    }

    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.config.clockwise = clockwise;
        self
    }

    /// Re-validates every field through [`TornadoModeConfig::new`].
    pub fn build(self) -> TornadoModeConfig {
        let c = self.config;
        TornadoModeConfig::new(
            c.height,
            c.base_radius,
            c.funnel_factor,
            c.lift_speed,
            c.spin_speed,
            c.pull_strength,
            c.suck_radius,
            c.suck_strength,
            c.clockwise,
        )
    }
}
