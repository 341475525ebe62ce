//! VORTEX - spins entities around an axis while drawing them inward.

use glam::Vec3;

use crate::force::context::ForceContext;
use crate::force::shape::{
    Axis, clamp_non_negative, clamp_radius, clamp_strength, project_onto_plane, spin_sign,
    tangent_around,
};

/// Maximum `tightness`; beyond this the radial term swamps the spin.
pub const MAX_TIGHTNESS: f32 = 4.0;

/// Swirl around `axis` with a linear fade to the edge of `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VortexModeConfig {
    radius: f32,
    radial_strength: f32,
    tangential_strength: f32,
    tightness: f32,
    axis: Axis,
    clockwise: bool,
}

impl Default for VortexModeConfig {
    fn default() -> Self {
        Self {
            radius: 12.0,
            radial_strength: 0.05,
            tangential_strength: 0.15,
            tightness: 1.0,
            axis: Axis::Y,
            clockwise: false,
        }
    }
}

impl VortexModeConfig {
    pub fn new(
        radius: f32,
        radial_strength: f32,
        tangential_strength: f32,
        tightness: f32,
        axis: Axis,
        clockwise: bool,
    ) -> Self {
        let d = Self::default();
        Self {
            radius: clamp_radius(radius, d.radius),
            radial_strength: clamp_non_negative(radial_strength, d.radial_strength),
            tangential_strength: clamp_strength(tangential_strength, d.tangential_strength),
            tightness: clamp_non_negative(tightness, d.tightness).min(MAX_TIGHTNESS),
            axis,
            clockwise,
        }
    }

    pub fn builder() -> VortexModeBuilder {
        VortexModeBuilder::default()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn radial_strength(&self) -> f32 {
        self.radial_strength
    }

    pub fn tangential_strength(&self) -> f32 {
        self.tangential_strength
    }

    pub fn tightness(&self) -> f32 {
        self.tightness
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    fn fade(&self, distance: f32) -> f32 {
        let distance = distance.max(0.0);
        if distance >= self.radius {
            0.0
        } else {
            1.0 - distance / self.radius
        }
    }

    /// Inward pull at `distance`.
    pub fn radial_pull_at(&self, distance: f32) -> f32 {
        self.radial_strength * self.tightness * self.fade(distance)
    }

    /// Signed spin speed at `distance`; negative when clockwise.
    pub fn tangential_speed_at(&self, distance: f32) -> f32 {
        spin_sign(self.clockwise) * self.tangential_strength * self.fade(distance)
    }

    /// Magnitude of the combined radial and tangential force.
    pub fn strength_at(&self, distance: f32) -> f32 {
        let radial = self.radial_pull_at(distance);
        let tangential = self.tangential_speed_at(distance);
        (radial * radial + tangential * tangential).sqrt()
    }

    /// Distance measured perpendicular to the rotation axis.
    pub fn axial_distance(&self, ctx: &ForceContext) -> f32 {
        project_onto_plane(ctx.offset(), self.axis.unit()).length()
    }

    pub fn force_at(&self, ctx: &ForceContext) -> Vec3 {
        let axis = self.axis.unit();
        let planar = project_onto_plane(ctx.offset(), axis);
        let distance = planar.length();
        if distance >= self.radius {
            return Vec3::ZERO;
        }
        let inward = -planar.normalize_or_zero();
        let tangent = tangent_around(axis, ctx.offset());
        inward * self.radial_pull_at(distance) + tangent * self.tangential_speed_at(distance)
    }
}

#[derive(Debug, Clone)]
pub struct VortexModeBuilder {
    config: VortexModeConfig,
}

impl Default for VortexModeBuilder {
    fn default() -> Self {
        Self {
            config: VortexModeConfig::default(),
        }
    }
}

impl VortexModeBuilder {
    pub fn radius(mut self, radius: f32) -> Self {
        self.config.radius = radius;
        self
    }

    pub fn radial_strength(mut self, radial_strength: f32) -> Self {
        self.config.radial_strength = radial_strength;
        self
    }

    pub fn tangential_strength(mut self, tangential_strength: f32) -> Self {
        self.config.tangential_strength = tangential_strength;
        self
    }

    pub fn tightness(mut self, tightness: f32) -> Self {
        self.config.tightness = tightness;
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.config.axis = axis;
        self
    }

    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.config.clockwise = clockwise;
        self
    }

    pub fn build(self) -> VortexModeConfig {
        let c = self.config;
        VortexModeConfig::new(
            c.radius,
            c.radial_strength,
            c.tangential_strength,
            c.tightness,
            c.axis,
            c.clockwise,
        )
    }
}
