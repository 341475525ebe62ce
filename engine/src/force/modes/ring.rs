//! RING - keeps entities inside a single circular band.
//!
//! The band `[ring_radius - width / 2, ring_radius + width / 2]` is neutral.
//! Inside it entities are pushed outward, outside it they are pulled inward,
//! ramping up with distance from the band edge. Past `influence_radius`
//! nothing happens.

use glam::Vec3;

use crate::force::context::ForceContext;
use crate::force::shape::{
    MIN_RADIUS, clamp_non_negative, clamp_radius, clamp_strength, project_onto_plane, smoothstep,
    spin_sign, tangent_around,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingModeConfig {
    ring_radius: f32,
    width: f32,
    strength: f32,
    orbit_speed: f32,
    influence_radius: f32,
    smooth_edges: bool,
    clockwise: bool,
}

impl Default for RingModeConfig {
    fn default() -> Self {
        Self {
            ring_radius: 6.0,
            width: 2.0,
            strength: 0.15,
            orbit_speed: 0.1,
            influence_radius: 12.0,
            smooth_edges: true,
            clockwise: false,
        }
    }
}

impl RingModeConfig {
    pub fn new(
        ring_radius: f32,
        width: f32,
        strength: f32,
        orbit_speed: f32,
        influence_radius: f32,
        smooth_edges: bool,
        clockwise: bool,
    ) -> Self {
        let d = Self::default();
        let ring_radius = clamp_radius(ring_radius, d.ring_radius);
        // The band may not swallow the center.
        let width = clamp_radius(width, d.width).min(ring_radius * 2.0);
        let influence_radius = clamp_radius(influence_radius, d.influence_radius)
            .max(ring_radius + width * 0.5 + MIN_RADIUS);
        Self {
            ring_radius,
            width,
            strength: clamp_strength(strength, d.strength),
            orbit_speed: clamp_non_negative(orbit_speed, d.orbit_speed),
            influence_radius,
            smooth_edges,
            clockwise,
        }
    }

    pub fn builder() -> RingModeBuilder {
        RingModeBuilder::default()
    }

    pub fn ring_radius(&self) -> f32 {
        self.ring_radius
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn orbit_speed(&self) -> f32 {
        self.orbit_speed
    }

    pub fn influence_radius(&self) -> f32 {
        self.influence_radius
    }

    pub fn has_smooth_edges(&self) -> bool {
        self.smooth_edges
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn inner_edge(&self) -> f32 {
        self.ring_radius - self.width * 0.5
    }

    pub fn outer_edge(&self) -> f32 {
        self.ring_radius + self.width * 0.5
    }

    pub fn is_in_band(&self, distance: f32) -> bool {
        distance >= self.inner_edge() && distance <= self.outer_edge()
    }

    fn blend(&self, t: f32) -> f32 {
        if self.smooth_edges { smoothstep(t) } else { t.clamp(0.0, 1.0) }
    }

    /// Signed radial strength: positive pushes outward, negative pulls
    /// inward, zero inside the band and beyond the influence radius.
    pub fn radial_at(&self, distance: f32) -> f32 {
        let distance = distance.max(0.0);
        if distance >= self.influence_radius || self.is_in_band(distance) {
            return 0.0;
        }
        if distance < self.inner_edge() {
            let t = (self.inner_edge() - distance) / self.inner_edge();
            self.strength * self.blend(t)
        } else {
            let t = (distance - self.outer_edge()) / (self.influence_radius - self.outer_edge());
            -self.strength * self.blend(t)
        }
    }

    /// Magnitude of the radial correction at `distance`.
    pub fn strength_at(&self, distance: f32) -> f32 {
        self.radial_at(distance).abs()
    }

    /// Signed orbit speed. Full on the ring line, fading to zero one band
    /// width away from it.
    pub fn tangential_speed_at(&self, distance: f32) -> f32 {
        let gap = (distance - self.ring_radius).abs() / self.width;
        if gap >= 1.0 {
            return 0.0;
        }
        spin_sign(self.clockwise) * self.orbit_speed * (1.0 - gap)
    }

    pub fn force_at(&self, ctx: &ForceContext) -> Vec3 {
        let planar = project_onto_plane(ctx.offset(), Vec3::Y);
        let distance = planar.length();
        if distance >= self.influence_radius {
            return Vec3::ZERO;
        }
        let outward = planar.normalize_or_zero();
        let tangent = tangent_around(Vec3::Y, ctx.offset());
        outward * self.radial_at(distance) + tangent * self.tangential_speed_at(distance)
    }
}

#[derive(Debug, Clone)]
pub struct RingModeBuilder {
    config: RingModeConfig,
}

impl Default for RingModeBuilder {
    fn default() -> Self {
        Self {
            config: RingModeConfig::default(),
        }
    }
}

impl RingModeBuilder {
    pub fn ring_radius(mut self, ring_radius: f32) -> Self {
        self.config.ring_radius = ring_radius;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.config.width = width;
        self
    }

    pub fn strength(mut self, strength: f32) -> Self {
        self.config.strength = strength;
        self
    }

    pub fn orbit_speed(mut self, orbit_speed: f32) -> Self {
        self.config.orbit_speed = orbit_speed;
        self
    }

    pub fn influence_radius(mut self, influence_radius: f32) -> Self {
        self.config.influence_radius = influence_radius;
        self
    }

    pub fn smooth_edges(mut self, smooth_edges: bool) -> Self {
        self.config.smooth_edges = smooth_edges;
        self
    }

    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.config.clockwise = clockwise;
        self
    }

    pub fn build(self) -> RingModeConfig {
        let c = self.config;
        RingModeConfig::new(
            c.ring_radius,
            c.width,
            c.strength,
            c.orbit_speed,
            c.influence_radius,
            c.smooth_edges,
            c.clockwise,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_is_neutral() {
        let ring = RingModeConfig::default();
        assert_eq!(ring.inner_edge(), 5.0);
        assert_eq!(ring.outer_edge(), 7.0);
        for d in [5.0, 5.5, 6.0, 6.9, 7.0] {
            assert_eq!(ring.radial_at(d), 0.0, "distance {d}");
        }
    }

    #[test]
    fn test_inside_pushes_out_outside_pulls_in() {
        let ring = RingModeConfig::default();
        assert!(ring.radial_at(2.0) > 0.0);
        assert!(ring.radial_at(9.0) < 0.0);
        assert_eq!(ring.radial_at(12.0), 0.0);
    }

    #[test]
    fn test_linear_vs_smooth_edges() {
        let linear = RingModeConfig::builder().smooth_edges(false).build();
        let smooth = RingModeConfig::default();
        // Quarter of the way from the inner edge to the center.
        let d = 5.0 - 1.25;
        assert!((linear.strength_at(d) - 0.15 * 0.25).abs() < 1e-6);
        assert!((smooth.strength_at(d) - 0.15 * smoothstep(0.25)).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_only_near_band() {
        let ring = RingModeConfig::default();
        assert!((ring.tangential_speed_at(6.0) - 0.1).abs() < 1e-6);
        assert_eq!(ring.tangential_speed_at(8.5), 0.0);
        assert_eq!(ring.tangential_speed_at(1.0), 0.0);
    }

    #[test]
    fn test_width_cannot_cover_center() {
        let ring = RingModeConfig::builder().ring_radius(2.0).width(10.0).build();
        assert_eq!(ring.width(), 4.0);
        assert!(ring.inner_edge() >= 0.0);
    }

    #[test]
    fn test_influence_reaches_past_outer_edge() {
        let ring = RingModeConfig::builder().ring_radius(5.0).width(2.0).influence_radius(1.0).build();
        assert_eq!(ring.influence_radius(), 6.0 + MIN_RADIUS);
    }
}
