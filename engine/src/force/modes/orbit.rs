//! ORBIT - holds entities on one of several concentric rings and carries
//! them around the center.
//!
//! Rings sit at `base_radius + i * ring_spacing`. An entity is steered
//! toward its nearest ring and moved along it at that ring's signed speed.

use glam::Vec3;

use crate::force::context::ForceContext;
use crate::force::shape::{
    clamp_non_negative, clamp_radius, clamp_strength, project_onto_plane, spin_sign,
    tangent_around,
};

/// Most rings a single orbit field may have.
pub const MAX_RINGS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitModeConfig {
    ring_count: u32,
    base_radius: f32,
    ring_spacing: f32,
    orbit_speed: f32,
    attraction_strength: f32,
    alternate_direction: bool,
    clockwise: bool,
}

impl Default for OrbitModeConfig {
    fn default() -> Self {
        Self {
            ring_count: 3,
            base_radius: 3.0,
            ring_spacing: 3.0,
            orbit_speed: 0.2,
            attraction_strength: 0.05,
            alternate_direction: true,
            clockwise: false,
        }
    }
}

impl OrbitModeConfig {
    pub fn new(
        ring_count: u32,
        base_radius: f32,
        ring_spacing: f32,
        orbit_speed: f32,
        attraction_strength: f32,
        alternate_direction: bool,
        clockwise: bool,
    ) -> Self {
        let d = Self::default();
        Self {
            ring_count: ring_count.clamp(1, MAX_RINGS),
            base_radius: clamp_radius(base_radius, d.base_radius),
            ring_spacing: clamp_radius(ring_spacing, d.ring_spacing),
            orbit_speed: clamp_non_negative(orbit_speed, d.orbit_speed),
            attraction_strength: clamp_strength(attraction_strength, d.attraction_strength),
            alternate_direction,
            clockwise,
        }
    }

    pub fn builder() -> OrbitModeBuilder {
        OrbitModeBuilder::default()
    }

    pub fn ring_count(&self) -> u32 {
        self.ring_count
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn ring_spacing(&self) -> f32 {
        self.ring_spacing
    }

    pub fn orbit_speed(&self) -> f32 {
        self.orbit_speed
    }

    pub fn attraction_strength(&self) -> f32 {
        self.attraction_strength
    }

    pub fn alternates_direction(&self) -> bool {
        self.alternate_direction
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Radius of ring `index`; indices past the last ring clamp to it.
    pub fn ring_radius(&self, index: u32) -> f32 {
        let index = index.min(self.ring_count - 1);
        self.base_radius + index as f32 * self.ring_spacing
    }

    /// Half a ring spacing past the outermost ring.
    pub fn effective_radius(&self) -> f32 {
        self.ring_radius(self.ring_count - 1) + self.ring_spacing * 0.5
    }

    /// Index of the ring closest to `distance`. Ties go to the inner ring.
    pub fn nearest_ring(&self, distance: f32) -> u32 {
        let mut best = 0;
        let mut best_gap = f32::INFINITY;
        for index in 0..self.ring_count {
            let gap = (distance - self.ring_radius(index)).abs();
            if gap < best_gap {
                best = index;
                best_gap = gap;
            }
        }
        best
    }

    /// Signed orbit speed on ring `index`. With alternation on, odd rings
    /// spin the opposite way.
    pub fn ring_speed(&self, index: u32) -> f32 {
        let mut sign = spin_sign(self.clockwise);
        if self.alternate_direction && index % 2 == 1 {
            sign = -sign;
        }
        sign * self.orbit_speed
    }

    /// Corrective pull toward the nearest ring. Zero on a ring and outside
    /// the effective radius.
    pub fn strength_at(&self, distance: f32) -> f32 {
        let distance = distance.max(0.0);
        if distance >= self.effective_radius() {
            return 0.0;
        }
        let ring = self.ring_radius(self.nearest_ring(distance));
        let gap = (distance - ring).abs() / (self.ring_spacing * 0.5);
        self.attraction_strength * gap.min(1.0)
    }

    pub fn force_at(&self, ctx: &ForceContext) -> Vec3 {
        let planar = project_onto_plane(ctx.offset(), Vec3::Y);
        let distance = planar.length();
        if distance >= self.effective_radius() {
            return Vec3::ZERO;
        }
        let ring_index = self.nearest_ring(distance);
        let ring = self.ring_radius(ring_index);
        let outward = planar.normalize_or_zero();
        let toward_ring = if distance > ring { -outward } else { outward };
        let tangent = tangent_around(Vec3::Y, ctx.offset());
        toward_ring * self.strength_at(distance) + tangent * self.ring_speed(ring_index)
    }
}

#[derive(Debug, Clone)]
pub struct OrbitModeBuilder {
    config: OrbitModeConfig,
}

impl Default for OrbitModeBuilder {
    fn default() -> Self {
        Self {
            config: OrbitModeConfig::default(),
        }
    }
}

impl OrbitModeBuilder {
    pub fn ring_count(mut self, ring_count: u32) -> Self {
        self.config.ring_count = ring_count;
        self
    }

    pub fn base_radius(mut self, base_radius: f32) -> Self {
        self.config.base_radius = base_radius;
        self
    }

    pub fn ring_spacing(mut self, ring_spacing: f32) -> Self {
        self.config.ring_spacing = ring_spacing;
        self
    }

    pub fn orbit_speed(mut self, orbit_speed: f32) -> Self {
        self.config.orbit_speed = orbit_speed;
        self
    }

    pub fn attraction_strength(mut self, attraction_strength: f32) -> Self {
        self.config.attraction_strength = attraction_strength;
        self
    }

    pub fn alternate_direction(mut self, alternate_direction: bool) -> Self {
        self.config.alternate_direction = alternate_direction;
        self
    }

    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.config.clockwise = clockwise;
        self
    }

    pub fn build(self) -> OrbitModeConfig {
        let c = self.config;
        OrbitModeConfig::new(
            c.ring_count,
            c.base_radius,
            c.ring_spacing,
            c.orbit_speed,
            c.attraction_strength,
            c.alternate_direction,
            c.clockwise,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_layout() {
        let orbit = OrbitModeConfig::default();
        assert_eq!(orbit.ring_radius(0), 3.0);
        assert_eq!(orbit.ring_radius(2), 9.0);
        assert_eq!(orbit.ring_radius(99), 9.0);
        assert_eq!(orbit.effective_radius(), 10.5);
    }

    #[test]
    fn test_nearest_ring() {
        let orbit = OrbitModeConfig::default();
        assert_eq!(orbit.nearest_ring(0.0), 0);
        assert_eq!(orbit.nearest_ring(5.0), 1);
        assert_eq!(orbit.nearest_ring(8.0), 2);
        assert_eq!(orbit.nearest_ring(50.0), 2);
    }

    #[test]
    fn test_alternating_speeds() {
        let orbit = OrbitModeConfig::default();
        assert!(orbit.ring_speed(0) > 0.0);
        assert!(orbit.ring_speed(1) < 0.0);
        assert!(orbit.ring_speed(2) > 0.0);

        let same_way = OrbitModeConfig::builder().alternate_direction(false).clockwise(true).build();
        assert!(same_way.ring_speed(0) < 0.0);
        assert!(same_way.ring_speed(1) < 0.0);
    }

    #[test]
    fn test_on_ring_no_correction() {
        let orbit = OrbitModeConfig::default();
        assert_eq!(orbit.strength_at(6.0), 0.0);
        assert!(orbit.strength_at(4.5) > 0.0);
        assert_eq!(orbit.strength_at(orbit.effective_radius()), 0.0);
    }

    #[test]
    fn test_force_steers_toward_ring() {
        let orbit = OrbitModeConfig::default();
        // Between ring 0 (3.0) and ring 1 (6.0) but nearer ring 1, inside it.
        let ctx = ForceContext::probe(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO);
        let force = orbit.force_at(&ctx);
        assert!(force.x > 0.0, "should be pushed out toward ring 1");
        assert!(force.z > 0.0, "ring 1 spins clockwise when alternating");
    }

    #[test]
    fn test_ring_count_clamped() {
        assert_eq!(OrbitModeConfig::builder().ring_count(0).build().ring_count(), 1);
        assert_eq!(OrbitModeConfig::builder().ring_count(40).build().ring_count(), MAX_RINGS);
    }
}
