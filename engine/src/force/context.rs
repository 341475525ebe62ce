//! Per-tick force context
//!
//! A `ForceContext` snapshots one entity's relationship to a field for one
//! tick. It is built fresh by the caller's loop and never mutated.

use glam::Vec3;

use crate::player::EntityId;

/// Below this distance an entity counts as sitting on the field center and
/// has no defined direction.
pub const CENTER_EPSILON: f32 = 1e-4;

/// Snapshot of an entity inside a field for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceContext {
    /// Entity being pushed (None for a probe point)
    entity: Option<EntityId>,
    /// Entity center of mass in world space
    position: Vec3,
    /// Field reference point in world space
    center: Vec3,
    /// Ticks since the field spawned
    elapsed_ticks: u32,
    /// Total field lifetime in ticks (0 = unbounded)
    total_ticks: u32,
}

impl ForceContext {
    pub fn new(
        entity: Option<EntityId>,
        position: Vec3,
        center: Vec3,
        elapsed_ticks: u32,
        total_ticks: u32,
    ) -> Self {
        Self {
            entity,
            position,
            center,
            elapsed_ticks,
            total_ticks,
        }
    }

    /// Context for a bare point at tick 0 of an unbounded field.
    pub fn probe(position: Vec3, center: Vec3) -> Self {
        Self::new(None, position, center, 0, 0)
    }

    pub fn entity(&self) -> Option<EntityId> {
        self.entity
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    /// Progress through the field lifetime in `[0, 1]`. Unbounded fields
    /// report 0.
    pub fn normalized_time(&self) -> f32 {
        if self.total_ticks == 0 {
            0.0
        } else {
            (self.elapsed_ticks as f32 / self.total_ticks as f32).clamp(0.0, 1.0)
        }
    }

    /// Entity position relative to the field center.
    pub fn offset(&self) -> Vec3 {
        self.position - self.center
    }

    pub fn distance(&self) -> f32 {
        self.offset().length()
    }

    /// Distance measured in the XZ plane.
    pub fn horizontal_distance(&self) -> f32 {
        let offset = self.offset();
        (offset.x * offset.x + offset.z * offset.z).sqrt()
    }

    /// Height above the field center.
    pub fn height(&self) -> f32 {
        self.offset().y
    }

    /// Unit vector from the entity toward the center, zero at the center.
    pub fn direction_to_center(&self) -> Vec3 {
        if self.distance() < CENTER_EPSILON {
            Vec3::ZERO
        } else {
            (-self.offset()).normalize()
        }
    }

    /// Unit vector from the center toward the entity, zero at the center.
    pub fn direction_from_center(&self) -> Vec3 {
        -self.direction_to_center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_geometry() {
        let ctx = ForceContext::probe(Vec3::new(3.0, 0.0, 4.0), Vec3::ZERO);
        assert!((ctx.distance() - 5.0).abs() < 1e-6);
        assert!((ctx.direction_to_center() - Vec3::new(-0.6, 0.0, -0.8)).length() < 1e-6);
        assert!((ctx.direction_from_center() - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_at_center_has_no_direction() {
        let ctx = ForceContext::probe(Vec3::ONE, Vec3::ONE);
        assert_eq!(ctx.direction_to_center(), Vec3::ZERO);
        assert_eq!(ctx.direction_from_center(), Vec3::ZERO);
    }

    #[test]
    fn test_normalized_time() {
        let ctx = ForceContext::new(Some(EntityId(3)), Vec3::ZERO, Vec3::ZERO, 25, 100);
        assert!((ctx.normalized_time() - 0.25).abs() < 1e-6);
        let overrun = ForceContext::new(None, Vec3::ZERO, Vec3::ZERO, 250, 100);
        assert_eq!(overrun.normalized_time(), 1.0);
        let unbounded = ForceContext::new(None, Vec3::ZERO, Vec3::ZERO, 250, 0);
        assert_eq!(unbounded.normalized_time(), 0.0);
    }

    #[test]
    fn test_horizontal_distance_ignores_height() {
        let ctx = ForceContext::probe(Vec3::new(0.0, 10.0, 2.0), Vec3::ZERO);
        assert!((ctx.horizontal_distance() - 2.0).abs() < 1e-6);
        assert!((ctx.height() - 10.0).abs() < 1e-6);
    }
}
