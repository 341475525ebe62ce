//! IMPLOSION - a sink whose pull accelerates toward the center.
//!
//! Between `suction_radius` and `event_horizon` the pull rises from
//! `suction_strength` to `core_strength` along `t^acceleration_curve`.
//! Inside the event horizon it is flat at `core_strength`.

use glam::Vec3;

use crate::force::context::ForceContext;
use crate::force::shape::{MIN_RADIUS, clamp_non_negative, clamp_radius, clamp_strength};

/// Acceleration exponent bounds.
pub const MIN_ACCELERATION_CURVE: f32 = 0.1;
pub const MAX_ACCELERATION_CURVE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImplosionModeConfig {
    suction_radius: f32,
    event_horizon: f32,
    suction_strength: f32,
    core_strength: f32,
    acceleration_curve: f32,
    cannot_escape: bool,
    crush_damage: f32,
}

impl Default for ImplosionModeConfig {
    fn default() -> Self {
        Self {
            suction_radius: 20.0,
            event_horizon: 2.0,
            suction_strength: 0.05,
            core_strength: 0.4,
            acceleration_curve: 2.0,
            cannot_escape: false,
            crush_damage: 0.0,
        }
    }
}

impl ImplosionModeConfig {
    pub fn new(
        suction_radius: f32,
        event_horizon: f32,
        suction_strength: f32,
        core_strength: f32,
        acceleration_curve: f32,
        cannot_escape: bool,
        crush_damage: f32,
    ) -> Self {
        let d = Self::default();
        let suction_radius = clamp_radius(suction_radius, d.suction_radius);
        // Horizon must sit strictly inside the suction radius.
        let event_horizon = clamp_radius(event_horizon, d.event_horizon)
            .min(suction_radius - MIN_RADIUS)
            .max(MIN_RADIUS * 0.5);
        let suction_strength = clamp_strength(suction_strength, d.suction_strength);
        // Pull must not weaken toward the center.
        let core_strength = clamp_strength(core_strength, d.core_strength).max(suction_strength);
        let acceleration_curve = if acceleration_curve.is_finite() {
            acceleration_curve.clamp(MIN_ACCELERATION_CURVE, MAX_ACCELERATION_CURVE)
        } else {
            d.acceleration_curve
        };
        Self {
            suction_radius,
            event_horizon,
            suction_strength,
            core_strength,
            acceleration_curve,
            cannot_escape,
            crush_damage: clamp_non_negative(crush_damage, d.crush_damage),
        }
    }

    pub fn builder() -> ImplosionModeBuilder {
        ImplosionModeBuilder::default()
    }

    pub fn suction_radius(&self) -> f32 {
        self.suction_radius
    }

    pub fn event_horizon(&self) -> f32 {
        self.event_horizon
    }

    pub fn suction_strength(&self) -> f32 {
        self.suction_strength
    }

    pub fn core_strength(&self) -> f32 {
        self.core_strength
    }

    pub fn acceleration_curve(&self) -> f32 {
        self.acceleration_curve
    }

    pub fn cannot_escape(&self) -> bool {
        self.cannot_escape
    }

    pub fn crush_damage(&self) -> f32 {
        self.crush_damage
    }

    pub fn is_inside_horizon(&self, distance: f32) -> bool {
        distance <= self.event_horizon
    }

    /// Whether an entity at `distance` is held regardless of its own motion.
    pub fn is_trapped(&self, distance: f32) -> bool {
        self.cannot_escape && self.is_inside_horizon(distance)
    }

    /// Damage dealt per tick at `distance`; zero outside the horizon.
    pub fn crush_damage_at(&self, distance: f32) -> f32 {
        if self.is_inside_horizon(distance) { self.crush_damage } else { 0.0 }
    }

    pub fn strength_at(&self, distance: f32) -> f32 {
        let distance = distance.max(0.0);
        if distance >= self.suction_radius {
            return 0.0;
        }
        if self.is_inside_horizon(distance) {
            return self.core_strength;
        }
        let span = self.suction_radius - self.event_horizon;
        let t = ((self.suction_radius - distance) / span).clamp(0.0, 1.0);
        self.suction_strength + (self.core_strength - self.suction_strength) * t.powf(self.acceleration_curve)
    }

    pub fn force_at(&self, ctx: &ForceContext) -> Vec3 {
        ctx.direction_to_center() * self.strength_at(ctx.distance())
    }
}

#[derive(Debug, Clone)]
pub struct ImplosionModeBuilder {
    config: ImplosionModeConfig,
}

impl Default for ImplosionModeBuilder {
    fn default() -> Self {
        Self {
            config: ImplosionModeConfig::default(),
        }
    }
}

impl ImplosionModeBuilder {
    pub fn suction_radius(mut self, suction_radius: f32) -> Self {
        self.config.suction_radius = suction_radius;
        self
    }

    pub fn event_horizon(mut self, event_horizon: f32) -> Self {
        self.config.event_horizon = event_horizon;
        self
    }

    pub fn suction_strength(mut self, suction_strength: f32) -> Self {
        self.config.suction_strength = suction_strength;
        self
    }

    pub fn core_strength(mut self, core_strength: f32) -> Self {
        self.config.core_strength = core_strength;
        self
    }

    pub fn acceleration_curve(mut self, acceleration_curve: f32) -> Self {
        self.config.acceleration_curve = acceleration_curve;
        self
    }

    pub fn cannot_escape(mut self, cannot_escape: bool) -> Self {
        self.config.cannot_escape = cannot_escape;
        self
    }

    pub fn crush_damage(mut self, crush_damage: f32) -> Self {
        self.config.crush_damage = crush_damage;
        self
    }

    pub fn build(self) -> ImplosionModeConfig {
        let c = self.config;
        ImplosionModeConfig::new(
            c.suction_radius,
            c.event_horizon,
            c.suction_strength,
            c.core_strength,
            c.acceleration_curve,
            c.cannot_escape,
            c.crush_damage,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let implosion = ImplosionModeConfig::default();
        assert!((implosion.strength_at(1.0) - 0.4).abs() < 1e-6);
        assert_eq!(implosion.strength_at(25.0), 0.0);
        assert_eq!(implosion.strength_at(20.0), 0.0);
        assert!((implosion.strength_at(19.999) - 0.05).abs() < 1e-3);
    }

    #[test]
    fn test_non_decreasing_toward_center() {
        let implosion = ImplosionModeConfig::default();
        let mut previous = 0.0;
        for i in (0..=200).rev() {
            let s = implosion.strength_at(i as f32 * 0.1);
            assert!(s + 1e-6 >= previous, "dropped at distance {}", i as f32 * 0.1);
            previous = s;
        }
    }

    #[test]
    fn test_horizon_flags() {
        let implosion = ImplosionModeConfig::builder().cannot_escape(true).crush_damage(1.5).build();
        assert!(implosion.is_trapped(1.0));
        assert!(!implosion.is_trapped(3.0));
        assert_eq!(implosion.crush_damage_at(1.0), 1.5);
        assert_eq!(implosion.crush_damage_at(3.0), 0.0);
        assert!(!ImplosionModeConfig::default().is_trapped(0.5));
    }

    #[test]
    fn test_clamps() {
        let implosion = ImplosionModeConfig::builder()
            .suction_radius(5.0)
            .event_horizon(9.0)
            .core_strength(0.01)
            .suction_strength(0.2)
            .acceleration_curve(100.0)
            .build();
        assert!(implosion.event_horizon() < implosion.suction_radius());
        assert!(implosion.core_strength() >= implosion.suction_strength());
        assert_eq!(implosion.acceleration_curve(), MAX_ACCELERATION_CURVE);
    }

    #[test]
    fn test_force_points_inward() {
        let implosion = ImplosionModeConfig::default();
        let ctx = ForceContext::probe(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
        assert!(implosion.force_at(&ctx).y < 0.0);
    }
}
