//! Force Tests - Strength Profiles and Force Vectors
//!
//! Cross-mode properties of the force library: cutoff at the effective
//! radius, monotonic falloff, and direction of the produced vectors.

use glam::Vec3;
use field_engine::force::modes::{
    ExplosionModeConfig, ImplosionModeConfig, OrbitModeConfig, PullModeConfig, PushModeConfig,
    RingModeConfig, TornadoModeConfig, VortexModeConfig,
};
use field_engine::force::{Axis, Falloff, ForceContext, ForceMode, ForceModeKind};

const EPSILON: f32 = 1e-5;

fn all_defaults() -> Vec<ForceMode> {
    ForceModeKind::ALL.iter().map(|kind| kind.default_mode()).collect()
}

fn samples(radius: f32) -> impl Iterator<Item = f32> {
    (0..=100).map(move |i| radius * i as f32 / 100.0)
}

// ============================================================================
// Cutoff
// ============================================================================

#[test]
fn test_zero_at_and_beyond_effective_radius() {
    for mode in all_defaults() {
        let radius = mode.effective_radius();
        for distance in [radius, radius + 0.5, radius * 2.0, 1_000.0] {
            assert_eq!(
                mode.strength_at(distance),
                0.0,
                "{} should be zero at distance {distance} (effective radius {radius})",
                mode.kind().id()
            );
        }
    }
}

#[test]
fn test_strength_is_finite_everywhere() {
    for mode in all_defaults() {
        for distance in samples(mode.effective_radius() * 1.5) {
            let strength = mode.strength_at(distance);
            assert!(
                strength.is_finite(),
                "{} strength at {distance} is {strength}",
                mode.kind().id()
            );
        }
    }
}

// ============================================================================
// Monotonic falloff
// ============================================================================

#[test]
fn test_linear_falloff_non_increasing() {
    let modes: [ForceMode; 3] = [
        PullModeConfig::new(0.3, 10.0, Falloff::Linear).into(),
        PushModeConfig::builder().falloff(Falloff::Linear).build().into(),
        ExplosionModeConfig::builder().falloff(Falloff::Linear).build().into(),
    ];
    for mode in modes {
        let mut previous = f32::INFINITY;
        for distance in samples(mode.effective_radius()) {
            let strength = mode.strength_at(distance);
            assert!(
                strength <= previous + EPSILON,
                "{} increased at {distance}: {previous} -> {strength}",
                mode.kind().id()
            );
            previous = strength;
        }
    }
}

#[test]
fn test_implosion_non_decreasing_toward_center() {
    let mode = ImplosionModeConfig::default();
    let mut previous = 0.0;
    for distance in samples(mode.suction_radius()).collect::<Vec<_>>().into_iter().rev() {
        let strength = mode.strength_at(distance);
        assert!(
            strength + EPSILON >= previous,
            "implosion weakened moving inward at {distance}: {previous} -> {strength}"
        );
        previous = strength;
    }
    assert_eq!(previous, mode.core_strength());
}

#[test]
fn test_every_falloff_spans_strength_to_zero() {
    for falloff in [
        Falloff::Linear,
        Falloff::Quadratic,
        Falloff::Inverse,
        Falloff::Smooth,
    ] {
        let pull = PullModeConfig::new(0.5, 8.0, falloff);
        assert!((pull.strength_at(0.0) - 0.5).abs() < EPSILON, "{falloff:?} at center");
        assert!(pull.strength_at(7.999) < 0.01, "{falloff:?} near edge");
    }
    let constant = PullModeConfig::new(0.5, 8.0, Falloff::Constant);
    assert_eq!(constant.strength_at(7.9), 0.5);
    assert_eq!(constant.strength_at(8.0), 0.0);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_pull_scenario() {
    let pull = PullModeConfig::new(0.15, 15.0, Falloff::from_id_or_default("linear"));
    assert!((pull.strength_at(0.0) - 0.15).abs() < EPSILON);
    assert_eq!(pull.strength_at(15.0), 0.0);
    assert!((pull.strength_at(7.5) - 0.075).abs() < EPSILON);
}

#[test]
fn test_implosion_scenario() {
    let implosion = ImplosionModeConfig::default();
    assert!((implosion.strength_at(1.0) - 0.4).abs() < EPSILON);
    assert_eq!(implosion.strength_at(25.0), 0.0);
}

// ============================================================================
// Force vectors
// ============================================================================

#[test]
fn test_pull_and_push_oppose() {
    let ctx = ForceContext::probe(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO);
    let pull = ForceMode::from(PullModeConfig::default()).force_at(&ctx);
    let push = ForceMode::from(PushModeConfig::builder().vertical_boost(0.0).build()).force_at(&ctx);
    assert!(pull.z < 0.0, "pull points inward: {pull:?}");
    assert!(push.z > 0.0, "push points outward: {push:?}");
}

#[test]
fn test_vortex_spin_flips_with_clockwise() {
    let ctx = ForceContext::probe(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO);
    let ccw = VortexModeConfig::builder().axis(Axis::Y).build().force_at(&ctx);
    let cw = VortexModeConfig::builder().axis(Axis::Y).clockwise(true).build().force_at(&ctx);
    assert!(ccw.z.abs() > EPSILON, "tangential component present: {ccw:?}");
    assert!((ccw.z + cw.z).abs() < EPSILON, "tangential parts mirror: {ccw:?} vs {cw:?}");
    assert!((ccw.x - cw.x).abs() < EPSILON, "radial parts match: {ccw:?} vs {cw:?}");
}

#[test]
fn test_orbit_rings_alternate() {
    let orbit = OrbitModeConfig::default();
    assert_eq!(orbit.nearest_ring(orbit.ring_radius(1) + 0.2), 1);
    assert_eq!(orbit.ring_speed(0), -orbit.ring_speed(1));
    assert_eq!(orbit.ring_speed(0), orbit.ring_speed(2));
}

#[test]
fn test_tornado_funnel_widens_with_height() {
    let tornado = TornadoModeConfig::default();
    assert_eq!(tornado.radius_at_height(-1.0), tornado.suck_radius());
    assert!(tornado.radius_at_height(10.0) > tornado.radius_at_height(1.0));
    assert_eq!(tornado.radius_at_height(tornado.height() + 1.0), 0.0);

    let inside = ForceContext::probe(Vec3::new(1.0, 2.0, 0.0), Vec3::ZERO);
    assert!(tornado.force_at(&inside).y > 0.0, "funnel lifts");
}

#[test]
fn test_ring_band_is_neutral() {
    let ring = RingModeConfig::builder().orbit_speed(0.0).build();
    assert_eq!(ring.radial_at(ring.ring_radius()), 0.0);
    assert!(ring.radial_at(ring.inner_edge() - 1.0) > 0.0, "pushed outward inside the band");
    assert!(ring.radial_at(ring.outer_edge() + 1.0) < 0.0, "pulled inward outside the band");
}

#[test]
fn test_explosion_burst_decays() {
    let explosion = ExplosionModeConfig::default();
    let mut previous = explosion.burst_multiplier(0);
    assert_eq!(previous, 1.0);
    for tick in 1..explosion.burst_duration() {
        let multiplier = explosion.burst_multiplier(tick);
        assert!(multiplier < previous, "burst should fade at tick {tick}");
        previous = multiplier;
    }
    assert_eq!(explosion.burst_multiplier(explosion.burst_duration()), 0.0);

    let late = ForceContext::new(None, Vec3::X, Vec3::ZERO, explosion.burst_duration() + 1, 0);
    assert_eq!(explosion.force_at(&late), Vec3::ZERO);
}

#[test]
fn test_direction_is_unit_or_zero() {
    let ctx = ForceContext::probe(Vec3::new(2.0, 1.0, -3.0), Vec3::ZERO);
    for mode in all_defaults() {
        let direction = mode.direction_at(&ctx);
        let length = direction.length();
        assert!(
            length.abs() < EPSILON || (length - 1.0).abs() < 1e-4,
            "{} direction has length {length}",
            mode.kind().id()
        );
    }
}
