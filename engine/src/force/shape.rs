//! Shared building blocks for force modes: falloff curves, rotation axes,
//! and the clamping rules every mode config applies at construction.

use glam::Vec3;

use crate::config::json::normalize_ident;

/// Smallest radius any mode accepts (blocks).
pub const MIN_RADIUS: f32 = 0.1;

/// Smallest strength any mode accepts.
pub const MIN_STRENGTH: f32 = 0.001;

/// Steepness of [`Falloff::Inverse`].
const INVERSE_STEEPNESS: f32 = 4.0;

/// Clamp a radius to `[MIN_RADIUS, ∞)`. NaN and infinities fall back to
/// `default`.
pub fn clamp_radius(value: f32, default: f32) -> f32 {
    if value.is_finite() { value.max(MIN_RADIUS) } else { default }
}

/// Clamp a strength to `[MIN_STRENGTH, ∞)`. NaN and infinities fall back to
/// `default`.
pub fn clamp_strength(value: f32, default: f32) -> f32 {
    if value.is_finite() { value.max(MIN_STRENGTH) } else { default }
}

/// Clamp a signed speed or boost that may legitimately be zero.
pub fn clamp_non_negative(value: f32, default: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { default }
}

/// Classic `3t² - 2t³` on a clamped input.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// How strength falls off between the center (`t = 0`) and the edge of a
/// field (`t = 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Falloff {
    /// Full strength everywhere inside the radius
    Constant,
    /// `1 - t`
    #[default]
    Linear,
    /// `(1 - t)²`
    Quadratic,
    /// Hyperbolic drop, rescaled to hit 0 at the edge
    Inverse,
    /// `1 - smoothstep(t)`
    Smooth,
}

impl Falloff {
    /// Multiplier for a normalized distance `t = distance / radius`.
    pub fn multiplier(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Falloff::Constant => 1.0,
            Falloff::Linear => 1.0 - t,
            Falloff::Quadratic => (1.0 - t) * (1.0 - t),
            Falloff::Inverse => {
                let edge = 1.0 / (1.0 + INVERSE_STEEPNESS);
                let raw = 1.0 / (1.0 + INVERSE_STEEPNESS * t);
                ((raw - edge) / (1.0 - edge)).max(0.0)
            }
            Falloff::Smooth => 1.0 - smoothstep(t),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match normalize_ident(id).as_str() {
            "constant" | "none" => Some(Falloff::Constant),
            "linear" => Some(Falloff::Linear),
            "quadratic" => Some(Falloff::Quadratic),
            "inverse" => Some(Falloff::Inverse),
            "smooth" | "smoothstep" => Some(Falloff::Smooth),
            _ => None,
        }
    }

    /// Parse with the linear default for anything unrecognized.
    pub fn from_id_or_default(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            log::warn!("unknown falloff {id:?}, using linear");
            Falloff::Linear
        })
    }

    pub fn id(self) -> &'static str {
        match self {
            Falloff::Constant => "constant",
            Falloff::Linear => "linear",
            Falloff::Quadratic => "quadratic",
            Falloff::Inverse => "inverse",
            Falloff::Smooth => "smooth",
        }
    }
}

/// Rotation axis for vortex-style modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match normalize_ident(id).as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }

    /// Parse with the Y default for anything unrecognized.
    pub fn from_id_or_default(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            log::warn!("unknown axis {id:?}, using y");
            Axis::Y
        })
    }

    pub fn id(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// `+1` for counter-clockwise (right-hand rule around the axis), `-1` for
/// clockwise.
pub fn spin_sign(clockwise: bool) -> f32 {
    if clockwise { -1.0 } else { 1.0 }
}

/// Component of `offset` perpendicular to `axis` (axis must be unit length).
pub fn project_onto_plane(offset: Vec3, axis: Vec3) -> Vec3 {
    offset - axis * offset.dot(axis)
}

/// Counter-clockwise unit tangent around `axis` at `offset`. Zero on the axis.
pub fn tangent_around(axis: Vec3, offset: Vec3) -> Vec3 {
    axis.cross(project_onto_plane(offset, axis)).normalize_or_zero()
}
