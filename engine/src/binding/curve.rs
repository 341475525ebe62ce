//! Interpolation Curves
//!
//! Easing functions over a normalized `[0, 1]` input. Every curve maps
//! 0 to 0 and 1 to 1 and stays inside `[0, 1]` for inputs in that range.

use crate::config::json::normalize_ident;

/// Easing curve applied between input normalization and output remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterpolationCurve {
    /// Identity
    #[default]
    Linear,
    /// `t²` - slow start
    EaseIn,
    /// `t(2 - t)` - slow finish
    EaseOut,
    /// Quadratic ease-in below 0.5, ease-out above
    EaseInOut,
}

impl InterpolationCurve {
    /// All curves, in declaration order.
    pub const ALL: [InterpolationCurve; 4] = [
        InterpolationCurve::Linear,
        InterpolationCurve::EaseIn,
        InterpolationCurve::EaseOut,
        InterpolationCurve::EaseInOut,
    ];

    /// Apply the curve. Input is clamped to `[0, 1]` first.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            InterpolationCurve::Linear => t,
            InterpolationCurve::EaseIn => t * t,
            InterpolationCurve::EaseOut => t * (2.0 - t),
            InterpolationCurve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    /// Parse a curve id (`"linear"`, `"ease_in"`, `"EASE_OUT"`, `"ease-in-out"`).
    pub fn from_id(id: &str) -> Option<Self> {
        match normalize_ident(id).as_str() {
            "linear" => Some(InterpolationCurve::Linear),
            "ease_in" => Some(InterpolationCurve::EaseIn),
            "ease_out" => Some(InterpolationCurve::EaseOut),
            "ease_in_out" => Some(InterpolationCurve::EaseInOut),
            _ => None,
        }
    }

    /// Stable id used in field definitions.
    pub fn id(self) -> &'static str {
        match self {
            InterpolationCurve::Linear => "linear",
            InterpolationCurve::EaseIn => "ease_in",
            InterpolationCurve::EaseOut => "ease_out",
            InterpolationCurve::EaseInOut => "ease_in_out",
        }
    }
}
