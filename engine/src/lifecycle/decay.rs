//! Exponential decay toward a floor.
//!
//! A `DecayConfig` holds no runtime state. The caller keeps the current
//! value and feeds it through [`DecayConfig::apply`] once per tick.

/// Per-tick multiplicative decay with a lower bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayConfig {
    /// Multiplier applied each tick. `>= 1.0` disables decay.
    rate: f32,
    /// Value the decay never goes below.
    min: f32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self::NONE
    }
}

impl DecayConfig {
    /// Decay disabled.
    pub const NONE: DecayConfig = DecayConfig { rate: 1.0, min: 0.0 };

    /// Create a decay envelope. Negative or NaN rates become 0 (instant drop
    /// to `min`), rates above 1 are stored as 1 (inactive).
    pub fn new(rate: f32, min: f32) -> Self {
        let rate = if rate.is_nan() { 1.0 } else { rate.clamp(0.0, 1.0) };
        let min = if min.is_finite() { min } else { 0.0 };
        Self { rate, min }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    /// Whether applying this decay changes anything.
    pub fn is_active(&self) -> bool {
        self.rate < 1.0
    }

    /// Advance `current` by one tick of decay.
    pub fn apply(&self, current: f32) -> f32 {
        if !self.is_active() {
            return current;
        }
        (current * self.rate).max(self.min)
    }

    /// Advance `current` by `ticks` ticks of decay.
    pub fn apply_n(&self, current: f32, ticks: u32) -> f32 {
        if !self.is_active() || ticks == 0 {
            return current;
        }
        let factor = self.rate.powi(ticks.min(i32::MAX as u32) as i32);
        (current * factor).max(self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_is_identity() {
        let decay = DecayConfig::default();
        assert!(!decay.is_active());
        assert_eq!(decay.apply(3.5), 3.5);
        assert_eq!(DecayConfig::new(1.7, 0.0).apply(2.0), 2.0);
    }

    #[test]
    fn test_single_step() {
        let decay = DecayConfig::new(0.5, 0.1);
        assert!((decay.apply(1.0) - 0.5).abs() < 1e-6);
        assert!((decay.apply(0.15) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_converges_to_min_without_undershoot() {
        for rate in [0.01_f32, 0.3, 0.9, 0.99] {
            let decay = DecayConfig::new(rate, 0.25);
            let mut value = 10.0;
            for _ in 0..5000 {
                value = decay.apply(value);
                assert!(value >= 0.25, "rate {rate} went below floor: {value}");
            }
            assert!((value - 0.25).abs() < 1e-4, "rate {rate} ended at {value}");
        }
    }

    #[test]
    fn test_apply_n_matches_repeated_apply() {
        let decay = DecayConfig::new(0.9, 0.0);
        let mut stepped = 4.0;
        for _ in 0..12 {
            stepped = decay.apply(stepped);
        }
        assert!((decay.apply_n(4.0, 12) - stepped).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_rate_clamped() {
        assert_eq!(DecayConfig::new(-2.0, 0.0).rate(), 0.0);
        assert_eq!(DecayConfig::new(f32::NAN, 0.0).rate(), 1.0);
        assert_eq!(DecayConfig::new(0.5, f32::INFINITY).min(), 0.0);
    }
}
