//! Trigger rules: "when event X happens, play effect Y for N ticks".

use super::event::FieldEvent;
use crate::config::json::normalize_ident;

/// Animated effect a trigger plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerEffect {
    /// Brief color flash
    Flash,
    /// Scale bump that rises and returns
    Pulse,
    /// Positional jitter
    Shake,
    /// Glow intensity boost
    Glow,
    /// Color override
    ColorShift,
}

impl TriggerEffect {
    pub const ALL: [TriggerEffect; 5] = [
        TriggerEffect::Flash,
        TriggerEffect::Pulse,
        TriggerEffect::Shake,
        TriggerEffect::Glow,
        TriggerEffect::ColorShift,
    ];

    /// Effects that animate 0 → peak → 0 on their own, as opposed to
    /// holding and fading out at the end.
    pub fn completes_naturally(self) -> bool {
        matches!(self, TriggerEffect::Pulse | TriggerEffect::Shake)
    }

    pub fn id(self) -> &'static str {
        match self {
            TriggerEffect::Flash => "flash",
            TriggerEffect::Pulse => "pulse",
            TriggerEffect::Shake => "shake",
            TriggerEffect::Glow => "glow",
            TriggerEffect::ColorShift => "color_shift",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match normalize_ident(id).as_str() {
            "flash" => Some(TriggerEffect::Flash),
            "pulse" => Some(TriggerEffect::Pulse),
            "shake" => Some(TriggerEffect::Shake),
            "glow" => Some(TriggerEffect::Glow),
            "color_shift" | "colorshift" => Some(TriggerEffect::ColorShift),
            _ => None,
        }
    }

    /// The effect that overrides a bound property while active, if any.
    pub fn overriding(property: &str) -> Option<Self> {
        match property {
            "scale" | "transform.scale" => Some(TriggerEffect::Pulse),
            "glow" | "appearance.glow" => Some(TriggerEffect::Glow),
            "color" | "appearance.color" => Some(TriggerEffect::ColorShift),
            _ => None,
        }
    }
}

/// Default trigger length in ticks.
pub const DEFAULT_DURATION: u32 = 10;
/// Default peak scale multiplier for PULSE.
pub const DEFAULT_SCALE: f32 = 1.2;
/// Default SHAKE amplitude in blocks.
pub const DEFAULT_AMPLITUDE: f32 = 0.1;
/// Default GLOW intensity.
pub const DEFAULT_INTENSITY: f32 = 1.0;

/// One trigger rule.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerConfig {
    event: FieldEvent,
    effect: TriggerEffect,
    duration: u32,
    color: Option<String>,
    scale: f32,
    amplitude: f32,
    intensity: f32,
}

fn positive_or(value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 { value } else { default }
}

impl TriggerConfig {
    /// Non-positive duration, scale, amplitude or intensity fall back to
    /// their defaults.
    pub fn new(
        event: FieldEvent,
        effect: TriggerEffect,
        duration: u32,
        color: Option<String>,
        scale: f32,
        amplitude: f32,
        intensity: f32,
    ) -> Self {
        Self {
            event,
            effect,
            duration: if duration == 0 { DEFAULT_DURATION } else { duration },
            color,
            scale: positive_or(scale, DEFAULT_SCALE),
            amplitude: positive_or(amplitude, DEFAULT_AMPLITUDE),
            intensity: positive_or(intensity, DEFAULT_INTENSITY),
        }
    }

    pub fn builder(event: FieldEvent, effect: TriggerEffect) -> TriggerConfigBuilder {
        TriggerConfigBuilder {
            event,
            effect,
            duration: DEFAULT_DURATION,
            color: None,
            scale: DEFAULT_SCALE,
            amplitude: DEFAULT_AMPLITUDE,
            intensity: DEFAULT_INTENSITY,
        }
    }

    pub fn event(&self) -> FieldEvent {
        self.event
    }

    pub fn effect(&self) -> TriggerEffect {
        self.effect
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn matches(&self, event: FieldEvent) -> bool {
        self.event == event
    }
}

#[derive(Debug, Clone)]
pub struct TriggerConfigBuilder {
    event: FieldEvent,
    effect: TriggerEffect,
    duration: u32,
    color: Option<String>,
    scale: f32,
    amplitude: f32,
    intensity: f32,
}

impl TriggerConfigBuilder {
    pub fn duration(mut self, ticks: u32) -> Self {
        self.duration = ticks;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn build(self) -> TriggerConfig {
        TriggerConfig::new(
            self.event,
            self.effect,
            self.duration,
            self.color,
            self.scale,
            self.amplitude,
            self.intensity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_values_fall_back() {
        let trigger = TriggerConfig::builder(FieldEvent::PlayerDamage, TriggerEffect::Pulse)
            .duration(0)
            .scale(-2.0)
            .amplitude(0.0)
            .intensity(f32::NAN)
            .build();
        assert_eq!(trigger.duration(), DEFAULT_DURATION);
        assert_eq!(trigger.scale(), DEFAULT_SCALE);
        assert_eq!(trigger.amplitude(), DEFAULT_AMPLITUDE);
        assert_eq!(trigger.intensity(), DEFAULT_INTENSITY);
    }

    #[test]
    fn test_override_mapping() {
        assert_eq!(TriggerEffect::overriding("scale"), Some(TriggerEffect::Pulse));
        assert_eq!(TriggerEffect::overriding("transform.scale"), Some(TriggerEffect::Pulse));
        assert_eq!(TriggerEffect::overriding("appearance.glow"), Some(TriggerEffect::Glow));
        assert_eq!(TriggerEffect::overriding("color"), Some(TriggerEffect::ColorShift));
        assert_eq!(TriggerEffect::overriding("alpha"), None);
    }

    #[test]
    fn test_effect_ids() {
        for effect in TriggerEffect::ALL {
            assert_eq!(TriggerEffect::from_id(effect.id()), Some(effect));
        }
        assert_eq!(TriggerEffect::from_id("COLOR_SHIFT"), Some(TriggerEffect::ColorShift));
        assert!(TriggerEffect::Shake.completes_naturally());
        assert!(!TriggerEffect::Glow.completes_naturally());
    }
}
