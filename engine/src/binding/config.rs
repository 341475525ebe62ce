//! Binding configuration: one source mapped onto one property.

use super::curve::InterpolationCurve;

/// Maps `source` from `[input_min, input_max]` through `curve` onto
/// `[output_min, output_max]`. Equal input bounds are allowed and normalize
/// to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingConfig {
    source: String,
    input_min: f32,
    input_max: f32,
    curve: InterpolationCurve,
    output_min: f32,
    output_max: f32,
}

impl BindingConfig {
    pub fn new(
        source: impl Into<String>,
        input_min: f32,
        input_max: f32,
        curve: InterpolationCurve,
        output_min: f32,
        output_max: f32,
    ) -> Self {
        Self {
            source: source.into(),
            input_min: finite_or(input_min, 0.0),
            input_max: finite_or(input_max, 1.0),
            curve,
            output_min: finite_or(output_min, 0.0),
            output_max: finite_or(output_max, 1.0),
        }
    }

    /// Unit ranges, linear curve.
    pub fn builder(source: impl Into<String>) -> BindingConfigBuilder {
        BindingConfigBuilder {
            source: source.into(),
            input_min: 0.0,
            input_max: 1.0,
            curve: InterpolationCurve::Linear,
            output_min: 0.0,
            output_max: 1.0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn input_min(&self) -> f32 {
        self.input_min
    }

    pub fn input_max(&self) -> f32 {
        self.input_max
    }

    pub fn curve(&self) -> InterpolationCurve {
        self.curve
    }

    pub fn output_min(&self) -> f32 {
        self.output_min
    }

    pub fn output_max(&self) -> f32 {
        self.output_max
    }

    /// Raw source value to `[0, 1]`. Equal bounds give 0.
    pub fn normalize(&self, raw: f32) -> f32 {
        let span = self.input_max - self.input_min;
        if span == 0.0 || raw.is_nan() {
            return 0.0;
        }
        ((raw - self.input_min) / span).clamp(0.0, 1.0)
    }

    /// Curved `[0, 1]` value to the output range.
    pub fn remap(&self, t: f32) -> f32 {
        self.output_min + (self.output_max - self.output_min) * t
    }

    /// Full pipeline for a raw source value.
    pub fn map(&self, raw: f32) -> f32 {
        self.remap(self.curve.apply(self.normalize(raw)))
    }
}

fn finite_or(value: f32, default: f32) -> f32 {
    if value.is_finite() { value } else { default }
}

#[derive(Debug, Clone)]
pub struct BindingConfigBuilder {
    source: String,
    input_min: f32,
    input_max: f32,
    curve: InterpolationCurve,
    output_min: f32,
    output_max: f32,
}

impl BindingConfigBuilder {
    pub fn input_range(mut self, min: f32, max: f32) -> Self {
        self.input_min = min;
        self.input_max = max;
        self
    }

    pub fn output_range(mut self, min: f32, max: f32) -> Self {
        self.output_min = min;
        self.output_max = max;
        self
    }

    pub fn input_min(mut self, min: f32) -> Self {
        self.input_min = min;
        self
    }

    pub fn input_max(mut self, max: f32) -> Self {
        self.input_max = max;
        self
    }

    pub fn output_min(mut self, min: f32) -> Self {
        self.output_min = min;
        self
    }

    pub fn output_max(mut self, max: f32) -> Self {
        self.output_max = max;
        self
    }

    pub fn curve(mut self, curve: InterpolationCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn build(self) -> BindingConfig {
        BindingConfig::new(
            self.source,
            self.input_min,
            self.input_max,
            self.curve,
            self.output_min,
            self.output_max,
        )
    }
}
