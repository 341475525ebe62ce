//! Spawn/despawn timing envelope.
//!
//! `LifecycleConfig` only carries tick counts and a [`DecayConfig`]. It
//! answers "is there a spawn animation" style questions; interpolating over
//! the tick counts is up to the caller (see `field::FieldInstance`).

use super::decay::DecayConfig;

/// Fade/scale tick counts plus baseline decay for one field definition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LifecycleConfig {
    /// Ticks to fade from transparent to opaque after spawn
    pub fade_in: u32,
    /// Ticks to fade out before despawn
    pub fade_out: u32,
    /// Ticks to grow from zero to full scale after spawn
    pub scale_in: u32,
    /// Ticks to shrink to zero before despawn
    pub scale_out: u32,
    /// Per-tick decay applied to baseline property values
    pub decay: DecayConfig,
}

impl LifecycleConfig {
    pub fn new(fade_in: u32, fade_out: u32, scale_in: u32, scale_out: u32, decay: DecayConfig) -> Self {
        Self {
            fade_in,
            fade_out,
            scale_in,
            scale_out,
            decay,
        }
    }

    pub fn builder() -> LifecycleConfigBuilder {
        LifecycleConfigBuilder::default()
    }

    pub fn has_fade_in(&self) -> bool {
        self.fade_in > 0
    }

    pub fn has_fade_out(&self) -> bool {
        self.fade_out > 0
    }

    pub fn has_scale_in(&self) -> bool {
        self.scale_in > 0
    }

    pub fn has_scale_out(&self) -> bool {
        self.scale_out > 0
    }

    /// Any fade-in or scale-in.
    pub fn has_spawn_animation(&self) -> bool {
        self.has_fade_in() || self.has_scale_in()
    }

    /// Any fade-out or scale-out.
    pub fn has_despawn_animation(&self) -> bool {
        self.has_fade_out() || self.has_scale_out()
    }

    pub fn has_decay(&self) -> bool {
        self.decay.is_active()
    }

    /// Longest of the spawn animations, in ticks.
    pub fn spawn_ticks(&self) -> u32 {
        self.fade_in.max(self.scale_in)
    }

    /// Longest of the despawn animations, in ticks.
    pub fn despawn_ticks(&self) -> u32 {
        self.fade_out.max(self.scale_out)
    }
}

/// Builder for [`LifecycleConfig`].
#[derive(Debug, Clone, Default)]
pub struct LifecycleConfigBuilder {
    config: LifecycleConfig,
}

impl LifecycleConfigBuilder {
    pub fn fade_in(mut self, ticks: u32) -> Self {
        self.config.fade_in = ticks;
        self
    }

    pub fn fade_out(mut self, ticks: u32) -> Self {
        self.config.fade_out = ticks;
        self
    }

    pub fn scale_in(mut self, ticks: u32) -> Self {
        self.config.scale_in = ticks;
        self
    }

    pub fn scale_out(mut self, ticks: u32) -> Self {
        self.config.scale_out = ticks;
        self
    }

    pub fn decay(mut self, decay: DecayConfig) -> Self {
        self.config.decay = decay;
        self
    }

    pub fn build(self) -> LifecycleConfig {
        self.config
    }
}
