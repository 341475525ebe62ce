//! Binding Resolver
//!
//! Turns binding configs into property values for one player:
//!
//! 1. look up the source (unknown id: warn, return `output_min`)
//! 2. read the raw value (`field.age` reads the passed tick count)
//! 3. normalize against the input range, clamp to `[0, 1]`
//! 4. apply the easing curve
//! 5. remap onto the output range
//!
//! Never panics and never returns an error into the tick loop.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::combat::CombatTracker;
use super::config::BindingConfig;
use super::source::{BindingSources, SourceInput};
use crate::player::PlayerState;

/// Property name → binding.
pub type BindingMap = BTreeMap<String, BindingConfig>;

/// Property name → resolved value.
pub type PropertyValues = BTreeMap<String, f32>;

#[derive(Debug, Clone)]
pub struct BindingResolver {
    sources: Arc<BindingSources>,
    combat: Arc<CombatTracker>,
}

impl BindingResolver {
    pub fn new(sources: Arc<BindingSources>, combat: Arc<CombatTracker>) -> Self {
        Self { sources, combat }
    }

    pub fn sources(&self) -> &BindingSources {
        &self.sources
    }

    /// Resolve one binding.
    pub fn evaluate(&self, config: &BindingConfig, player: &dyn PlayerState, field_age: u64) -> f32 {
        let Some(source) = self.sources.get(config.source()) else {
            log::warn!(
                "unknown binding source {:?}, using output_min {}",
                config.source(),
                config.output_min()
            );
            return config.output_min();
        };
        let input = SourceInput {
            player,
            combat: &self.combat,
            field_age,
        };
        config.map(source.value(&input))
    }

    /// Resolve every binding in `bindings`.
    pub fn evaluate_all(&self, bindings: &BindingMap, player: &dyn PlayerState, field_age: u64) -> PropertyValues {
        bindings
            .iter()
            .map(|(property, config)| (property.clone(), self.evaluate(config, player, field_age)))
            .collect()
    }

    /// Resolve `property` if it has a binding, otherwise `default`.
    pub fn get_or_default(
        &self,
        bindings: &BindingMap,
        property: &str,
        player: &dyn PlayerState,
        field_age: u64,
        default: f32,
    ) -> f32 {
        bindings
            .get(property)
            .map_or(default, |config| self.evaluate(config, player, field_age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::curve::InterpolationCurve;
    use crate::player::{PlayerId, PlayerSnapshot};

    fn resolver() -> BindingResolver {
        BindingResolver::new(
            Arc::new(BindingSources::with_builtins()),
            Arc::new(CombatTracker::new()),
        )
    }

    #[test]
    fn test_health_percent_half() {
        let resolver = resolver();
        let player = PlayerSnapshot::new(PlayerId(1)).with_health(10.0, 20.0);
        let binding = BindingConfig::new(
            "player.health_percent",
            0.0,
            1.0,
            InterpolationCurve::Linear,
            0.0,
            1.0,
        );
        assert!((resolver.evaluate(&binding, &player, 0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_source_falls_back_to_output_min() {
        let resolver = resolver();
        let player = PlayerSnapshot::new(PlayerId(1));
        let binding = BindingConfig::builder("player.mana").output_range(0.4, 0.9).build();
        assert_eq!(resolver.evaluate(&binding, &player, 0), 0.4);
    }

    #[test]
    fn test_field_age_binding() {
        let resolver = resolver();
        let player = PlayerSnapshot::new(PlayerId(1));
        let binding = BindingConfig::builder("field.age")
            .input_range(0.0, 100.0)
            .output_range(0.0, 10.0)
            .build();
        assert!((resolver.evaluate(&binding, &player, 25) - 2.5).abs() < 1e-6);
        assert_eq!(resolver.evaluate(&binding, &player, 1000), 10.0);
    }

    #[test]
    fn test_evaluate_all_and_get_or_default() {
        let resolver = resolver();
        let mut player = PlayerSnapshot::new(PlayerId(1));
        player.sneaking = true;
        let mut bindings = BindingMap::new();
        bindings.insert(
            "alpha".to_string(),
            BindingConfig::builder("player.sneaking").output_range(1.0, 0.3).build(),
        );
        bindings.insert(
            "glow".to_string(),
            BindingConfig::builder("player.food").input_range(0.0, 20.0).build(),
        );

        let values = resolver.evaluate_all(&bindings, &player, 0);
        assert_eq!(values.len(), 2);
        assert!((values["alpha"] - 0.3).abs() < 1e-6);
        assert!((values["glow"] - 1.0).abs() < 1e-6);

        assert_eq!(resolver.get_or_default(&bindings, "scale", &player, 0, 1.25), 1.25);
        assert!((resolver.get_or_default(&bindings, "alpha", &player, 0, 1.25) - 0.3).abs() < 1e-6);
    }
}
