//! Field definitions: everything needed to spawn one kind of field.

use std::path::Path;

use serde_json::Value;

use super::error::ConfigError;
use super::json;
use crate::binding::{BindingConfig, BindingMap, PropertyValues};
use crate::force::ForceMode;
use crate::lifecycle::LifecycleConfig;
use crate::trigger::TriggerConfig;

/// A complete, validated field definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub id: String,
    /// Total lifetime in ticks, 0 for unbounded
    pub duration: u32,
    pub lifecycle: LifecycleConfig,
    /// Physical influence, if the field moves entities at all
    pub force: Option<ForceMode>,
    pub bindings: BindingMap,
    pub triggers: Vec<TriggerConfig>,
    /// Property values before bindings and triggers apply
    pub base: PropertyValues,
}

impl Default for FieldDefinition {
    fn default() -> Self {
        Self::new("field")
    }
}

impl FieldDefinition {
    /// Unbounded, forceless definition with no bindings or triggers.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            duration: 0,
            lifecycle: LifecycleConfig::default(),
            force: None,
            bindings: BindingMap::new(),
            triggers: Vec::new(),
            base: PropertyValues::new(),
        }
    }

    pub fn with_duration(mut self, ticks: u32) -> Self {
        self.duration = ticks;
        self
    }

    pub fn with_lifecycle(mut self, lifecycle: LifecycleConfig) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    pub fn with_force(mut self, force: impl Into<ForceMode>) -> Self {
        self.force = Some(force.into());
        self
    }

    pub fn with_binding(mut self, property: impl Into<String>, binding: BindingConfig) -> Self {
        self.bindings.insert(property.into(), binding);
        self
    }

    pub fn with_trigger(mut self, trigger: TriggerConfig) -> Self {
        self.triggers.push(trigger);
        self
    }

    pub fn with_base(mut self, property: impl Into<String>, value: f32) -> Self {
        self.base.insert(property.into(), value);
        self
    }

    pub fn is_bounded(&self) -> bool {
        self.duration > 0
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Read a definition from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let obj = json::as_object(value, "field definition")?;
        let mut definition = Self::new(obj.get("id").and_then(Value::as_str).unwrap_or("field"));

        if let Some(duration) = obj.get("duration") {
            match duration.as_u64() {
                Some(ticks) => definition.duration = ticks.min(u32::MAX as u64) as u32,
                None => log::warn!("duration should be a tick count, found {duration}; using unbounded"),
            }
        }
        if let Some(lifecycle) = obj.get("lifecycle") {
            definition.lifecycle = json::decode_lifecycle(lifecycle)?;
        }
        if let Some(force) = obj.get("force") {
            definition.force = Some(json::decode_force_mode(force)?);
        }
        if let Some(bindings) = obj.get("bindings") {
            definition.bindings = json::decode_bindings(bindings)?;
        }
        if let Some(triggers) = obj.get("triggers") {
            definition.triggers = json::decode_triggers(triggers)?;
        }
        if let Some(base) = obj.get("base") {
            definition.base = json::decode_properties(base)?;
        }
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::InterpolationCurve;
    use crate::force::ForceModeKind;
    use crate::trigger::{FieldEvent, TriggerEffect};

    const STORM_SHIELD: &str = r##"{
        "id": "storm_shield",
        "duration": 400,
        "lifecycle": { "fade_in": 10, "fade_out": 10, "scale_in": 5, "scale_out": 5,
                       "decay": { "rate": 0.98, "min": 0.2 } },
        "force": { "mode": "pull", "strength": 0.15, "radius": 15, "falloff": "linear" },
        "bindings": { "glow": { "source": "player.health_percent", "input_min": 0,
                                "input_max": 1, "curve": "ease_in",
                                "output_min": 0.2, "output_max": 1.0 } },
        "triggers": [ { "event": "player.damage", "effect": "flash", "duration": 6,
                        "color": "#FF0000" } ],
        "base": { "alpha": 1.0, "scale": 1.0 }
    }"##;

    #[test]
    fn test_full_definition() {
        let definition = FieldDefinition::from_json_str(STORM_SHIELD).unwrap();
        assert_eq!(definition.id, "storm_shield");
        assert_eq!(definition.duration, 400);
        assert!(definition.is_bounded());
        assert_eq!(definition.lifecycle.fade_in, 10);
        assert!(definition.lifecycle.has_decay());
        assert_eq!(definition.force.map(|f| f.kind()), Some(ForceModeKind::Pull));
        assert_eq!(definition.bindings["glow"].curve(), InterpolationCurve::EaseIn);
        assert_eq!(definition.triggers.len(), 1);
        assert_eq!(definition.triggers[0].event(), FieldEvent::PlayerDamage);
        assert_eq!(definition.triggers[0].effect(), TriggerEffect::Flash);
        assert_eq!(definition.base["alpha"], 1.0);
    }

    #[test]
    fn test_empty_object_is_default() {
        let definition = FieldDefinition::from_json_str("{}").unwrap();
        assert_eq!(definition, FieldDefinition::default());
        assert!(!definition.is_bounded());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(FieldDefinition::from_json_str("{ nope"), Err(ConfigError::Json(_))));
        assert!(matches!(
            FieldDefinition::from_json_str("[1, 2]"),
            Err(ConfigError::NotAnObject("field definition"))
        ));
        assert!(matches!(
            FieldDefinition::from_json_str(r#"{ "force": { "mode": "wormhole" } }"#),
            Err(ConfigError::UnknownForceMode(_))
        ));
        assert!(matches!(
            FieldDefinition::load("/nonexistent/field.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_builder_style() {
        let definition = FieldDefinition::new("aura")
            .with_duration(100)
            .with_force(crate::force::PullModeConfig::default())
            .with_binding("alpha", BindingConfig::builder("player.health_percent").build())
            .with_base("scale", 1.0);
        assert_eq!(definition.duration, 100);
        assert!(definition.force.is_some());
        assert_eq!(definition.bindings.len(), 1);
        assert_eq!(definition.base["scale"], 1.0);
    }
}
