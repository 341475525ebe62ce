//! Explicit JSON decoding for every config record.
//!
//! Each record has one `decode_*` function that reads known fields out of a
//! `serde_json::Value` and feeds them through the record's builder, so the
//! usual clamping applies. Missing fields keep their defaults; a field with
//! the wrong JSON type is logged and treated as missing. Only structural
//! problems (not an object, unknown force mode, missing required field)
//! become a [`ConfigError`].

use serde_json::{Map, Value};

use super::error::ConfigError;
use crate::binding::{BindingConfig, BindingConfigBuilder, BindingMap, InterpolationCurve, PropertyValues};
use crate::force::modes::{
    ExplosionModeBuilder, ExplosionModeConfig, ImplosionModeBuilder, ImplosionModeConfig,
    OrbitModeBuilder, OrbitModeConfig, PullModeBuilder, PullModeConfig, PushModeBuilder,
    PushModeConfig, RingModeBuilder, RingModeConfig, TornadoModeBuilder, TornadoModeConfig,
    VortexModeBuilder, VortexModeConfig,
};
use crate::force::{Axis, Falloff, ForceMode, ForceModeKind};
use crate::lifecycle::{DecayConfig, LifecycleConfig, LifecycleConfigBuilder};
use crate::trigger::{FieldEvent, TriggerConfig, TriggerConfigBuilder, TriggerEffect};

type Object = Map<String, Value>;

/// Canonical form of an enum id: trimmed, lowercase, `-` and spaces as `_`.
pub(crate) fn normalize_ident(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

pub(crate) fn as_object<'a>(value: &'a Value, section: &'static str) -> Result<&'a Object, ConfigError> {
    value.as_object().ok_or(ConfigError::NotAnObject(section))
}

fn wrong_type(key: &str, expected: &str, found: &Value) {
    log::warn!("field {key:?} should be {expected}, found {found}; using default");
}

fn f32_field(obj: &Object, key: &str) -> Option<f32> {
    let value = obj.get(key)?;
    match value.as_f64() {
        Some(v) => Some(v as f32),
        None => {
            wrong_type(key, "a number", value);
            None
        }
    }
}

fn u32_field(obj: &Object, key: &str) -> Option<u32> {
    let value = obj.get(key)?;
    if let Some(v) = value.as_u64() {
        return Some(v.min(u32::MAX as u64) as u32);
    }
    match value.as_f64() {
        Some(v) if v.is_finite() && v >= 0.0 => Some(v.round().min(u32::MAX as f64) as u32),
        _ => {
            wrong_type(key, "a non-negative integer", value);
            None
        }
    }
}

fn bool_field(obj: &Object, key: &str) -> Option<bool> {
    let value = obj.get(key)?;
    match value.as_bool() {
        Some(v) => Some(v),
        None => {
            wrong_type(key, "a boolean", value);
            None
        }
    }
}

fn str_field<'a>(obj: &'a Object, key: &str) -> Option<&'a str> {
    let value = obj.get(key)?;
    match value.as_str() {
        Some(v) => Some(v),
        None => {
            wrong_type(key, "a string", value);
            None
        }
    }
}

/// Run `setter` only when the field was present.
fn set<B, T>(builder: B, value: Option<T>, setter: fn(B, T) -> B) -> B {
    match value {
        Some(value) => setter(builder, value),
        None => builder,
    }
}

fn falloff_field(obj: &Object) -> Option<Falloff> {
    str_field(obj, "falloff").map(Falloff::from_id_or_default)
}

/// Decode a `force` section. `mode` selects the variant; the remaining
/// fields are that mode's parameters.
pub fn decode_force_mode(value: &Value) -> Result<ForceMode, ConfigError> {
    let obj = as_object(value, "force")?;
    let mode = str_field(obj, "mode").ok_or(ConfigError::MissingField("force.mode"))?;
    let kind = ForceModeKind::from_id(mode).ok_or_else(|| ConfigError::UnknownForceMode(mode.to_string()))?;

    Ok(match kind {
        ForceModeKind::Pull => decode_pull(obj).into(),
        ForceModeKind::Push => decode_push(obj).into(),
        ForceModeKind::Vortex => decode_vortex(obj).into(),
        ForceModeKind::Orbit => decode_orbit(obj).into(),
        ForceModeKind::Tornado => decode_tornado(obj).into(),
        ForceModeKind::Ring => decode_ring(obj).into(),
        ForceModeKind::Implosion => decode_implosion(obj).into(),
        ForceModeKind::Explosion => decode_explosion(obj).into(),
    })
}

fn decode_pull(obj: &Object) -> PullModeConfig {
    let builder = PullModeConfig::builder();
    let builder = set(builder, f32_field(obj, "strength"), PullModeBuilder::strength);
    let builder = set(builder, f32_field(obj, "radius"), PullModeBuilder::radius);
    let builder = set(builder, falloff_field(obj), PullModeBuilder::falloff);
    builder.build()
}

fn decode_push(obj: &Object) -> PushModeConfig {
    let builder = PushModeConfig::builder();
    let builder = set(builder, f32_field(obj, "strength"), PushModeBuilder::strength);
    let builder = set(builder, f32_field(obj, "radius"), PushModeBuilder::radius);
    let builder = set(builder, falloff_field(obj), PushModeBuilder::falloff);
    let builder = set(builder, f32_field(obj, "vertical_boost"), PushModeBuilder::vertical_boost);
    let builder = set(builder, bool_field(obj, "burst"), PushModeBuilder::burst);
    let builder = set(builder, f32_field(obj, "burst_decay"), PushModeBuilder::burst_decay);
    builder.build()
}

fn decode_vortex(obj: &Object) -> VortexModeConfig {
    let builder = VortexModeConfig::builder();
    let builder = set(builder, f32_field(obj, "radius"), VortexModeBuilder::radius);
    let builder = set(builder, f32_field(obj, "radial_strength"), VortexModeBuilder::radial_strength);
    let builder = set(
        builder,
        f32_field(obj, "tangential_strength"),
        VortexModeBuilder::tangential_strength,
    );
    let builder = set(builder, f32_field(obj, "tightness"), VortexModeBuilder::tightness);
    let builder = set(
        builder,
        str_field(obj, "axis").map(Axis::from_id_or_default),
        VortexModeBuilder::axis,
    );
    let builder = set(builder, bool_field(obj, "clockwise"), VortexModeBuilder::clockwise);
    builder.build()
}

fn decode_orbit(obj: &Object) -> OrbitModeConfig {
    let builder = OrbitModeConfig::builder();
    let builder = set(builder, u32_field(obj, "ring_count"), OrbitModeBuilder::ring_count);
    let builder = set(builder, f32_field(obj, "base_radius"), OrbitModeBuilder::base_radius);
    let builder = set(builder, f32_field(obj, "ring_spacing"), OrbitModeBuilder::ring_spacing);
    let builder = set(builder, f32_field(obj, "orbit_speed"), OrbitModeBuilder::orbit_speed);
    let builder = set(
        builder,
        f32_field(obj, "attraction_strength"),
        OrbitModeBuilder::attraction_strength,
    );
    let builder = set(
        builder,
        bool_field(obj, "alternate_direction"),
        OrbitModeBuilder::alternate_direction,
    );
    let builder = set(builder, bool_field(obj, "clockwise"), OrbitModeBuilder::clockwise);
    builder.build()
}

fn decode_tornado(obj: &Object) -> TornadoModeConfig {
    let builder = TornadoModeConfig::builder();
    let builder = set(builder, f32_field(obj, "height"), TornadoModeBuilder::height);
    let builder = set(builder, f32_field(obj, "base_radius"), TornadoModeBuilder::base_radius);
    let builder = set(builder, f32_field(obj, "funnel_factor"), TornadoModeBuilder::funnel_factor);
    let builder = set(builder, f32_field(obj, "lift_speed"), TornadoModeBuilder::lift_speed);
    let builder = set(builder, f32_field(obj, "spin_speed"), TornadoModeBuilder::spin_speed);
    let builder = set(builder, f32_field(obj, "pull_strength"), TornadoModeBuilder::pull_strength);
    let builder = set(builder, f32_field(obj, "suck_radius"), TornadoModeBuilder::suck_radius);
    let builder = set(builder, f32_field(obj, "suck_strength"), TornadoModeBuilder::suck_strength);
    let builder = set(builder, bool_field(obj, "clockwise"), TornadoModeBuilder::clockwise);
    builder.build()
}

fn decode_ring(obj: &Object) -> RingModeConfig {
    let builder = RingModeConfig::builder();
    let builder = set(builder, f32_field(obj, "ring_radius"), RingModeBuilder::ring_radius);
    let builder = set(builder, f32_field(obj, "width"), RingModeBuilder::width);
    let builder = set(builder, f32_field(obj, "strength"), RingModeBuilder::strength);
    let builder = set(builder, f32_field(obj, "orbit_speed"), RingModeBuilder::orbit_speed);
    let builder = set(builder, f32_field(obj, "influence_radius"), RingModeBuilder::influence_radius);
    let builder = set(builder, bool_field(obj, "smooth_edges"), RingModeBuilder::smooth_edges);
    let builder = set(builder, bool_field(obj, "clockwise"), RingModeBuilder::clockwise);
    builder.build()
}

fn decode_implosion(obj: &Object) -> ImplosionModeConfig {
    let builder = ImplosionModeConfig::builder();
    let builder = set(builder, f32_field(obj, "suction_radius"), ImplosionModeBuilder::suction_radius);
    let builder = set(builder, f32_field(obj, "event_horizon"), ImplosionModeBuilder::event_horizon);
    let builder = set(
        builder,
        f32_field(obj, "suction_strength"),
        ImplosionModeBuilder::suction_strength,
    );
    let builder = set(builder, f32_field(obj, "core_strength"), ImplosionModeBuilder::core_strength);
    let builder = set(
        builder,
        f32_field(obj, "acceleration_curve"),
        ImplosionModeBuilder::acceleration_curve,
    );
    let builder = set(builder, bool_field(obj, "cannot_escape"), ImplosionModeBuilder::cannot_escape);
    let builder = set(builder, f32_field(obj, "crush_damage"), ImplosionModeBuilder::crush_damage);
    builder.build()
}

fn decode_explosion(obj: &Object) -> ExplosionModeConfig {
    let builder = ExplosionModeConfig::builder();
    let builder = set(builder, f32_field(obj, "blast_radius"), ExplosionModeBuilder::blast_radius);
    let builder = set(builder, f32_field(obj, "blast_strength"), ExplosionModeBuilder::blast_strength);
    let builder = set(builder, falloff_field(obj), ExplosionModeBuilder::falloff);
    let builder = set(builder, f32_field(obj, "vertical_boost"), ExplosionModeBuilder::vertical_boost);
    let builder = set(builder, u32_field(obj, "burst_duration"), ExplosionModeBuilder::burst_duration);
    let builder = set(builder, f32_field(obj, "decay_exponent"), ExplosionModeBuilder::decay_exponent);
    let builder = set(
        builder,
        bool_field(obj, "ignore_knockback_resistance"),
        ExplosionModeBuilder::ignore_knockback_resistance,
    );
    builder.build()
}

pub fn decode_decay(value: &Value) -> Result<DecayConfig, ConfigError> {
    let obj = as_object(value, "decay")?;
    let defaults = DecayConfig::default();
    Ok(DecayConfig::new(
        f32_field(obj, "rate").unwrap_or(defaults.rate()),
        f32_field(obj, "min").unwrap_or(defaults.min()),
    ))
}

pub fn decode_lifecycle(value: &Value) -> Result<LifecycleConfig, ConfigError> {
    let obj = as_object(value, "lifecycle")?;
    let builder = LifecycleConfig::builder();
    let builder = set(builder, u32_field(obj, "fade_in"), LifecycleConfigBuilder::fade_in);
    let builder = set(builder, u32_field(obj, "fade_out"), LifecycleConfigBuilder::fade_out);
    let builder = set(builder, u32_field(obj, "scale_in"), LifecycleConfigBuilder::scale_in);
    let builder = set(builder, u32_field(obj, "scale_out"), LifecycleConfigBuilder::scale_out);
    let decay = obj.get("decay").map(decode_decay).transpose()?;
    let builder = set(builder, decay, LifecycleConfigBuilder::decay);
    Ok(builder.build())
}

pub fn decode_binding(value: &Value) -> Result<BindingConfig, ConfigError> {
    let obj = as_object(value, "binding")?;
    let source = str_field(obj, "source").ok_or(ConfigError::MissingField("binding.source"))?;
    let curve = str_field(obj, "curve").map(|id| {
        InterpolationCurve::from_id(id).unwrap_or_else(|| {
            log::warn!("unknown curve {id:?}, using linear");
            InterpolationCurve::Linear
        })
    });

    let builder = BindingConfig::builder(source);
    let builder = set(builder, f32_field(obj, "input_min"), BindingConfigBuilder::input_min);
    let builder = set(builder, f32_field(obj, "input_max"), BindingConfigBuilder::input_max);
    let builder = set(builder, curve, BindingConfigBuilder::curve);
    let builder = set(builder, f32_field(obj, "output_min"), BindingConfigBuilder::output_min);
    let builder = set(builder, f32_field(obj, "output_max"), BindingConfigBuilder::output_max);
    Ok(builder.build())
}

/// `{ property: binding, ... }`
pub fn decode_bindings(value: &Value) -> Result<BindingMap, ConfigError> {
    let obj = as_object(value, "bindings")?;
    obj.iter()
        .map(|(property, binding)| Ok((property.clone(), decode_binding(binding)?)))
        .collect()
}

/// Decode one trigger rule. An unrecognized event or effect id is logged and
/// yields `Ok(None)` so the rest of the definition still loads.
pub fn decode_trigger(value: &Value) -> Result<Option<TriggerConfig>, ConfigError> {
    let obj = as_object(value, "trigger")?;
    let event_id = str_field(obj, "event").ok_or(ConfigError::MissingField("trigger.event"))?;
    let effect_id = str_field(obj, "effect").ok_or(ConfigError::MissingField("trigger.effect"))?;

    let Some(event) = FieldEvent::from_id(event_id) else {
        log::warn!("unknown trigger event {event_id:?}, skipping rule");
        return Ok(None);
    };
    let Some(effect) = TriggerEffect::from_id(effect_id) else {
        log::warn!("unknown trigger effect {effect_id:?}, skipping rule");
        return Ok(None);
    };

    let builder = TriggerConfig::builder(event, effect);
    let builder = set(builder, u32_field(obj, "duration"), TriggerConfigBuilder::duration);
    let builder = match str_field(obj, "color") {
        Some(color) => builder.color(color),
        None => builder,
    };
    let builder = set(builder, f32_field(obj, "scale"), TriggerConfigBuilder::scale);
    let builder = set(builder, f32_field(obj, "amplitude"), TriggerConfigBuilder::amplitude);
    let builder = set(builder, f32_field(obj, "intensity"), TriggerConfigBuilder::intensity);
    Ok(Some(builder.build()))
}

/// `[ trigger, ... ]`
pub fn decode_triggers(value: &Value) -> Result<Vec<TriggerConfig>, ConfigError> {
    let rules = value.as_array().ok_or(ConfigError::NotAnArray("triggers"))?;
    let mut decoded = Vec::with_capacity(rules.len());
    for rule in rules {
        if let Some(trigger) = decode_trigger(rule)? {
            decoded.push(trigger);
        }
    }
    Ok(decoded)
}

/// `{ property: number, ... }`. Non-numeric entries are logged and skipped.
pub fn decode_properties(value: &Value) -> Result<PropertyValues, ConfigError> {
    let obj = as_object(value, "base")?;
    Ok(obj
        .iter()
        .filter_map(|(property, value)| match value.as_f64() {
            Some(v) if v.is_finite() => Some((property.clone(), v as f32)),
            _ => {
                wrong_type(property, "a number", value);
                None
            }
        })
        .collect())
}
