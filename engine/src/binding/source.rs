//! Binding Sources
//!
//! Named, read-only signals a binding can map into a property value. The
//! registry is filled once when the engine starts and only read afterwards;
//! it has no interior mutability, so shared `&BindingSources` reads need no
//! locking.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::combat::CombatTracker;
use crate::player::PlayerState;

/// Everything a source may read for one evaluation.
pub struct SourceInput<'a> {
    pub player: &'a dyn PlayerState,
    pub combat: &'a CombatTracker,
    /// Ticks since the field instance spawned
    pub field_age: u64,
}

/// A live game-state signal.
pub trait BindingSource: Send + Sync {
    /// Stable id used by binding configs, e.g. `"player.health"`.
    fn id(&self) -> &str;

    /// Whether the value is always 0 or 1.
    fn is_boolean(&self) -> bool {
        false
    }

    /// Current raw value.
    fn value(&self, input: &SourceInput<'_>) -> f32;
}

/// The twelve built-in sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinSource {
    Health,
    HealthPercent,
    Armor,
    Food,
    Speed,
    Sprinting,
    Sneaking,
    Flying,
    Invisible,
    InCombat,
    DamageTaken,
    FieldAge,
}

impl BuiltinSource {
    pub const ALL: [BuiltinSource; 12] = [
        BuiltinSource::Health,
        BuiltinSource::HealthPercent,
        BuiltinSource::Armor,
        BuiltinSource::Food,
        BuiltinSource::Speed,
        BuiltinSource::Sprinting,
        BuiltinSource::Sneaking,
        BuiltinSource::Flying,
        BuiltinSource::Invisible,
        BuiltinSource::InCombat,
        BuiltinSource::DamageTaken,
        BuiltinSource::FieldAge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuiltinSource::Health => "player.health",
            BuiltinSource::HealthPercent => "player.health_percent",
            BuiltinSource::Armor => "player.armor",
            BuiltinSource::Food => "player.food",
            BuiltinSource::Speed => "player.speed",
            BuiltinSource::Sprinting => "player.sprinting",
            BuiltinSource::Sneaking => "player.sneaking",
            BuiltinSource::Flying => "player.flying",
            BuiltinSource::Invisible => "player.invisible",
            BuiltinSource::InCombat => "player.in_combat",
            BuiltinSource::DamageTaken => "player.damage_taken",
            BuiltinSource::FieldAge => "field.age",
        }
    }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

impl BindingSource for BuiltinSource {
    fn id(&self) -> &str {
        self.as_str()
    }

    fn is_boolean(&self) -> bool {
        matches!(
            self,
            BuiltinSource::Sprinting
                | BuiltinSource::Sneaking
                | BuiltinSource::Flying
                | BuiltinSource::Invisible
                | BuiltinSource::InCombat
        )
    }

    fn value(&self, input: &SourceInput<'_>) -> f32 {
        let player = input.player;
        match self {
            BuiltinSource::Health => player.health(),
            BuiltinSource::HealthPercent => player.health_percent(),
            BuiltinSource::Armor => player.armor(),
            BuiltinSource::Food => player.food_level(),
            BuiltinSource::Speed => player.horizontal_speed(),
            BuiltinSource::Sprinting => flag(player.is_sprinting()),
            BuiltinSource::Sneaking => flag(player.is_sneaking()),
            BuiltinSource::Flying => flag(player.is_flying()),
            BuiltinSource::Invisible => flag(player.is_invisible()),
            BuiltinSource::InCombat => flag(input.combat.is_in_combat(player.id())),
            BuiltinSource::DamageTaken => input.combat.damage_taken_decayed(player.id()),
            BuiltinSource::FieldAge => input.field_age as f32,
        }
    }
}

/// Closure-backed source for host-specific signals.
pub struct FnSource<F> {
    id: String,
    boolean: bool,
    read: F,
}

impl<F> FnSource<F>
where
    F: Fn(&SourceInput<'_>) -> f32 + Send + Sync,
{
    pub fn new(id: impl Into<String>, read: F) -> Self {
        Self {
            id: id.into(),
            boolean: false,
            read,
        }
    }

    pub fn boolean(id: impl Into<String>, read: F) -> Self {
        Self {
            id: id.into(),
            boolean: true,
            read,
        }
    }
}

impl<F> BindingSource for FnSource<F>
where
    F: Fn(&SourceInput<'_>) -> f32 + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn is_boolean(&self) -> bool {
        self.boolean
    }

    fn value(&self, input: &SourceInput<'_>) -> f32 {
        (self.read)(input)
    }
}

/// Source lookup table by id.
#[derive(Clone, Default)]
pub struct BindingSources {
    sources: HashMap<String, Arc<dyn BindingSource>>,
}

impl fmt::Debug for BindingSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingSources").field("ids", &self.ids()).finish()
    }
}

impl BindingSources {
    /// Registry with no sources at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with the twelve built-in sources.
    pub fn with_builtins() -> Self {
        let mut sources = Self::empty();
        for builtin in BuiltinSource::ALL {
            sources.register(builtin);
        }
        sources
    }

    /// Add a source, replacing any existing one with the same id.
    pub fn register<S: BindingSource + 'static>(&mut self, source: S) -> Option<Arc<dyn BindingSource>> {
        let id = source.id().to_string();
        let replaced = self.sources.insert(id.clone(), Arc::new(source));
        if replaced.is_some() {
            log::warn!("binding source {id:?} registered twice, keeping the newer one");
        }
        replaced
    }

    pub fn get(&self, id: &str) -> Option<&dyn BindingSource> {
        self.sources.get(id).map(|source| source.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
