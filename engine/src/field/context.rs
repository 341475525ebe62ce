//! Engine Context
//!
//! The application-root object that owns the engine's shared state: the
//! binding source registry, the combat tracker and the trigger dispatcher.
//! Create one at startup and pass it to whatever drives fields; there are no
//! globals.

use std::sync::Arc;

use crate::binding::{BindingResolver, BindingSources, CombatTracker};
use crate::player::PlayerId;
use crate::trigger::{EventData, FieldEvent, TriggerEventDispatcher};

#[derive(Debug, Clone)]
pub struct EngineContext {
    sources: Arc<BindingSources>,
    combat: Arc<CombatTracker>,
    dispatcher: Arc<TriggerEventDispatcher>,
    resolver: BindingResolver,
}

static_assertions::assert_impl_all!(EngineContext: Send, Sync);

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineContext {
    /// Context with the built-in player sources.
    pub fn new() -> Self {
        Self::with_sources(BindingSources::with_builtins())
    }

    /// Context over a caller-assembled source registry. The registry is
    /// frozen from here on.
    pub fn with_sources(sources: BindingSources) -> Self {
        let sources = Arc::new(sources);
        let combat = Arc::new(CombatTracker::new());
        let resolver = BindingResolver::new(Arc::clone(&sources), Arc::clone(&combat));
        Self {
            sources,
            combat,
            dispatcher: Arc::new(TriggerEventDispatcher::new()),
            resolver,
        }
    }

    pub fn sources(&self) -> &BindingSources {
        &self.sources
    }

    pub fn combat(&self) -> &CombatTracker {
        &self.combat
    }

    pub fn dispatcher(&self) -> &TriggerEventDispatcher {
        &self.dispatcher
    }

    pub fn resolver(&self) -> &BindingResolver {
        &self.resolver
    }

    /// Advance shared per-tick state. Call once per game tick, before the
    /// field instances tick.
    pub fn tick(&self) {
        self.combat.tick();
    }

    pub fn on_damage_taken(&self, player: PlayerId, amount: f32) {
        self.combat.on_damage_taken(player, amount);
        self.dispatcher
            .dispatch(FieldEvent::PlayerDamage, Some(player), &EventData::amount(amount));
    }

    /// `player` hit `target` for `amount`.
    pub fn on_damage_dealt(&self, player: PlayerId, target: PlayerId, amount: f32) {
        self.combat.on_damage_dealt(player);
        self.dispatcher.dispatch(
            FieldEvent::PlayerAttack,
            Some(player),
            &EventData::amount(amount).with_other(target),
        );
    }

    pub fn on_heal(&self, player: PlayerId, amount: f32) {
        self.dispatcher
            .dispatch(FieldEvent::PlayerHeal, Some(player), &EventData::amount(amount));
    }

    pub fn on_death(&self, player: PlayerId) {
        self.dispatcher
            .dispatch(FieldEvent::PlayerDeath, Some(player), &EventData::none());
    }

    pub fn on_respawn(&self, player: PlayerId) {
        self.dispatcher
            .dispatch(FieldEvent::PlayerRespawn, Some(player), &EventData::none());
    }

    /// Drop everything held for a departing player.
    pub fn on_player_disconnect(&self, player: PlayerId) {
        self.combat.remove(player);
        if self.dispatcher.unregister(player).is_some() {
            log::debug!("released trigger processor for disconnected {player}");
        }
    }
}
