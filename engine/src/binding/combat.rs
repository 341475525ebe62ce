//! Combat Tracker
//!
//! Per-player combat activity feeding the `player.in_combat` and
//! `player.damage_taken` binding sources.
//!
//! Entries are created lazily on the first damage event and keyed by
//! [`PlayerId`]. They are removed explicitly when the host reports that a
//! player left ([`CombatTracker::remove`]). Reads for an unknown player
//! behave as an empty entry.
//!
//! The tracker is shared between the simulation tick and damage callbacks,
//! so all state sits behind one `parking_lot::Mutex`.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::player::PlayerId;

/// A player counts as in combat for this many ticks after taking or
/// dealing damage.
pub const COMBAT_WINDOW_TICKS: u64 = 100;

/// Per-tick multiplier applied to the decayed damage accumulator.
pub const DAMAGE_DECAY_FACTOR: f32 = 0.95;

/// Combat record for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CombatEntry {
    /// Tick of the last damage taken
    pub last_damage_taken: Option<u64>,
    /// Tick of the last damage dealt
    pub last_damage_dealt: Option<u64>,
    /// Size of the most recent hit taken
    pub last_hit_amount: f32,
    /// Damage taken, decayed by [`DAMAGE_DECAY_FACTOR`] every tick
    pub damage_taken_decayed: f32,
}

impl CombatEntry {
    fn is_in_combat(&self, now: u64) -> bool {
        let recent = |tick: Option<u64>| tick.is_some_and(|t| now.saturating_sub(t) < COMBAT_WINDOW_TICKS);
        recent(self.last_damage_taken) || recent(self.last_damage_dealt)
    }
}

#[derive(Debug, Default)]
struct CombatState {
    current_tick: u64,
    entries: HashMap<PlayerId, CombatEntry>,
}

/// Decaying combat state for every tracked player.
#[derive(Debug, Default)]
pub struct CombatTracker {
    state: Mutex<CombatState>,
}

impl CombatTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks since the tracker was created.
    pub fn current_tick(&self) -> u64 {
        self.state.lock().current_tick
    }

    /// Advance one tick and decay every accumulator.
    pub fn tick(&self) {
        let mut state = self.state.lock();
        state.current_tick += 1;
        for entry in state.entries.values_mut() {
            entry.damage_taken_decayed *= DAMAGE_DECAY_FACTOR;
        }
    }

    /// Record `amount` damage taken by `player` this tick.
    pub fn on_damage_taken(&self, player: PlayerId, amount: f32) {
        let amount = sanitize_amount(amount);
        let mut state = self.state.lock();
        let now = state.current_tick;
        let entry = state.entries.entry(player).or_default();
        entry.last_damage_taken = Some(now);
        entry.last_hit_amount = amount;
        entry.damage_taken_decayed = amount;
    }

    /// Record that `player` dealt damage this tick.
    pub fn on_damage_dealt(&self, player: PlayerId) {
        let mut state = self.state.lock();
        let now = state.current_tick;
        state.entries.entry(player).or_default().last_damage_dealt = Some(now);
    }

    pub fn is_in_combat(&self, player: PlayerId) -> bool {
        let state = self.state.lock();
        state
            .entries
            .get(&player)
            .is_some_and(|entry| entry.is_in_combat(state.current_tick))
    }

    pub fn damage_taken_decayed(&self, player: PlayerId) -> f32 {
        self.entry(player).damage_taken_decayed
    }

    pub fn last_hit_amount(&self, player: PlayerId) -> f32 {
        self.entry(player).last_hit_amount
    }

    /// Copy of the player's entry, or an empty one if untracked.
    pub fn entry(&self, player: PlayerId) -> CombatEntry {
        self.state.lock().entries.get(&player).copied().unwrap_or_default()
    }

    pub fn is_tracked(&self, player: PlayerId) -> bool {
        self.state.lock().entries.contains_key(&player)
    }

    /// Forget a player. Returns the removed entry.
    pub fn remove(&self, player: PlayerId) -> Option<CombatEntry> {
        self.state.lock().entries.remove(&player)
    }

    pub fn tracked_count(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn clear(&self) {
        self.state.lock().entries.clear();
    }
}

fn sanitize_amount(amount: f32) -> f32 {
    if amount.is_finite() { amount.max(0.0) } else { 0.0 }
}
