//! Player state accessor
//!
//! The engine never owns players. Hosts hand it something implementing
//! [`PlayerState`] each tick; binding sources read from it and nothing else.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable player identity used as the key of every per-player registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// Handle to a non-player entity a force can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Read-only view of a player's live state.
pub trait PlayerState {
    fn id(&self) -> PlayerId;
    fn health(&self) -> f32;
    fn max_health(&self) -> f32;
    fn armor(&self) -> f32;
    /// Hunger bar, 0..=20
    fn food_level(&self) -> f32;
    /// Horizontal speed in blocks per tick
    fn horizontal_speed(&self) -> f32;
    fn is_sprinting(&self) -> bool;
    fn is_sneaking(&self) -> bool;
    fn is_flying(&self) -> bool;
    fn is_invisible(&self) -> bool;

    /// Health as a fraction of max health. Zero max health reads as 0.
    fn health_percent(&self) -> f32 {
        let max = self.max_health();
        if max <= 0.0 {
            0.0
        } else {
            (self.health() / max).clamp(0.0, 1.0)
        }
    }
}

/// Plain-data [`PlayerState`] for hosts that copy state out once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub health: f32,
    pub max_health: f32,
    pub armor: f32,
    pub food_level: f32,
    pub horizontal_speed: f32,
    pub sprinting: bool,
    pub sneaking: bool,
    pub flying: bool,
    pub invisible: bool,
}

impl PlayerSnapshot {
    /// Full health, full food, standing still.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            health: 20.0,
            max_health: 20.0,
            armor: 0.0,
            food_level: 20.0,
            horizontal_speed: 0.0,
            sprinting: false,
            sneaking: false,
            flying: false,
            invisible: false,
        }
    }

    pub fn with_health(mut self, health: f32, max_health: f32) -> Self {
        self.health = health;
        self.max_health = max_health;
        self
    }
}

impl PlayerState for PlayerSnapshot {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn health(&self) -> f32 {
        self.health
    }

    fn max_health(&self) -> f32 {
        self.max_health
    }

    fn armor(&self) -> f32 {
        self.armor
    }

    fn food_level(&self) -> f32 {
        self.food_level
    }

    fn horizontal_speed(&self) -> f32 {
        self.horizontal_speed
    }

    fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    fn is_sneaking(&self) -> bool {
        self.sneaking
    }

    fn is_flying(&self) -> bool {
        self.flying
    }

    fn is_invisible(&self) -> bool {
        self.invisible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_percent() {
        let player = PlayerSnapshot::new(PlayerId(1)).with_health(10.0, 20.0);
        assert!((player.health_percent() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_health_percent_zero_max() {
        let player = PlayerSnapshot::new(PlayerId(1)).with_health(10.0, 0.0);
        assert_eq!(player.health_percent(), 0.0);
    }

    #[test]
    fn test_snapshot_json() {
        let player = PlayerSnapshot::new(PlayerId(7));
        let json = serde_json::to_string(&player).unwrap();
        let back: PlayerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, player);
    }
}
