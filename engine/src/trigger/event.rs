//! Discrete game events that can fire triggers.

use std::fmt;

use crate::config::json::normalize_ident;
use crate::player::PlayerId;

/// Game events a trigger rule can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEvent {
    /// Owner took damage
    PlayerDamage,
    /// Owner dealt damage
    PlayerAttack,
    /// Owner regained health
    PlayerHeal,
    PlayerDeath,
    PlayerRespawn,
    /// The field instance was created
    FieldSpawn,
    /// The field instance is being removed
    FieldDespawn,
}

impl FieldEvent {
    pub const ALL: [FieldEvent; 7] = [
        FieldEvent::PlayerDamage,
        FieldEvent::PlayerAttack,
        FieldEvent::PlayerHeal,
        FieldEvent::PlayerDeath,
        FieldEvent::PlayerRespawn,
        FieldEvent::FieldSpawn,
        FieldEvent::FieldDespawn,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FieldEvent::PlayerDamage => "player.damage",
            FieldEvent::PlayerAttack => "player.attack",
            FieldEvent::PlayerHeal => "player.heal",
            FieldEvent::PlayerDeath => "player.death",
            FieldEvent::PlayerRespawn => "player.respawn",
            FieldEvent::FieldSpawn => "field.spawn",
            FieldEvent::FieldDespawn => "field.despawn",
        }
    }

    /// Accepts both `"player.damage"` and `"PLAYER_DAMAGE"` spellings.
    pub fn from_id(id: &str) -> Option<Self> {
        let ident = normalize_ident(id).replace('.', "_");
        match ident.as_str() {
            "player_damage" => Some(FieldEvent::PlayerDamage),
            "player_attack" => Some(FieldEvent::PlayerAttack),
            "player_heal" => Some(FieldEvent::PlayerHeal),
            "player_death" => Some(FieldEvent::PlayerDeath),
            "player_respawn" => Some(FieldEvent::PlayerRespawn),
            "field_spawn" => Some(FieldEvent::FieldSpawn),
            "field_despawn" => Some(FieldEvent::FieldDespawn),
            _ => None,
        }
    }
}

impl fmt::Display for FieldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Extra payload carried by a dispatched event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EventData {
    /// Damage or heal amount, 0 when not applicable
    pub amount: f32,
    /// The other player involved (attacker or victim), if any
    pub other: Option<PlayerId>,
}

impl EventData {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn amount(amount: f32) -> Self {
        Self { amount, other: None }
    }

    pub fn with_other(mut self, other: PlayerId) -> Self {
        self.other = Some(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ids() {
        for event in FieldEvent::ALL {
            assert_eq!(FieldEvent::from_id(event.id()), Some(event));
        }
        assert_eq!(FieldEvent::from_id("PLAYER_DAMAGE"), Some(FieldEvent::PlayerDamage));
        assert_eq!(FieldEvent::from_id("field-despawn"), Some(FieldEvent::FieldDespawn));
        assert_eq!(FieldEvent::from_id("player.jump"), None);
    }

    #[test]
    fn test_event_data() {
        let data = EventData::amount(3.0).with_other(PlayerId(9));
        assert_eq!(data.amount, 3.0);
        assert_eq!(data.other, Some(PlayerId(9)));
        assert_eq!(EventData::none().amount, 0.0);
    }
}
