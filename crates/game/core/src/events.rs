//! Structured engine outputs.
//!
//! The engine never formats text: every observable consequence of an action
//! surfaces as a [`GameEvent`]. Front ends render them; tests assert on
//! them.

use crate::progression::BoostKind;
use crate::state::EquipSlot;

/// One observable thing that happened.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// Damage was attempted against `target`. On an evasion or
    /// invincibility nullification `amount` is zero.
    DamageDealt {
        source: String,
        target: String,
        amount: i32,
        critical: bool,
        evaded: bool,
    },
    /// Current health changed outside of a damage event (healing,
    /// max-health growth).
    HealthChanged {
        name: String,
        health: i32,
        max_health: i32,
    },
    StatusApplied {
        target: String,
        effect: String,
        turns: u32,
    },
    StatusExpired {
        target: String,
        effect: String,
    },
    /// A skill ran out of uses and left its owner's book.
    SkillExhausted {
        owner: String,
        skill: String,
    },
    /// A combatant's action was forfeited by a skip-turn effect.
    TurnSkipped {
        name: String,
    },
    EncounterResolved {
        winner: String,
    },
    SkillLeveled {
        skill: String,
        level: u8,
    },
    SkillAcquired {
        skill: String,
    },
    SkillForgotten {
        skill: String,
    },
    StatRaised {
        stat: BoostKind,
        amount: f64,
    },
    ItemEquipped {
        slot: EquipSlot,
        item: String,
    },
    ItemUnequipped {
        slot: EquipSlot,
        item: String,
    },
    GoldGained {
        amount: u32,
        total: u32,
    },
    StageAdvanced {
        stage: u32,
    },
}
