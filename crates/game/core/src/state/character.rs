//! Combatant state.
//!
//! [`Character`] is the shared combat body: health, base stats, the derived
//! effective stats, the status ledger and the skill book. [`Player`] wraps a
//! character with the capabilities only the player has — equipment slots and
//! a gold purse — so code branches on data presence, never on identity
//! checks.
//!
//! # Invariants
//!
//! - `0 <= current_health <= max_health` at all times.
//! - `effective` always equals base stats plus the ledger's additive
//!   modifiers; every ledger or base-stat mutation goes through a helper
//!   that recomputes synchronously.

use crate::combat::{self, DamageOutcome};
use crate::state::equipment::{EquipSlot, Equipment, EquipmentSlots};
use crate::state::skill::SkillBook;
use crate::state::status::{StatusEffect, StatusFlags, StatusLedger};
use crate::stats::{BaseStats, EffectiveStats};

/// One damage-per-round hit delivered during a status tick.
#[derive(Clone, Debug, PartialEq)]
pub struct DotHit {
    /// Name of the effect that dealt the damage.
    pub effect: String,
    pub outcome: DamageOutcome,
}

/// What happened during a character's status tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// The owner forfeits its action this round.
    pub skipped: bool,
    pub dot_hits: Vec<DotHit>,
    /// Effects that expired this tick, in expiry order.
    pub expired: Vec<String>,
}

/// A combat-capable body: the player's or a monster's.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub max_health: i32,
    pub current_health: i32,
    base: BaseStats,
    /// Derived stats; recomputed on every ledger or base mutation.
    pub effective: EffectiveStats,
    pub statuses: StatusLedger,
    pub skills: SkillBook,
}

impl Character {
    pub fn new(name: impl Into<String>, max_health: i32, base: BaseStats) -> Self {
        let ledger = StatusLedger::empty();
        let effective = EffectiveStats::compute(&base, &ledger);
        Self {
            name: name.into(),
            max_health,
            current_health: max_health,
            base,
            effective,
            statuses: ledger,
            skills: SkillBook::empty(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    /// Recompute effective stats from base plus the active ledger.
    pub fn recompute(&mut self) {
        self.effective = EffectiveStats::compute(&self.base, &self.statuses);
    }

    /// Mutate base stats and recompute.
    pub fn adjust_base(&mut self, f: impl FnOnce(&mut BaseStats)) {
        f(&mut self.base);
        self.recompute();
    }

    /// Raise max health, carrying current health along.
    pub fn raise_max_health(&mut self, amount: i32) {
        self.max_health = (self.max_health + amount).max(1);
        self.current_health = (self.current_health + amount).clamp(1, self.max_health);
    }

    /// Subtract health, clamped at zero. Returns health after.
    pub fn lose_health(&mut self, amount: i32) -> i32 {
        self.current_health = (self.current_health - amount).max(0);
        self.current_health
    }

    /// Restore health, clamped at max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: f64) -> i32 {
        let before = self.current_health;
        let restored = amount.round() as i32;
        self.current_health = (self.current_health + restored).clamp(0, self.max_health);
        self.current_health - before
    }

    /// Apply a status effect, replacing any active effect of the same name,
    /// and recompute.
    pub fn apply_status(&mut self, effect: StatusEffect) {
        self.statuses.apply(effect);
        self.recompute();
    }

    /// Remove every status effect and recompute. Returns removed names.
    pub fn clear_statuses(&mut self) -> Vec<String> {
        let names = self.statuses.clear();
        self.recompute();
        names
    }

    /// Run one status tick.
    ///
    /// For each active effect, in application order: deliver its
    /// damage-per-round (direct damage — no evasion or defense roll), note a
    /// skip-turn flag, decrement the duration, and remove the effect the
    /// moment its duration reaches zero. Each removal recomputes stats
    /// immediately. A skip-turn effect still ticks and may expire on the
    /// very round it forfeits.
    pub fn tick_statuses(&mut self) -> TickReport {
        let mut report = TickReport::default();
        let mut index = 0;
        while index < self.statuses.len() {
            let (name, damage_per_round, skips) = match self.statuses.at(index) {
                Some(e) => (
                    e.name.clone(),
                    e.damage_per_round,
                    e.flags.contains(StatusFlags::SKIP_TURN),
                ),
                None => break,
            };

            if skips {
                report.skipped = true;
            }

            if damage_per_round > 0.0 {
                let outcome = combat::resolve_direct(self, damage_per_round);
                report.dot_hits.push(DotHit {
                    effect: name.clone(),
                    outcome,
                });
            }

            let expired = match self.statuses.get_mut(index) {
                Some(e) => {
                    e.turns = e.turns.saturating_sub(1);
                    e.turns == 0
                }
                None => false,
            };

            if expired {
                self.statuses.remove(index);
                self.recompute();
                report.expired.push(name);
            } else {
                index += 1;
            }
        }
        report
    }
}

/// The player: a character plus equipment and gold.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub character: Character,
    pub equipment: EquipmentSlots,
    pub gold: u32,
}

impl Player {
    /// Starting body of every run.
    const STARTING_HEALTH: i32 = 100;
    const STARTING_STATS: BaseStats = BaseStats {
        attack: 10.0,
        defense: 5.0,
        evasion: 0.10,
        critical: 0.10,
    };

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            character: Character::new(name, Self::STARTING_HEALTH, Self::STARTING_STATS),
            equipment: EquipmentSlots::empty(),
            gold: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.character.name
    }

    /// Equip an item, displacing (and reversing the deltas of) whatever
    /// occupied its slot. Returns the displaced item.
    pub fn equip(&mut self, item: Equipment) -> Option<Equipment> {
        let replaced = self.unequip(item.slot);
        self.character.max_health = (self.character.max_health + item.health).max(1);
        self.character.current_health =
            (self.character.current_health + item.health).clamp(1, self.character.max_health);
        self.character.adjust_base(|base| {
            base.attack += item.attack;
            base.defense += item.defense;
            base.critical += item.critical;
            base.evasion += item.evasion;
        });
        self.equipment.put(item);
        replaced
    }

    /// Remove the item in `slot`, reversing its stat deltas. Current health
    /// clamps to the adjusted maximum; taking armor off never kills.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<Equipment> {
        let item = self.equipment.take(slot)?;
        self.character.max_health = (self.character.max_health - item.health).max(1);
        self.character.current_health = self
            .character
            .current_health
            .clamp(1, self.character.max_health);
        self.character.adjust_base(|base| {
            base.attack -= item.attack;
            base.defense -= item.defense;
            base.critical -= item.critical;
            base.evasion -= item.evasion;
        });
        Some(item)
    }
}
