//! Status effect system.
//!
//! Status effects are temporary conditions that modify stats, deal damage
//! each round, or restrict actions. Every character owns a [`StatusLedger`]
//! of active effects, unique by name.
//!
//! # Replace-by-name
//!
//! Applying an effect whose name matches an active one replaces the old
//! instance wholesale — duration and modifiers reset to the new values.
//! Effects never stack with themselves.
//!
//! # Round-based duration
//!
//! Durations are whole rounds, decremented once per round during the
//! owner's status tick. An effect whose duration hits zero is removed on
//! that same tick.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

bitflags::bitflags! {
    /// Behavior flags carried by a status effect.
    ///
    /// Serde support comes from the `bitflags/serde` feature.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u8 {
        /// Defender's defense counts as zero while active.
        const IGNORE_DEFENSE = 1 << 0;
        /// Owner forfeits their action each round.
        const SKIP_TURN = 1 << 1;
        /// All incoming damage is nullified.
        const INVINCIBLE = 1 << 2;
    }
}

/// A single status effect.
///
/// Attack/defense/evasion modifiers are additive onto base stats. The
/// damage-taken and damage-dealt modifiers are additive terms of a shared
/// multiplier (`1.0 + Σ`), combined across effects at resolution time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    /// Display name; also the replace-by-name stacking key.
    pub name: String,
    /// Remaining duration in rounds.
    pub turns: u32,
    pub attack_modifier: f64,
    pub defense_modifier: f64,
    pub evasion_modifier: f64,
    pub damage_taken_modifier: f64,
    pub damage_dealt_modifier: f64,
    pub flags: StatusFlags,
    /// Direct damage dealt to the owner on each of its status ticks.
    pub damage_per_round: f64,
}

impl StatusEffect {
    pub fn new(name: impl Into<String>, turns: u32) -> Self {
        Self {
            name: name.into(),
            turns,
            attack_modifier: 0.0,
            defense_modifier: 0.0,
            evasion_modifier: 0.0,
            damage_taken_modifier: 0.0,
            damage_dealt_modifier: 0.0,
            flags: StatusFlags::empty(),
            damage_per_round: 0.0,
        }
    }

    pub fn with_attack_modifier(mut self, value: f64) -> Self {
        self.attack_modifier = value;
        self
    }

    pub fn with_defense_modifier(mut self, value: f64) -> Self {
        self.defense_modifier = value;
        self
    }

    pub fn with_evasion_modifier(mut self, value: f64) -> Self {
        self.evasion_modifier = value;
        self
    }

    pub fn with_damage_taken_modifier(mut self, value: f64) -> Self {
        self.damage_taken_modifier = value;
        self
    }

    pub fn with_damage_dealt_modifier(mut self, value: f64) -> Self {
        self.damage_dealt_modifier = value;
        self
    }

    pub fn with_flags(mut self, flags: StatusFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_damage_per_round(mut self, value: f64) -> Self {
        self.damage_per_round = value;
        self
    }
}

/// Active status effects on a character, ordered by application.
///
/// The ledger is pure bookkeeping: it never touches health or stats itself.
/// Ticking (damage-per-round, expiry, stat recomputation) is orchestrated by
/// the owning character so the borrow of health and ledger stays in one
/// place.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusLedger {
    effects: ArrayVec<StatusEffect, { GameConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusLedger {
    /// Creates an empty ledger.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Applies an effect, replacing any active effect of the same name.
    ///
    /// If the ledger is full the oldest effect is evicted first. The caller
    /// is responsible for triggering stat recomputation afterwards.
    pub fn apply(&mut self, effect: StatusEffect) {
        self.effects.retain(|e| e.name != effect.name);
        if self.effects.is_full() {
            self.effects.remove(0);
        }
        self.effects.push(effect);
    }

    /// Removes the effect at `index`, returning it.
    pub fn remove(&mut self, index: usize) -> StatusEffect {
        self.effects.remove(index)
    }

    /// Removes every effect, returning the removed names in order.
    pub fn clear(&mut self) -> Vec<String> {
        let names = self.effects.iter().map(|e| e.name.clone()).collect();
        self.effects.clear();
        names
    }

    pub fn get(&self, name: &str) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.name == name)
    }

    pub fn at(&self, index: usize) -> Option<&StatusEffect> {
        self.effects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut StatusEffect> {
        self.effects.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    // ===== aggregates read by the stat model and damage resolution =====

    pub fn attack_modifier(&self) -> f64 {
        self.effects.iter().map(|e| e.attack_modifier).sum()
    }

    pub fn defense_modifier(&self) -> f64 {
        self.effects.iter().map(|e| e.defense_modifier).sum()
    }

    pub fn evasion_modifier(&self) -> f64 {
        self.effects.iter().map(|e| e.evasion_modifier).sum()
    }

    /// Combined incoming-damage multiplier `1.0 + Σ taken`, floored at zero.
    pub fn damage_taken_multiplier(&self) -> f64 {
        let sum: f64 = self.effects.iter().map(|e| e.damage_taken_modifier).sum();
        (1.0 + sum).max(0.0)
    }

    /// Combined outgoing-damage multiplier `1.0 + Σ dealt`, floored at zero.
    pub fn damage_dealt_multiplier(&self) -> f64 {
        let sum: f64 = self.effects.iter().map(|e| e.damage_dealt_modifier).sum();
        (1.0 + sum).max(0.0)
    }

    pub fn is_invincible(&self) -> bool {
        self.effects
            .iter()
            .any(|e| e.flags.contains(StatusFlags::INVINCIBLE))
    }

    pub fn ignores_defense(&self) -> bool {
        self.effects
            .iter()
            .any(|e| e.flags.contains(StatusFlags::IGNORE_DEFENSE))
    }

    pub fn skips_turn(&self) -> bool {
        self.effects
            .iter()
            .any(|e| e.flags.contains(StatusFlags::SKIP_TURN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_same_name_wholesale() {
        let mut ledger = StatusLedger::empty();
        ledger.apply(StatusEffect::new("Hexed", 3).with_damage_taken_modifier(0.2));
        ledger.apply(StatusEffect::new("Hexed", 5).with_damage_taken_modifier(0.5));

        assert_eq!(ledger.len(), 1);
        let effect = ledger.get("Hexed").unwrap();
        assert_eq!(effect.turns, 5);
        assert_eq!(effect.damage_taken_modifier, 0.5);
    }

    #[test]
    fn distinct_names_coexist_and_sum() {
        let mut ledger = StatusLedger::empty();
        ledger.apply(StatusEffect::new("Fractured", 3).with_damage_taken_modifier(0.2));
        ledger.apply(StatusEffect::new("Warded", 3).with_damage_taken_modifier(-0.1));

        assert_eq!(ledger.len(), 2);
        assert!((ledger.damage_taken_multiplier() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn full_ledger_evicts_oldest() {
        let mut ledger = StatusLedger::empty();
        for i in 0..GameConfig::MAX_STATUS_EFFECTS + 1 {
            ledger.apply(StatusEffect::new(format!("effect-{i}"), 2));
        }
        assert_eq!(ledger.len(), GameConfig::MAX_STATUS_EFFECTS);
        assert!(ledger.get("effect-0").is_none());
        assert!(ledger.get("effect-1").is_some());
    }

    #[test]
    fn flag_queries_scan_all_effects() {
        let mut ledger = StatusLedger::empty();
        ledger.apply(StatusEffect::new("Exposed", 2).with_flags(StatusFlags::IGNORE_DEFENSE));
        ledger.apply(StatusEffect::new("Stunned", 1).with_flags(StatusFlags::SKIP_TURN));

        assert!(ledger.ignores_defense());
        assert!(ledger.skips_turn());
        assert!(!ledger.is_invincible());
    }
}
