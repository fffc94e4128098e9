//! Damage calculation and application.
//!
//! One shared pipeline converts a raw damage value plus defender state into
//! final health loss:
//!
//! ```text
//! 1. invincible?           -> nullified, zero damage
//! 2. evasion roll          -> roll < min(evasion, cap) nullifies
//! 3. effective defense     -> zero while any ignore-defense effect is active
//! 4. mitigated = max(1, round(raw / (1 + defense/100)))
//! 5. final    = max(1, round(mitigated × (1 + Σ damage-taken)))
//! 6. subtract from health, clamped at zero
//! ```
//!
//! The nullifying short-circuits bypass the minimum-1 floor entirely.
//! Critical rolls and the attacker's outgoing multiplier belong to the
//! deal-damage entry points, not to [`resolve`]; damage-per-round effects
//! use [`resolve_direct`], which skips evasion and defense but still honors
//! invincibility and the taken multiplier.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::Character;

/// Result of one damage resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Health actually lost.
    pub amount: i32,
    pub critical: bool,
    pub evaded: bool,
    /// Nullified by invincibility.
    pub nullified: bool,
    /// Defender health after application.
    pub health_after: i32,
}

impl DamageOutcome {
    fn no_damage(defender: &Character, critical: bool, evaded: bool, nullified: bool) -> Self {
        Self {
            amount: 0,
            critical,
            evaded,
            nullified,
            health_after: defender.current_health,
        }
    }
}

/// Resolve raw damage against a defender and apply the health loss.
///
/// Rolls evasion (one RNG draw unless the defender is invincible). The
/// caller decides criticality beforehand; `is_critical` only flows into the
/// outcome for reporting.
pub fn resolve(
    defender: &mut Character,
    raw_damage: f64,
    is_critical: bool,
    rng: &mut dyn RngOracle,
) -> DamageOutcome {
    if defender.statuses.is_invincible() {
        return DamageOutcome::no_damage(defender, is_critical, false, true);
    }

    let evasion = defender.effective.evasion.min(GameConfig::EVASION_CAP);
    if rng.chance(evasion) {
        return DamageOutcome::no_damage(defender, is_critical, true, false);
    }

    let defense = if defender.statuses.ignores_defense() {
        0.0
    } else {
        defender.effective.defense
    };
    let divisor = (1.0 + defense / 100.0).max(GameConfig::MIN_DEFENSE_DIVISOR);
    let mitigated = (raw_damage / divisor).round().max(1.0);
    let amount = (mitigated * defender.statuses.damage_taken_multiplier())
        .round()
        .max(1.0) as i32;

    let health_after = defender.lose_health(amount);
    DamageOutcome {
        amount,
        critical: is_critical,
        evaded: false,
        nullified: false,
        health_after,
    }
}

/// Basic-attack entry point: rolls the attacker's critical chance (doubling
/// raw damage on success), applies the attacker's outgoing multiplier, then
/// resolves.
///
/// RNG draw order: critical roll first, then the evasion roll inside
/// [`resolve`].
pub fn deal_attack(
    attacker: &Character,
    defender: &mut Character,
    raw_damage: f64,
    rng: &mut dyn RngOracle,
) -> DamageOutcome {
    let critical = rng.chance(attacker.effective.critical);
    let mut raw = raw_damage * attacker.statuses.damage_dealt_multiplier();
    if critical {
        raw *= GameConfig::CRIT_MULTIPLIER;
    }
    resolve(defender, raw, critical, rng)
}

/// Skill-damage entry point: applies the attacker's outgoing multiplier but
/// never rolls a critical.
pub fn deal_skill_damage(
    attacker: &Character,
    defender: &mut Character,
    raw_damage: f64,
    rng: &mut dyn RngOracle,
) -> DamageOutcome {
    let raw = raw_damage * attacker.statuses.damage_dealt_multiplier();
    resolve(defender, raw, false, rng)
}

/// Direct damage (damage-per-round effects): no evasion, no defense, no
/// critical. Invincibility still nullifies; the taken multiplier still
/// applies.
pub fn resolve_direct(defender: &mut Character, raw_damage: f64) -> DamageOutcome {
    if defender.statuses.is_invincible() {
        return DamageOutcome::no_damage(defender, false, false, true);
    }

    let amount = (raw_damage * defender.statuses.damage_taken_multiplier())
        .round()
        .max(1.0) as i32;
    let health_after = defender.lose_health(amount);
    DamageOutcome {
        amount,
        critical: false,
        evaded: false,
        nullified: false,
        health_after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{StatusEffect, StatusFlags};
    use crate::stats::BaseStats;

    fn defender(defense: f64, evasion: f64) -> Character {
        Character::new(
            "target",
            1000,
            BaseStats::new(0.0, defense, evasion, 0.0),
        )
    }

    #[test]
    fn defense_mitigation_rounds_up_through_the_formula() {
        // raw 10 vs defense 5: round(10 / 1.05) = round(9.523) = 10
        let mut target = defender(5.0, 0.0);
        let mut rng = ScriptedRng::new(vec![0.5]);
        let outcome = resolve(&mut target, 10.0, false, &mut rng);
        assert_eq!(outcome.amount, 10);
        assert_eq!(outcome.health_after, 990);
    }

    #[test]
    fn taken_modifiers_combine_additively_then_multiply() {
        let mut target = defender(5.0, 0.0);
        target.apply_status(StatusEffect::new("Fractured", 3).with_damage_taken_modifier(0.2));
        target.apply_status(StatusEffect::new("Warded", 3).with_damage_taken_modifier(-0.1));

        let mut rng = ScriptedRng::new(vec![0.5]);
        let outcome = resolve(&mut target, 10.0, false, &mut rng);
        // mitigated 10, multiplier 1.0 + 0.2 - 0.1 = 1.1 -> 11
        assert_eq!(outcome.amount, 11);
    }

    #[test]
    fn evasion_roll_is_capped_at_seventy_percent() {
        // stat says 90% but the roll must use 70%
        let mut target = defender(0.0, 0.9);

        let mut rng = ScriptedRng::new(vec![0.699]);
        let outcome = resolve(&mut target, 10.0, false, &mut rng);
        assert!(outcome.evaded);
        assert_eq!(outcome.amount, 0);

        let mut rng = ScriptedRng::new(vec![0.701]);
        let outcome = resolve(&mut target, 10.0, false, &mut rng);
        assert!(!outcome.evaded);
        assert!(outcome.amount >= 1);
    }

    #[test]
    fn minimum_one_damage_after_mitigation() {
        let mut target = defender(10_000.0, 0.0);
        let mut rng = ScriptedRng::new(vec![0.5]);
        let outcome = resolve(&mut target, 3.0, false, &mut rng);
        assert_eq!(outcome.amount, 1);
    }

    #[test]
    fn invincibility_nullifies_and_skips_the_floor() {
        let mut target = defender(0.0, 0.0);
        target.apply_status(StatusEffect::new("Shadow Form", 2).with_flags(StatusFlags::INVINCIBLE));

        let mut rng = ScriptedRng::new(vec![0.5]);
        let outcome = resolve(&mut target, 500.0, false, &mut rng);
        assert!(outcome.nullified);
        assert_eq!(outcome.amount, 0);
        assert_eq!(target.current_health, 1000);
    }

    #[test]
    fn ignore_defense_zeroes_mitigation() {
        let mut target = defender(100.0, 0.0);
        let mut rng = ScriptedRng::new(vec![0.5]);
        assert_eq!(resolve(&mut target, 50.0, false, &mut rng).amount, 25);

        target.apply_status(StatusEffect::new("Exposed", 2).with_flags(StatusFlags::IGNORE_DEFENSE));
        let mut rng = ScriptedRng::new(vec![0.5]);
        assert_eq!(resolve(&mut target, 50.0, false, &mut rng).amount, 50);
    }

    #[test]
    fn critical_doubles_raw_before_mitigation() {
        let attacker = Character::new("a", 100, BaseStats::new(10.0, 0.0, 0.0, 1.0));
        let mut target = defender(0.0, 0.0);

        // crit roll 0.0 < 1.0 succeeds, evasion roll misses nothing
        let mut rng = ScriptedRng::new(vec![0.0, 0.5]);
        let outcome = deal_attack(&attacker, &mut target, 10.0, &mut rng);
        assert!(outcome.critical);
        assert_eq!(outcome.amount, 20);
    }

    #[test]
    fn outgoing_multiplier_scales_attack_damage() {
        let mut attacker = Character::new("a", 100, BaseStats::new(10.0, 0.0, 0.0, 0.0));
        attacker.apply_status(
            StatusEffect::new("Focused Hatred", 2).with_damage_dealt_modifier(0.5),
        );
        let mut target = defender(0.0, 0.0);

        let mut rng = ScriptedRng::new(vec![0.9, 0.5]);
        let outcome = deal_attack(&attacker, &mut target, 10.0, &mut rng);
        assert!(!outcome.critical);
        assert_eq!(outcome.amount, 15);
    }

    #[test]
    fn direct_damage_skips_evasion_and_defense_but_not_invincibility() {
        // huge defense and evasion are irrelevant to per-round damage
        let mut target = defender(500.0, 0.9);
        let outcome = resolve_direct(&mut target, 12.0);
        assert_eq!(outcome.amount, 12);

        target.apply_status(StatusEffect::new("Shadow Form", 2).with_flags(StatusFlags::INVINCIBLE));
        let outcome = resolve_direct(&mut target, 12.0);
        assert!(outcome.nullified);
        assert_eq!(outcome.amount, 0);
    }
}
