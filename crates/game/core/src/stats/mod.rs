//! Stat model.
//!
//! Two layers: [`BaseStats`] is the stored truth (raised permanently by
//! progression rewards and equipment), [`EffectiveStats`] is derived from
//! base plus the additive modifiers of every active status effect. Derived
//! values are never stored independently of the ledger — they are recomputed
//! synchronously on every ledger mutation, so no stale cache can survive.
//!
//! Damage-taken and damage-dealt modifiers are deliberately *not* folded in
//! here; they are read straight off the ledger at damage-resolution time.

use crate::state::StatusLedger;

/// Stored base stats.
///
/// Evasion and critical chance are fractional probabilities in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub attack: f64,
    pub defense: f64,
    pub evasion: f64,
    pub critical: f64,
}

impl BaseStats {
    pub fn new(attack: f64, defense: f64, evasion: f64, critical: f64) -> Self {
        Self {
            attack,
            defense,
            evasion,
            critical,
        }
    }
}

/// Derived stats: base plus the sum of active additive modifiers.
///
/// Critical chance has no status-effect modifier source, so it mirrors the
/// base value; it lives here so combat reads one snapshot type.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveStats {
    pub attack: f64,
    pub defense: f64,
    pub evasion: f64,
    pub critical: f64,
}

impl EffectiveStats {
    /// Recompute every derived stat from base stats and the active ledger.
    pub fn compute(base: &BaseStats, ledger: &StatusLedger) -> Self {
        Self {
            attack: base.attack + ledger.attack_modifier(),
            defense: base.defense + ledger.defense_modifier(),
            evasion: base.evasion + ledger.evasion_modifier(),
            critical: base.critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusEffect;

    #[test]
    fn effective_equals_base_with_empty_ledger() {
        let base = BaseStats::new(10.0, 5.0, 0.1, 0.1);
        let ledger = StatusLedger::default();
        let eff = EffectiveStats::compute(&base, &ledger);
        assert_eq!(eff.attack, 10.0);
        assert_eq!(eff.defense, 5.0);
        assert_eq!(eff.evasion, 0.1);
        assert_eq!(eff.critical, 0.1);
    }

    #[test]
    fn modifiers_sum_additively_across_effects() {
        let base = BaseStats::new(10.0, 5.0, 0.1, 0.1);
        let mut ledger = StatusLedger::default();
        ledger.apply(StatusEffect::new("War Cry", 2).with_attack_modifier(5.0));
        ledger.apply(StatusEffect::new("Weakened", 3).with_attack_modifier(-2.0));
        ledger.apply(StatusEffect::new("Bone Armor", 2).with_defense_modifier(20.0));
        let eff = EffectiveStats::compute(&base, &ledger);
        assert_eq!(eff.attack, 13.0);
        assert_eq!(eff.defense, 25.0);
        assert_eq!(eff.evasion, 0.1);
    }
}
