//! Skill execution.
//!
//! The executor is the only entry point for casting a skill: it spends one
//! use, asks the behavior table for the mutation list, and applies the
//! mutations in order through the damage resolver and the status ledgers.
//! Removing an exhausted skill from its owner's book is *not* done here —
//! that is the owner's job once the whole action has completed.

mod behavior;

pub use behavior::{EffectId, Recipient, SkillMutation, mutations};

use crate::combat;
use crate::env::RngOracle;
use crate::events::GameEvent;
use crate::state::{Character, Skill};

/// Execute one cast of `skill` by `caster` against `target`.
///
/// The skill's use count is decremented first, then every mutation the
/// behavior requests is applied in order. Returns the events describing
/// what happened.
pub fn execute_skill(
    skill: &mut Skill,
    caster: &mut Character,
    target: &mut Character,
    rng: &mut dyn RngOracle,
) -> Vec<GameEvent> {
    skill.spend_use();

    let requested = behavior::mutations(skill.effect, caster, target, skill.level, skill.power);

    let mut events = Vec::new();
    for mutation in requested {
        match mutation {
            SkillMutation::Damage { raw } => {
                let outcome = combat::deal_skill_damage(caster, target, raw, rng);
                events.push(GameEvent::DamageDealt {
                    source: caster.name.clone(),
                    target: target.name.clone(),
                    amount: outcome.amount,
                    critical: outcome.critical,
                    evaded: outcome.evaded,
                });
            }
            SkillMutation::Heal { who, amount } => {
                let recipient = match who {
                    Recipient::Caster => &mut *caster,
                    Recipient::Target => &mut *target,
                };
                recipient.heal(amount);
                events.push(GameEvent::HealthChanged {
                    name: recipient.name.clone(),
                    health: recipient.current_health,
                    max_health: recipient.max_health,
                });
            }
            SkillMutation::ApplyStatus { who, effect } => {
                let recipient = match who {
                    Recipient::Caster => &mut *caster,
                    Recipient::Target => &mut *target,
                };
                events.push(GameEvent::StatusApplied {
                    target: recipient.name.clone(),
                    effect: effect.name.clone(),
                    turns: effect.turns,
                });
                recipient.apply_status(effect);
            }
            SkillMutation::Purge { who } => {
                let recipient = match who {
                    Recipient::Caster => &mut *caster,
                    Recipient::Target => &mut *target,
                };
                let name = recipient.name.clone();
                for effect in recipient.clear_statuses() {
                    events.push(GameEvent::StatusExpired {
                        target: name.clone(),
                        effect,
                    });
                }
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{StatusEffect, StatusFlags};
    use crate::stats::BaseStats;

    fn skill(effect: EffectId, uses: u32, power: f64) -> Skill {
        Skill {
            name: "test-skill".into(),
            level: 1,
            max_level: 3,
            rarity: 1,
            uses,
            initial_uses: uses,
            power,
            monster_only: false,
            effect,
        }
    }

    fn pair() -> (Character, Character) {
        (
            Character::new("caster", 100, BaseStats::new(10.0, 0.0, 0.0, 0.0)),
            Character::new("target", 100, BaseStats::new(8.0, 0.0, 0.0, 0.0)),
        )
    }

    #[test]
    fn execution_spends_exactly_one_use() {
        let (mut caster, mut target) = pair();
        let mut s = skill(EffectId::ScalingStrike, 3, 1.0);
        let mut rng = ScriptedRng::new(vec![0.5]);

        execute_skill(&mut s, &mut caster, &mut target, &mut rng);
        assert_eq!(s.uses, 2);

        execute_skill(&mut s, &mut caster, &mut target, &mut rng);
        execute_skill(&mut s, &mut caster, &mut target, &mut rng);
        assert_eq!(s.uses, 0);
        assert!(s.is_exhausted());

        // saturates; never goes negative
        execute_skill(&mut s, &mut caster, &mut target, &mut rng);
        assert_eq!(s.uses, 0);
    }

    #[test]
    fn damage_skill_hits_through_the_resolver() {
        let (mut caster, mut target) = pair();
        let mut s = skill(EffectId::ScalingStrike, 3, 1.0);
        let mut rng = ScriptedRng::new(vec![0.9]);

        let events = execute_skill(&mut s, &mut caster, &mut target, &mut rng);
        // attack 10 × (1 + 1/5) × 1.0 = 12, no defense
        assert_eq!(
            events[0],
            GameEvent::DamageDealt {
                source: "caster".into(),
                target: "target".into(),
                amount: 12,
                critical: false,
                evaded: false,
            }
        );
        assert_eq!(target.current_health, 88);
    }

    #[test]
    fn buff_lands_on_caster_debuff_on_target() {
        let (mut caster, mut target) = pair();
        let mut rng = ScriptedRng::new(vec![0.5]);

        let mut buff = skill(EffectId::WarCry, 3, 3.0);
        execute_skill(&mut buff, &mut caster, &mut target, &mut rng);
        assert_eq!(caster.effective.attack, 25.0);
        assert!(target.statuses.is_empty());

        let mut debuff = skill(EffectId::Stun, 3, 1.0);
        execute_skill(&mut debuff, &mut caster, &mut target, &mut rng);
        assert!(target.statuses.skips_turn());
    }

    #[test]
    fn drain_heals_from_raw_damage() {
        let (mut caster, mut target) = pair();
        caster.lose_health(50);
        let mut s = skill(EffectId::Devour, 3, 2.0);
        let mut rng = ScriptedRng::new(vec![0.9]);

        let events = execute_skill(&mut s, &mut caster, &mut target, &mut rng);
        // raw 20 damage, heal 10
        assert_eq!(target.current_health, 80);
        assert_eq!(caster.current_health, 60);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn purify_strips_and_reports_every_effect() {
        let (mut caster, mut target) = pair();
        caster.apply_status(StatusEffect::new("Hexed", 3).with_damage_taken_modifier(0.5));
        caster.apply_status(StatusEffect::new("Stunned", 2).with_flags(StatusFlags::SKIP_TURN));

        let mut s = skill(EffectId::Purify, 1, 1.0);
        let mut rng = ScriptedRng::new(vec![0.5]);
        let events = execute_skill(&mut s, &mut caster, &mut target, &mut rng);

        assert!(caster.statuses.is_empty());
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GameEvent::StatusExpired { .. }));
    }
}
