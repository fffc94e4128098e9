//! Skill effect behaviors.
//!
//! Every skill in the catalog is bound to one [`EffectId`]. A behavior is a
//! pure handler: it reads the caster and target, the skill's level and
//! power, and returns the list of [`SkillMutation`]s to apply — it never
//! touches state itself. This keeps the catalog declarative data and the
//! dispatch exhaustively matchable.
//!
//! `level` scales most formulas; `power` is the per-skill coefficient that
//! distinguishes skills sharing an effect (a power-50 fixed strike and a
//! power-20 one are different skills, same behavior).
//!
//! Behaviors are total: every id yields a valid mutation list for any
//! living caster/target pair. Effects with no gameplay impact (a taunt)
//! return no mutations at all.

use strum::{Display, EnumIter};

use crate::state::{Character, StatusEffect, StatusFlags};

/// Which side of the cast a mutation lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recipient {
    Caster,
    Target,
}

/// One state change requested by a behavior, applied in order by the
/// executor.
#[derive(Clone, Debug, PartialEq)]
pub enum SkillMutation {
    /// Raw damage to the target, routed through the skill-damage pipeline
    /// (outgoing multiplier, evasion, defense, taken multiplier — no
    /// critical roll).
    Damage { raw: f64 },
    /// Healing, clamped at max health.
    Heal { who: Recipient, amount: f64 },
    /// Apply a status effect (replace-by-name).
    ApplyStatus { who: Recipient, effect: StatusEffect },
    /// Strip every status effect.
    Purge { who: Recipient },
}

/// Identity of a skill behavior.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectId {
    // ===== direct damage =====
    /// attack × (1 + level/5) × power
    ScalingStrike,
    /// attack × (1 + level/10) × power
    Pulverize,
    /// attack × level × power
    Reaping,
    /// level × power, independent of attack
    FixedStrike,
    /// Scaling strike that doubles below half health.
    Culling,
    /// attack × 2 × level × power
    Overwhelm,
    /// Two hits of attack × (0.5 + level/5) × power
    Flurry,

    // ===== drains =====
    /// Heal 20% of max health per level, then strike.
    LifeSteal,
    /// Strike, then heal a fraction of the raw damage.
    DrainLife,
    /// Heavy strike that feeds half its raw damage back as healing.
    Devour,
    /// Even exchange: damage and self-heal of the same raw amount.
    SoulDrain,

    // ===== self buffs =====
    /// Defense +10 × level × power for 3 rounds.
    IronWill,
    /// Attack +5 × level × power for 2 rounds.
    WarCry,
    /// Attack +current attack × power for 3 rounds.
    Frenzy,
    /// Attack +15 × level × power, defense −10 × level × power, 3 rounds.
    RecklessAbandon,
    /// Evasion +0.25 × level × power for 2 rounds.
    MirrorImage,
    /// Evasion +0.10 × level × power for 3 rounds.
    Fade,
    /// Defense +power × level for 2 rounds.
    BoneArmor,
    /// Defense +5 × level × power for 3 rounds.
    ThornMail,
    /// Outgoing damage +(1.5 + level/2) for `power` rounds.
    FocusedHatred,
    /// Invincible for `power` rounds.
    ShadowForm,
    /// Attack +10 × power for 99 rounds.
    SummonAbomination,

    // ===== target debuffs =====
    /// Skip-turn for `power` rounds.
    Stun,
    /// Attack shifted by target attack × power (power < 0) for 2 rounds.
    Cripple,
    /// Attack shifted by target attack × power (power < 0) for 3 rounds.
    Weaken,
    /// Damage taken +0.2 × power for 3 rounds.
    ShatterBone,
    /// Damage taken +power for 3 rounds.
    Hex,
    /// Taken and dealt both +power for 999 rounds.
    ScornTheWeak,
    /// Defense ignored for 2 rounds.
    ExposeWeakness,
    /// Evasion shifted by power × level (power < 0) for 2 rounds.
    Ensnare,
    /// Marker effect, no modifiers, 2 rounds.
    Silence,
    /// Skip-turn 1 round but defense +50 while petrified.
    PetrifyingGaze,

    // ===== damage over rounds =====
    /// attack × 0.5 × level × power per round, 3 rounds.
    Exsanguinate,
    /// attack × level × power per round, 5 rounds.
    Blight,
    /// attack × 0.2 × power per round, 3 rounds.
    PoisonBreath,
    /// attack × 0.04 × power per round plus stat rot, 5 rounds.
    Pestilence,

    // ===== breath and burst (monster staples) =====
    /// attack × power
    FireBreath,
    /// attack × 1.5 × power plus a 1-round freeze.
    FrostBreath,
    /// attack × 0.6 × power plus a 2-round snare.
    Whirlpool,

    // ===== utility =====
    /// Restore 15% of max health × level × power.
    Mend,
    /// Strip the caster's own status effects.
    Purify,
    /// No effect whatsoever.
    Taunt,
}

/// Round count encoded in a power coefficient (stuns, shadow forms).
fn turns_from_power(power: f64) -> u32 {
    power.round().max(1.0) as u32
}

/// Compute the mutation list for one cast.
pub fn mutations(
    effect: EffectId,
    caster: &Character,
    target: &Character,
    level: u8,
    power: f64,
) -> Vec<SkillMutation> {
    use Recipient::{Caster, Target};
    use SkillMutation::{ApplyStatus, Damage, Heal, Purge};

    let level = f64::from(level);
    let attack = caster.effective.attack;
    let max_health = f64::from(caster.max_health);

    match effect {
        EffectId::ScalingStrike => vec![Damage {
            raw: attack * (1.0 + level / 5.0) * power,
        }],
        EffectId::Pulverize => vec![Damage {
            raw: attack * (1.0 + level / 10.0) * power,
        }],
        EffectId::Reaping => vec![Damage {
            raw: attack * level * power,
        }],
        EffectId::FixedStrike => vec![Damage { raw: level * power }],
        EffectId::Culling => {
            let mut raw = attack * (1.0 + level / 5.0) * power;
            if target.current_health * 2 < target.max_health {
                raw *= 2.0;
            }
            vec![Damage { raw }]
        }
        EffectId::Overwhelm => vec![Damage {
            raw: attack * 2.0 * level * power,
        }],
        EffectId::Flurry => {
            let raw = attack * (0.5 + level / 5.0) * power;
            vec![Damage { raw }, Damage { raw }]
        }

        EffectId::LifeSteal => vec![
            Heal {
                who: Caster,
                amount: max_health * 0.2 * level * power,
            },
            Damage {
                raw: attack * 0.5 * level,
            },
        ],
        EffectId::DrainLife => {
            let raw = attack * 1.1 * power;
            vec![
                Damage { raw },
                Heal {
                    who: Caster,
                    amount: raw * 0.2 * level,
                },
            ]
        }
        EffectId::Devour => {
            let raw = attack * power;
            vec![
                Damage { raw },
                Heal {
                    who: Caster,
                    amount: raw * 0.5,
                },
            ]
        }
        EffectId::SoulDrain => vec![
            Damage {
                raw: attack * 0.5 * power,
            },
            Heal {
                who: Caster,
                amount: attack * 0.5 * power,
            },
        ],

        EffectId::IronWill => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("Iron Will", 3)
                .with_defense_modifier(10.0 * level * power),
        }],
        EffectId::WarCry => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("War Cry", 2).with_attack_modifier(5.0 * level * power),
        }],
        EffectId::Frenzy => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("Frenzy", 3).with_attack_modifier(attack * power),
        }],
        EffectId::RecklessAbandon => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("Reckless Abandon", 3)
                .with_attack_modifier(15.0 * level * power)
                .with_defense_modifier(-10.0 * level * power),
        }],
        EffectId::MirrorImage => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("Mirror Image", 2)
                .with_evasion_modifier(0.25 * level * power),
        }],
        EffectId::Fade => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("Blurred", 3).with_evasion_modifier(0.10 * level * power),
        }],
        EffectId::BoneArmor => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("Bone Armor", 2).with_defense_modifier(power * level),
        }],
        EffectId::ThornMail => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("Thorn Mail", 3)
                .with_defense_modifier(5.0 * level * power),
        }],
        EffectId::FocusedHatred => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("Focused Hatred", turns_from_power(power))
                .with_damage_dealt_modifier(1.5 + level / 2.0),
        }],
        EffectId::ShadowForm => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("Shadow Form", turns_from_power(power))
                .with_flags(StatusFlags::INVINCIBLE),
        }],
        EffectId::SummonAbomination => vec![ApplyStatus {
            who: Caster,
            effect: StatusEffect::new("Abominable Company", 99)
                .with_attack_modifier(10.0 * power),
        }],

        EffectId::Stun => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Stunned", turns_from_power(power))
                .with_flags(StatusFlags::SKIP_TURN),
        }],
        EffectId::Cripple => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Crippled", 2)
                .with_attack_modifier(target.effective.attack * power),
        }],
        EffectId::Weaken => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Weakened", 3)
                .with_attack_modifier(target.effective.attack * power),
        }],
        EffectId::ShatterBone => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Fractured", 3).with_damage_taken_modifier(0.2 * power),
        }],
        EffectId::Hex => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Hexed", 3).with_damage_taken_modifier(power),
        }],
        EffectId::ScornTheWeak => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Scorned", 999)
                .with_damage_taken_modifier(power)
                .with_damage_dealt_modifier(power),
        }],
        EffectId::ExposeWeakness => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Exposed", 2).with_flags(StatusFlags::IGNORE_DEFENSE),
        }],
        EffectId::Ensnare => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Snared", 2).with_evasion_modifier(power * level),
        }],
        EffectId::Silence => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Silenced", 2),
        }],
        EffectId::PetrifyingGaze => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Petrified", 1)
                .with_flags(StatusFlags::SKIP_TURN)
                .with_defense_modifier(50.0),
        }],

        EffectId::Exsanguinate => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Hemorrhage", 3)
                .with_damage_per_round(attack * 0.5 * level * power),
        }],
        EffectId::Blight => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Blight", 5)
                .with_damage_per_round(attack * level * power),
        }],
        EffectId::PoisonBreath => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Poisoned", 3)
                .with_damage_per_round(attack * 0.2 * power),
        }],
        EffectId::Pestilence => vec![ApplyStatus {
            who: Target,
            effect: StatusEffect::new("Plague", 5)
                .with_damage_per_round(attack * 0.04 * power)
                .with_attack_modifier(-5.0)
                .with_defense_modifier(-5.0),
        }],

        EffectId::FireBreath => vec![Damage {
            raw: attack * power,
        }],
        EffectId::FrostBreath => vec![
            Damage {
                raw: attack * 1.5 * power,
            },
            ApplyStatus {
                who: Target,
                effect: StatusEffect::new("Frozen", 1).with_flags(StatusFlags::SKIP_TURN),
            },
        ],
        EffectId::Whirlpool => vec![
            Damage {
                raw: attack * 0.6 * power,
            },
            ApplyStatus {
                who: Target,
                effect: StatusEffect::new("Bound", 2).with_evasion_modifier(-0.2),
            },
        ],

        EffectId::Mend => vec![Heal {
            who: Caster,
            amount: max_health * 0.15 * level * power,
        }],
        EffectId::Purify => vec![Purge { who: Caster }],
        EffectId::Taunt => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::BaseStats;
    use strum::IntoEnumIterator;

    fn pair() -> (Character, Character) {
        let caster = Character::new("caster", 100, BaseStats::new(10.0, 5.0, 0.1, 0.1));
        let target = Character::new("target", 80, BaseStats::new(8.0, 4.0, 0.1, 0.1));
        (caster, target)
    }

    #[test]
    fn every_behavior_is_total() {
        let (caster, target) = pair();
        for effect in EffectId::iter() {
            // must not panic for any valid pair, at any sampled power
            for power in [-0.5, 0.0, 1.0, 3.0] {
                let _ = mutations(effect, &caster, &target, 1, power);
            }
        }
    }

    #[test]
    fn culling_doubles_below_half_health() {
        let (caster, mut target) = pair();
        let healthy = mutations(EffectId::Culling, &caster, &target, 1, 1.0);
        target.lose_health(41); // 39 of 80 left
        let wounded = mutations(EffectId::Culling, &caster, &target, 1, 1.0);

        let raw_of = |muts: &[SkillMutation]| match muts[0] {
            SkillMutation::Damage { raw } => raw,
            _ => panic!("culling should deal damage"),
        };
        assert_eq!(raw_of(&wounded), raw_of(&healthy) * 2.0);
    }

    #[test]
    fn flurry_strikes_twice() {
        let (caster, target) = pair();
        let muts = mutations(EffectId::Flurry, &caster, &target, 1, 1.0);
        assert_eq!(muts.len(), 2);
        assert_eq!(muts[0], muts[1]);
    }

    #[test]
    fn taunt_is_a_valid_no_op() {
        let (caster, target) = pair();
        assert!(mutations(EffectId::Taunt, &caster, &target, 1, 1.0).is_empty());
    }

    #[test]
    fn weaken_scales_off_the_target_not_the_caster() {
        let (caster, target) = pair();
        let muts = mutations(EffectId::Weaken, &caster, &target, 1, -0.2);
        match &muts[0] {
            SkillMutation::ApplyStatus { who, effect } => {
                assert_eq!(*who, Recipient::Target);
                assert!((effect.attack_modifier - (8.0 * -0.2)).abs() < 1e-9);
            }
            other => panic!("unexpected mutation {other:?}"),
        }
    }
}
