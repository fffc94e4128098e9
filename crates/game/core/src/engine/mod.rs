//! Per-encounter turn state machine.
//!
//! Each round runs: status tick (player, then monster) → liveness check →
//! player action → liveness check → monster action → liveness check → next
//! round. The machine suspends only at the player-action decision point:
//! [`Encounter::advance`] runs everything it can and returns
//! [`EncounterStep::AwaitAction`] when it needs a choice, which the caller
//! supplies through [`Encounter::choose`]. Invalid choices are rejected
//! without any state change so the caller can simply re-request.
//!
//! All observable consequences accumulate as [`GameEvent`]s, drained with
//! [`Encounter::take_events`].

use crate::combat;
use crate::config::GameConfig;
use crate::effects;
use crate::env::RngOracle;
use crate::events::GameEvent;
use crate::state::{Monster, Player, TickReport};

/// Terminal result of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterOutcome {
    /// The monster fell; its gold is forfeit to the player's purse.
    Victory { gold: u32 },
    Defeat,
}

/// What the state machine needs next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterStep {
    /// A player action choice is required; call [`Encounter::choose`].
    AwaitAction,
    Resolved(EncounterOutcome),
}

/// Rejected player choice. The encounter state is untouched; re-request
/// the decision and try again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    #[error("choice {choice} is out of range (valid: 1..={max})")]
    OutOfRange { choice: usize, max: usize },
    #[error("the encounter is not awaiting a player action")]
    NotAwaitingAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    RoundStart,
    PlayerTurn,
    MonsterTurn,
    Resolved(EncounterOutcome),
}

/// A live encounter between the player and one monster.
pub struct Encounter<'a> {
    config: &'a GameConfig,
    player: &'a mut Player,
    monster: Monster,
    phase: Phase,
    round: u32,
    player_skips: bool,
    monster_skips: bool,
    events: Vec<GameEvent>,
}

impl<'a> Encounter<'a> {
    pub fn new(config: &'a GameConfig, player: &'a mut Player, monster: Monster) -> Self {
        Self {
            config,
            player,
            monster,
            phase: Phase::RoundStart,
            round: 0,
            player_skips: false,
            monster_skips: false,
            events: Vec::new(),
        }
    }

    pub fn player(&self) -> &Player {
        self.player
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    /// Rounds started so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Drain accumulated events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run the machine until it needs a player action or resolves.
    pub fn advance(&mut self, rng: &mut dyn RngOracle) -> EncounterStep {
        loop {
            match self.phase {
                Phase::RoundStart => {
                    self.round += 1;

                    let report = self.player.character.tick_statuses();
                    self.player_skips = report.skipped;
                    let name = self.player.character.name.clone();
                    self.push_tick_events(name, report);

                    let report = self.monster.character.tick_statuses();
                    self.monster_skips = report.skipped;
                    let name = self.monster.name().to_string();
                    self.push_tick_events(name, report);

                    // Player death takes precedence over a simultaneous
                    // monster death from damage-per-round effects.
                    if self.check_liveness() {
                        continue;
                    }
                    self.phase = Phase::PlayerTurn;
                }
                Phase::PlayerTurn => {
                    if self.player_skips {
                        self.events.push(GameEvent::TurnSkipped {
                            name: self.player.character.name.clone(),
                        });
                        self.phase = Phase::MonsterTurn;
                        continue;
                    }
                    return EncounterStep::AwaitAction;
                }
                Phase::MonsterTurn => {
                    self.monster_action(rng);
                    if self.check_liveness() {
                        continue;
                    }
                    self.phase = Phase::RoundStart;
                }
                Phase::Resolved(outcome) => return EncounterStep::Resolved(outcome),
            }
        }
    }

    /// Submit the player's action for this round.
    ///
    /// `1` is the basic attack; `2..=N+1` select the player's skills in
    /// book order. Only legal after [`Encounter::advance`] returned
    /// [`EncounterStep::AwaitAction`].
    pub fn choose(&mut self, choice: usize, rng: &mut dyn RngOracle) -> Result<(), ChoiceError> {
        if self.phase != Phase::PlayerTurn || self.player_skips {
            return Err(ChoiceError::NotAwaitingAction);
        }
        let max = self.player.character.skills.len() + 1;
        if choice < 1 || choice > max {
            return Err(ChoiceError::OutOfRange { choice, max });
        }

        if choice == 1 {
            let raw = self.player.character.effective.attack;
            let outcome =
                combat::deal_attack(&self.player.character, &mut self.monster.character, raw, rng);
            self.events.push(GameEvent::DamageDealt {
                source: self.player.character.name.clone(),
                target: self.monster.name().to_string(),
                amount: outcome.amount,
                critical: outcome.critical,
                evaded: outcome.evaded,
            });
        } else {
            // Take the skill out for the cast; an exhausted skill is not
            // put back, which removes it at the end of the action.
            let index = choice - 2;
            let mut skill = self.player.character.skills.remove(index);
            let mut events = effects::execute_skill(
                &mut skill,
                &mut self.player.character,
                &mut self.monster.character,
                rng,
            );
            self.events.append(&mut events);
            if skill.is_exhausted() {
                self.events.push(GameEvent::SkillExhausted {
                    owner: self.player.character.name.clone(),
                    skill: skill.name,
                });
            } else {
                self.player.character.skills.insert(index, skill);
            }
        }

        if !self.check_liveness() {
            self.phase = Phase::MonsterTurn;
        }
        Ok(())
    }

    /// Monster's action: with the configured chance, a uniformly chosen
    /// owned skill; otherwise a basic attack. A monster with no skills
    /// never draws the selection roll.
    fn monster_action(&mut self, rng: &mut dyn RngOracle) {
        if self.monster_skips {
            self.events.push(GameEvent::TurnSkipped {
                name: self.monster.name().to_string(),
            });
            return;
        }

        let skill_count = self.monster.character.skills.len();
        if skill_count > 0 && rng.chance(self.config.monster_skill_chance) {
            let index = rng.pick_index(skill_count);
            let mut skill = self.monster.character.skills.remove(index);
            let mut events = effects::execute_skill(
                &mut skill,
                &mut self.monster.character,
                &mut self.player.character,
                rng,
            );
            self.events.append(&mut events);
            if skill.is_exhausted() {
                self.events.push(GameEvent::SkillExhausted {
                    owner: self.monster.name().to_string(),
                    skill: skill.name,
                });
            } else {
                self.monster.character.skills.insert(index, skill);
            }
        } else {
            let raw = self.monster.character.effective.attack;
            let outcome =
                combat::deal_attack(&self.monster.character, &mut self.player.character, raw, rng);
            self.events.push(GameEvent::DamageDealt {
                source: self.monster.name().to_string(),
                target: self.player.character.name.clone(),
                amount: outcome.amount,
                critical: outcome.critical,
                evaded: outcome.evaded,
            });
        }
    }

    /// Transition to a terminal phase if either side is down. Player death
    /// is evaluated first. Returns true if the encounter resolved.
    fn check_liveness(&mut self) -> bool {
        if !self.player.character.is_alive() {
            self.resolve(EncounterOutcome::Defeat, self.monster.name().to_string());
            return true;
        }
        if !self.monster.character.is_alive() {
            self.resolve(
                EncounterOutcome::Victory {
                    gold: self.monster.gold,
                },
                self.player.character.name.clone(),
            );
            return true;
        }
        false
    }

    fn resolve(&mut self, outcome: EncounterOutcome, winner: String) {
        self.events.push(GameEvent::EncounterResolved { winner });
        self.phase = Phase::Resolved(outcome);
    }

    fn push_tick_events(&mut self, owner: String, report: TickReport) {
        for hit in report.dot_hits {
            self.events.push(GameEvent::DamageDealt {
                source: hit.effect,
                target: owner.clone(),
                amount: hit.outcome.amount,
                critical: false,
                evaded: false,
            });
        }
        for effect in report.expired {
            self.events.push(GameEvent::StatusExpired {
                target: owner.clone(),
                effect,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectId;
    use crate::env::ScriptedRng;
    use crate::state::{MonsterTemplate, StatusEffect, StatusFlags};
    use crate::stats::BaseStats;
    use crate::catalog::SkillTemplate;

    fn monster(health: i32, attack: f64) -> Monster {
        MonsterTemplate::new(
            "Plague Rat",
            1,
            false,
            health,
            BaseStats::new(attack, 0.0, 0.0, 0.0),
            4,
        )
        .spawn()
    }

    #[test]
    fn basic_attack_victory_yields_gold() {
        let config = GameConfig::default();
        let mut player = Player::new("wanderer");
        let mut enc = Encounter::new(&config, &mut player, monster(5, 1.0));
        // crit roll misses (0.9), evasion roll misses (0.5)
        let mut rng = ScriptedRng::new(vec![0.9, 0.5]);

        assert_eq!(enc.advance(&mut rng), EncounterStep::AwaitAction);
        enc.choose(1, &mut rng).unwrap();
        assert_eq!(
            enc.advance(&mut rng),
            EncounterStep::Resolved(EncounterOutcome::Victory { gold: 4 })
        );

        let events = enc.take_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::EncounterResolved { winner } if winner == "wanderer"
        )));
    }

    #[test]
    fn out_of_range_choice_leaves_state_untouched() {
        let config = GameConfig::default();
        let mut player = Player::new("wanderer");
        let mut enc = Encounter::new(&config, &mut player, monster(50, 1.0));
        let mut rng = ScriptedRng::new(vec![0.9, 0.5]);

        assert_eq!(enc.advance(&mut rng), EncounterStep::AwaitAction);
        assert_eq!(
            enc.choose(9, &mut rng),
            Err(ChoiceError::OutOfRange { choice: 9, max: 1 })
        );
        assert_eq!(
            enc.choose(0, &mut rng),
            Err(ChoiceError::OutOfRange { choice: 0, max: 1 })
        );
        assert_eq!(enc.monster().character.current_health, 50);
        // still awaiting the same decision
        assert_eq!(enc.advance(&mut rng), EncounterStep::AwaitAction);
        enc.choose(1, &mut rng).unwrap();
    }

    #[test]
    fn stunned_player_forfeits_the_action() {
        let config = GameConfig::default();
        let mut player = Player::new("wanderer");
        player
            .character
            .apply_status(StatusEffect::new("Stunned", 1).with_flags(StatusFlags::SKIP_TURN));
        let mut enc = Encounter::new(&config, &mut player, monster(50, 2.0));
        // monster turn: crit roll, evasion roll; round 2 awaits player
        let mut rng = ScriptedRng::new(vec![0.9, 0.9]);

        assert_eq!(enc.advance(&mut rng), EncounterStep::AwaitAction);
        assert_eq!(enc.round(), 2);

        let events = enc.take_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::TurnSkipped { name } if name == "wanderer"
        )));
        // the stun expired on the very tick it forfeited
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::StatusExpired { effect, .. } if effect == "Stunned"
        )));
        // the monster still acted
        assert!(enc.player().character.current_health < 100);
    }

    #[test]
    fn exhausted_skill_leaves_the_book_after_the_action() {
        let config = GameConfig::default();
        let mut player = Player::new("wanderer");
        player
            .character
            .skills
            .add(
                SkillTemplate::new("Kick", 3, 1, 1, EffectId::FixedStrike, 20.0).instantiate(),
            )
            .unwrap();
        let mut enc = Encounter::new(&config, &mut player, monster(50, 1.0));
        let mut rng = ScriptedRng::new(vec![0.9]);

        assert_eq!(enc.advance(&mut rng), EncounterStep::AwaitAction);
        enc.choose(2, &mut rng).unwrap();

        assert!(enc.player().character.skills.is_empty());
        let events = enc.take_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::SkillExhausted { skill, .. } if skill == "Kick"
        )));
    }

    #[test]
    fn monster_uses_a_skill_when_the_roll_says_so() {
        let config = GameConfig::default();
        let mut player = Player::new("wanderer");
        let template = MonsterTemplate::new(
            "Warmonger Hobgoblin",
            2,
            false,
            200,
            BaseStats::new(12.0, 6.0, 0.0, 0.0),
            12,
        )
        .with_skills(vec![SkillTemplate::new(
            "War Roar",
            3,
            1,
            3,
            EffectId::WarCry,
            3.0,
        )]);
        let mut enc = Encounter::new(&config, &mut player, template.spawn());
        // player: crit 0.9, evade 0.5; monster: skill roll 0.1 < 0.3,
        // pick 0.0 -> War Roar (self buff, no combat rolls)
        let mut rng = ScriptedRng::new(vec![0.9, 0.5, 0.1, 0.0]);

        assert_eq!(enc.advance(&mut rng), EncounterStep::AwaitAction);
        enc.choose(1, &mut rng).unwrap();
        assert_eq!(enc.advance(&mut rng), EncounterStep::AwaitAction);

        assert!(enc.monster().character.statuses.get("War Cry").is_some());
        assert_eq!(enc.monster().character.skills.find("War Roar").unwrap().uses, 2);
    }

    #[test]
    fn monster_kills_player_resolves_defeat() {
        let config = GameConfig::default();
        let mut player = Player::new("wanderer");
        let mut enc = Encounter::new(&config, &mut player, monster(1000, 500.0));
        let mut rng = ScriptedRng::new(vec![0.9, 0.9, 0.9, 0.9]);

        assert_eq!(enc.advance(&mut rng), EncounterStep::AwaitAction);
        enc.choose(1, &mut rng).unwrap();
        assert_eq!(
            enc.advance(&mut rng),
            EncounterStep::Resolved(EncounterOutcome::Defeat)
        );
    }
}
