//! The campaign driver.
//!
//! Ten stages, each three regular encounters and a boss. Every victory
//! pays out gold, a partial heal, a permanent stat boost, and a skill
//! offer; a boss victory additionally restores the player in full, opens
//! the shop, and descends one stage. Player defeat ends the run.

use tracing::{debug, info};

use abyss_content::GameContent;
use abyss_core::{
    Acquisition, Encounter, EncounterOutcome, EncounterStep, GameConfig, GameEvent, Monster,
    Player, RngOracle, SelectionError, acquire_skill, acquire_with_discard, apply_stat_boost,
    pick_boss, pick_regular, skill_offers, stat_boost_choices,
};

use crate::providers::{DecisionProvider, EventSink};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// All ten stages cleared.
    Cleared,
    /// The player fell.
    Slain { stage: u32 },
}

/// Unrecoverable campaign failure. Selection errors mean the content
/// tables are incomplete — a configuration bug, not a gameplay state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CampaignError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// One run of the descent: player, content, and current depth.
pub struct Campaign {
    config: GameConfig,
    content: GameContent,
    pub player: Player,
    pub stage: u32,
}

impl Campaign {
    /// Start a fresh run. `content` is expected to be validated —
    /// [`GameContent::standard`] already is.
    pub fn new(player_name: &str, content: GameContent, config: GameConfig) -> Self {
        Self {
            config,
            content,
            player: Player::new(player_name),
            stage: 1,
        }
    }

    /// Drive the whole run to its outcome.
    pub fn run(
        &mut self,
        provider: &mut dyn DecisionProvider,
        sink: &mut dyn EventSink,
        rng: &mut dyn RngOracle,
    ) -> Result<RunOutcome, CampaignError> {
        while self.stage <= GameConfig::FINAL_STAGE {
            info!(stage = self.stage, "descending");

            for _ in 0..GameConfig::BATTLES_PER_STAGE {
                let monster = pick_regular(&self.content.monsters, self.stage, rng)?;
                if !self.battle(monster, provider, sink, rng) {
                    return Ok(RunOutcome::Slain { stage: self.stage });
                }
            }

            let boss = pick_boss(&self.content.monsters, self.stage, rng)?;
            if !self.battle(boss, provider, sink, rng) {
                return Ok(RunOutcome::Slain { stage: self.stage });
            }

            // The stage is cleared: full restoration, one step deeper,
            // then a shop visit at the new depth.
            self.player
                .character
                .heal(f64::from(self.player.character.max_health));
            sink.emit(&GameEvent::HealthChanged {
                name: self.player.name().to_string(),
                health: self.player.character.current_health,
                max_health: self.player.character.max_health,
            });
            self.stage += 1;
            if self.stage <= GameConfig::FINAL_STAGE {
                sink.emit(&GameEvent::StageAdvanced { stage: self.stage });
            }
            crate::shop::run_shop(
                &mut self.player,
                &self.content.equipment,
                self.stage,
                provider,
                sink,
                rng,
            );
        }
        Ok(RunOutcome::Cleared)
    }

    /// Fight one encounter to its end. Returns true on victory.
    fn battle(
        &mut self,
        monster: Monster,
        provider: &mut dyn DecisionProvider,
        sink: &mut dyn EventSink,
        rng: &mut dyn RngOracle,
    ) -> bool {
        let boss = monster.boss;
        debug!(monster = monster.name(), boss, "encounter begins");

        let outcome = {
            let mut encounter = Encounter::new(&self.config, &mut self.player, monster);
            loop {
                let step = encounter.advance(rng);
                for event in encounter.take_events() {
                    sink.emit(&event);
                }
                match step {
                    EncounterStep::Resolved(outcome) => break outcome,
                    EncounterStep::AwaitAction => {
                        // invalid indices are rejected and simply re-requested
                        loop {
                            let choice =
                                provider.combat_action(encounter.player(), encounter.monster());
                            match encounter.choose(choice, rng) {
                                Ok(()) => break,
                                Err(error) => debug!(%error, "rejected combat action"),
                            }
                        }
                        for event in encounter.take_events() {
                            sink.emit(&event);
                        }
                    }
                }
            }
        };

        match outcome {
            EncounterOutcome::Victory { gold } => {
                self.player.gold += gold;
                sink.emit(&GameEvent::GoldGained {
                    amount: gold,
                    total: self.player.gold,
                });
                self.victory_rewards(boss, provider, sink, rng);
                true
            }
            EncounterOutcome::Defeat => false,
        }
    }

    /// Post-victory sequence: partial heal, stat boost, skill offer.
    fn victory_rewards(
        &mut self,
        boss_victory: bool,
        provider: &mut dyn DecisionProvider,
        sink: &mut dyn EventSink,
        rng: &mut dyn RngOracle,
    ) {
        let heal = f64::from(self.player.character.max_health) * GameConfig::VICTORY_HEAL_RATIO;
        self.player.character.heal(heal);
        sink.emit(&GameEvent::HealthChanged {
            name: self.player.name().to_string(),
            health: self.player.character.current_health,
            max_health: self.player.character.max_health,
        });

        // Stat boost: a choice is required, so re-request until valid.
        let choices = stat_boost_choices(self.stage);
        let boost = loop {
            let index = provider.stat_boost(&self.player, &choices);
            match choices.get(index) {
                Some(boost) => break *boost,
                None => debug!(index, "rejected stat boost choice"),
            }
        };
        let event = apply_stat_boost(&mut self.player, &boost);
        sink.emit(&event);

        // Skill offer: declinable at every step.
        let offers = skill_offers(&self.content.skills, &self.player, boss_victory, rng);
        if offers.is_empty() {
            return;
        }
        loop {
            let Some(index) = provider.skill_offer(&self.player, &offers) else {
                return; // declined
            };
            let Some(offer) = offers.get(index) else {
                debug!(index, "rejected skill offer choice");
                continue;
            };
            match acquire_skill(&mut self.player, &self.content.skills, &offer.name) {
                Some(Acquisition::LeveledUp { level }) => {
                    sink.emit(&GameEvent::SkillLeveled {
                        skill: offer.name.clone(),
                        level,
                    });
                    return;
                }
                Some(Acquisition::Added) => {
                    sink.emit(&GameEvent::SkillAcquired {
                        skill: offer.name.clone(),
                    });
                    return;
                }
                Some(Acquisition::NeedsDiscard) => loop {
                    let Some(discard) = provider.discard_for(&self.player, offer) else {
                        return; // declined; the book is untouched
                    };
                    match acquire_with_discard(
                        &mut self.player,
                        &self.content.skills,
                        &offer.name,
                        discard,
                    ) {
                        Some(forgotten) => {
                            sink.emit(&GameEvent::SkillForgotten { skill: forgotten });
                            sink.emit(&GameEvent::SkillAcquired {
                                skill: offer.name.clone(),
                            });
                            return;
                        }
                        None => debug!(discard, "rejected discard choice"),
                    }
                },
                None => {
                    debug!(offer = %offer.name, "offer named an unknown skill");
                    continue;
                }
            }
        }
    }
}
