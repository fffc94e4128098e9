//! Decision providers and event sinks.
//!
//! The engine's only suspension points are the decisions listed on
//! [`DecisionProvider`]. Calls block until the provider answers; the engine
//! never times out or cancels a pending decision. Providers may return
//! anything — out-of-range answers are rejected by the engine and simply
//! re-requested, so a provider needs no validation of its own.

use std::collections::VecDeque;

use abyss_core::{Equipment, GameEvent, Monster, Player, SkillOffer, StatBoost};

/// Source of every external decision in a run.
pub trait DecisionProvider {
    /// Combat action: `1` is the basic attack, `2..=N+1` the player's
    /// skills in book order.
    fn combat_action(&mut self, player: &Player, monster: &Monster) -> usize;

    /// Post-victory stat boost: zero-based index into `choices`.
    fn stat_boost(&mut self, player: &Player, choices: &[StatBoost]) -> usize;

    /// Post-victory skill offer: zero-based index into `offers`, or `None`
    /// to decline.
    fn skill_offer(&mut self, player: &Player, offers: &[SkillOffer]) -> Option<usize>;

    /// The skill book is full: zero-based index of the owned skill to
    /// discard for `incoming`, or `None` to decline (nothing changes).
    fn discard_for(&mut self, player: &Player, incoming: &SkillOffer) -> Option<usize>;

    /// Shop visit: zero-based index into `stock` to purchase, or `None` to
    /// leave.
    fn shop_choice(&mut self, player: &Player, stock: &[Equipment]) -> Option<usize>;
}

/// Receiver for the engine's structured events.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

/// Collecting sink for tests.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Scripted provider for tests: answers come from fixed queues, with
/// conservative fallbacks once a queue runs dry (basic attack, first stat
/// boost, decline everything else).
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    pub combat: VecDeque<usize>,
    pub boosts: VecDeque<usize>,
    pub skills: VecDeque<Option<usize>>,
    pub discards: VecDeque<Option<usize>>,
    pub shop: VecDeque<Option<usize>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_combat(mut self, choices: impl IntoIterator<Item = usize>) -> Self {
        self.combat.extend(choices);
        self
    }

    pub fn with_boosts(mut self, choices: impl IntoIterator<Item = usize>) -> Self {
        self.boosts.extend(choices);
        self
    }

    pub fn with_skills(mut self, choices: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.skills.extend(choices);
        self
    }

    pub fn with_discards(mut self, choices: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.discards.extend(choices);
        self
    }

    pub fn with_shop(mut self, choices: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.shop.extend(choices);
        self
    }
}

impl DecisionProvider for ScriptedProvider {
    fn combat_action(&mut self, _player: &Player, _monster: &Monster) -> usize {
        self.combat.pop_front().unwrap_or(1)
    }

    fn stat_boost(&mut self, _player: &Player, _choices: &[StatBoost]) -> usize {
        self.boosts.pop_front().unwrap_or(0)
    }

    fn skill_offer(&mut self, _player: &Player, _offers: &[SkillOffer]) -> Option<usize> {
        self.skills.pop_front().unwrap_or(None)
    }

    fn discard_for(&mut self, _player: &Player, _incoming: &SkillOffer) -> Option<usize> {
        self.discards.pop_front().unwrap_or(None)
    }

    fn shop_choice(&mut self, _player: &Player, _stock: &[Equipment]) -> Option<usize> {
        self.shop.pop_front().unwrap_or(None)
    }
}
