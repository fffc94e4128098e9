//! Monsters and their spawn templates.

use crate::catalog::SkillTemplate;
use crate::state::Character;
use crate::stats::BaseStats;

/// Immutable description of a monster, one per content-table entry.
///
/// Templates are never fought directly; every encounter spawns a fresh
/// [`Monster`] with its own health, ledger, and skill use counts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub stage: u32,
    pub boss: bool,
    pub max_health: i32,
    pub stats: BaseStats,
    /// Gold awarded on death.
    pub gold: u32,
    pub skills: Vec<SkillTemplate>,
}

impl MonsterTemplate {
    pub fn new(
        name: impl Into<String>,
        stage: u32,
        boss: bool,
        max_health: i32,
        stats: BaseStats,
        gold: u32,
    ) -> Self {
        Self {
            name: name.into(),
            stage,
            boss,
            max_health,
            stats,
            gold,
            skills: Vec::new(),
        }
    }

    pub fn with_skills(mut self, skills: Vec<SkillTemplate>) -> Self {
        self.skills = skills;
        self
    }

    /// Spawn a fresh monster from this template.
    pub fn spawn(&self) -> Monster {
        let mut character = Character::new(self.name.clone(), self.max_health, self.stats);
        for template in &self.skills {
            if character.skills.add(template.instantiate()).is_err() {
                // skill book is bounded; content tables stay within capacity
                break;
            }
        }
        Monster {
            character,
            stage: self.stage,
            boss: self.boss,
            gold: self.gold,
        }
    }
}

/// A live monster in an encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub character: Character,
    pub stage: u32,
    pub boss: bool,
    pub gold: u32,
}

impl Monster {
    pub fn name(&self) -> &str {
        &self.character.name
    }
}
