//! Skill instances and the per-character skill book.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::effects::EffectId;

/// A skill instance owned by a character.
///
/// Instances are value-copies of catalog templates (copy-on-acquire):
/// leveling or spending one owner's copy never touches the catalog or any
/// other owner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub max_level: u8,
    /// Rarity tier 1–5; 5 is reserved for monster-only skills.
    pub rarity: u8,
    /// Remaining executions before the skill is spent.
    pub uses: u32,
    /// Per-level use budget; restored on level-up.
    pub initial_uses: u32,
    /// Per-skill coefficient distinguishing skills that share an effect.
    pub power: f64,
    pub monster_only: bool,
    pub effect: EffectId,
}

impl Skill {
    pub fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }

    pub fn is_exhausted(&self) -> bool {
        self.uses == 0
    }

    /// Raise the level by one (capped at max) and restore the use budget.
    pub fn level_up(&mut self) {
        self.level = (self.level + 1).min(self.max_level);
        self.uses = self.initial_uses;
    }

    /// Spend one use. Saturates at zero; executions are gated on
    /// `is_exhausted` by the owner.
    pub fn spend_use(&mut self) {
        self.uses = self.uses.saturating_sub(1);
    }
}

/// Bounded, ordered collection of skills owned by one character.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillBook {
    skills: ArrayVec<Skill, { GameConfig::MAX_SKILLS }>,
}

impl SkillBook {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_full(&self) -> bool {
        self.skills.is_full()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Skill> {
        self.skills.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    /// Add a skill. Returns the skill back if the book is full.
    pub fn add(&mut self, skill: Skill) -> Result<(), Skill> {
        self.skills.try_push(skill).map_err(|e| e.element())
    }

    /// Remove and return the skill at `index`.
    pub fn remove(&mut self, index: usize) -> Skill {
        self.skills.remove(index)
    }

    /// Put a skill back at `index` (after a temporary removal for
    /// execution). Positions of the other skills are preserved.
    pub fn insert(&mut self, index: usize, skill: Skill) {
        self.skills.insert(index, skill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.into(),
            level: 1,
            max_level: 3,
            rarity: 1,
            uses: 5,
            initial_uses: 5,
            power: 1.0,
            monster_only: false,
            effect: EffectId::ScalingStrike,
        }
    }

    #[test]
    fn level_up_caps_and_restores_uses() {
        let mut s = skill("Stab");
        s.uses = 1;
        s.level_up();
        assert_eq!(s.level, 2);
        assert_eq!(s.uses, 5);

        s.level_up();
        s.level_up();
        assert_eq!(s.level, 3);
        assert!(s.is_maxed());
    }

    #[test]
    fn book_rejects_fifth_skill() {
        let mut book = SkillBook::empty();
        for i in 0..GameConfig::MAX_SKILLS {
            assert!(book.add(skill(&format!("s{i}"))).is_ok());
        }
        assert!(book.is_full());
        assert!(book.add(skill("overflow")).is_err());
        assert_eq!(book.len(), GameConfig::MAX_SKILLS);
    }

    #[test]
    fn remove_then_insert_preserves_order() {
        let mut book = SkillBook::empty();
        book.add(skill("a")).unwrap();
        book.add(skill("b")).unwrap();
        book.add(skill("c")).unwrap();

        let taken = book.remove(1);
        book.insert(1, taken);

        let names: Vec<_> = book.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
