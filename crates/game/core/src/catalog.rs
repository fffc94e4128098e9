//! The skill catalog: immutable registry of skill templates.
//!
//! The catalog is the single source of truth for what a skill *is*. Owners
//! never hold references into it — acquiring a skill instantiates a fresh
//! value-copy, so leveling or spending one owner's copy cannot leak into the
//! catalog or another owner.

use crate::effects::EffectId;
use crate::state::Skill;

/// Immutable description of a skill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillTemplate {
    pub name: String,
    pub max_level: u8,
    /// Rarity tier 1–5; 5 is reserved for monster-only skills.
    pub rarity: u8,
    /// Use budget per level.
    pub uses: u32,
    pub power: f64,
    pub monster_only: bool,
    pub effect: EffectId,
}

impl SkillTemplate {
    pub fn new(
        name: impl Into<String>,
        max_level: u8,
        rarity: u8,
        uses: u32,
        effect: EffectId,
        power: f64,
    ) -> Self {
        Self {
            name: name.into(),
            max_level,
            rarity,
            uses,
            power,
            monster_only: false,
            effect,
        }
    }

    pub fn monster_only(mut self) -> Self {
        self.monster_only = true;
        self
    }

    /// Create a fresh level-1 instance of this template (copy-on-acquire).
    pub fn instantiate(&self) -> Skill {
        Skill {
            name: self.name.clone(),
            level: 1,
            max_level: self.max_level,
            rarity: self.rarity,
            uses: self.uses,
            initial_uses: self.uses,
            power: self.power,
            monster_only: self.monster_only,
            effect: self.effect,
        }
    }
}

/// The full, immutable skill registry for a run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillCatalog {
    templates: Vec<SkillTemplate>,
}

impl SkillCatalog {
    /// Build a catalog from templates. Template names must be unique;
    /// content construction validates this.
    pub fn new(templates: Vec<SkillTemplate>) -> Self {
        Self { templates }
    }

    pub fn get(&self, name: &str) -> Option<&SkillTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Instantiate a fresh copy of the named template.
    pub fn instantiate(&self, name: &str) -> Option<Skill> {
        self.get(name).map(SkillTemplate::instantiate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instantiate_is_a_value_copy() {
        let catalog = SkillCatalog::new(vec![SkillTemplate::new(
            "Stab",
            2,
            1,
            99,
            EffectId::ScalingStrike,
            1.5,
        )]);

        let mut owned = catalog.instantiate("Stab").unwrap();
        owned.level_up();
        owned.spend_use();

        // the catalog template is untouched
        let template = catalog.get("Stab").unwrap();
        assert_eq!(template.uses, 99);
        let again = template.instantiate();
        assert_eq!(again.level, 1);
        assert_eq!(again.uses, 99);
    }
}
