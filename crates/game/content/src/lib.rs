//! Static game content: the skill catalog, monster tables, and equipment
//! tables.
//!
//! Content is plain data built in code and validated on construction —
//! every monster skill reference must resolve against the catalog, names
//! must be unique, the monster-only rarity tier must be flagged as such,
//! and every stage needs both regulars and a boss. Content is consumed by
//! the runtime and never appears in engine state.

mod equipment;
mod monsters;
mod skills;

pub use equipment::equipment_catalog;
pub use monsters::monster_templates;
pub use skills::skill_catalog;

use abyss_core::{Equipment, GameConfig, MonsterTemplate, SkillCatalog};

/// A content table violated an invariant the engine relies on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("duplicate skill name in catalog: {0}")]
    DuplicateSkill(String),
    #[error("monster '{monster}' references unknown skill '{skill}'")]
    UnknownSkill { monster: String, skill: String },
    #[error("skill '{0}' is rarity {1} but not flagged monster-only")]
    UnflaggedMonsterRarity(String, u8),
    #[error("stage {stage} has no {role}")]
    MissingStage { stage: u32, role: &'static str },
    #[error("monster '{0}' carries more skills than a book holds")]
    OverfullSkillList(String),
}

/// Everything a run needs: skills, monsters, equipment.
#[derive(Clone, Debug, PartialEq)]
pub struct GameContent {
    pub skills: SkillCatalog,
    pub monsters: Vec<MonsterTemplate>,
    pub equipment: Vec<Equipment>,
}

impl GameContent {
    /// Build and validate the standard content set.
    pub fn standard() -> Result<Self, ContentError> {
        let skills = skill_catalog();
        let monsters = monster_templates(&skills)?;
        let content = Self {
            skills,
            monsters,
            equipment: equipment_catalog(),
        };
        content.validate()?;
        Ok(content)
    }

    /// Check the cross-table invariants.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = std::collections::HashSet::new();
        for template in self.skills.iter() {
            if !seen.insert(template.name.as_str()) {
                return Err(ContentError::DuplicateSkill(template.name.clone()));
            }
            if template.rarity >= GameConfig::MONSTER_ONLY_RARITY && !template.monster_only {
                return Err(ContentError::UnflaggedMonsterRarity(
                    template.name.clone(),
                    template.rarity,
                ));
            }
        }

        for stage in 1..=GameConfig::FINAL_STAGE {
            for (boss, role) in [(false, "regular monster"), (true, "boss")] {
                if !self
                    .monsters
                    .iter()
                    .any(|t| t.stage == stage && t.boss == boss)
                {
                    return Err(ContentError::MissingStage { stage, role });
                }
            }
        }

        for template in &self.monsters {
            if template.skills.len() > GameConfig::MAX_SKILLS {
                return Err(ContentError::OverfullSkillList(template.name.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_content_builds_and_validates() {
        let content = GameContent::standard().expect("content tables are consistent");
        assert!(content.skills.len() > 60);
        assert_eq!(content.monsters.len(), 60);
        assert!(content.equipment.len() > 40);
    }

    #[test]
    fn every_stage_has_regulars_and_a_boss() {
        let content = GameContent::standard().unwrap();
        for stage in 1..=GameConfig::FINAL_STAGE {
            let regulars = content
                .monsters
                .iter()
                .filter(|t| t.stage == stage && !t.boss)
                .count();
            let bosses = content
                .monsters
                .iter()
                .filter(|t| t.stage == stage && t.boss)
                .count();
            assert_eq!(regulars, 5, "stage {stage} regulars");
            assert_eq!(bosses, 1, "stage {stage} boss");
        }
    }

    #[test]
    fn rarity_five_is_monster_only() {
        let content = GameContent::standard().unwrap();
        for template in content.skills.iter() {
            if template.rarity >= GameConfig::MONSTER_ONLY_RARITY {
                assert!(template.monster_only, "{} must be monster-only", template.name);
            }
        }
    }

    #[test]
    fn unknown_skill_reference_fails_construction() {
        let skills = skill_catalog();
        // an empty catalog makes every reference dangle
        let err = monster_templates(&SkillCatalog::default()).unwrap_err();
        assert!(matches!(err, ContentError::UnknownSkill { .. }));
        // while the real catalog resolves everything
        assert!(monster_templates(&skills).is_ok());
    }

    #[test]
    fn player_offerable_pool_is_substantial() {
        let content = GameContent::standard().unwrap();
        let offerable = content.skills.iter().filter(|t| !t.monster_only).count();
        assert!(offerable >= 40);
    }
}
