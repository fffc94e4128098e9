/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Probability that a monster spends its action on one of its skills
    /// instead of a basic attack, when it still has usable skills.
    pub monster_skill_chance: f64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum skills a character can hold at once.
    pub const MAX_SKILLS: usize = 4;
    /// Maximum simultaneously active status effects per character.
    pub const MAX_STATUS_EFFECTS: usize = 8;

    // ===== combat balance =====
    /// Hard cap on the evasion probability used in any evasion roll.
    pub const EVASION_CAP: f64 = 0.70;
    /// Raw damage multiplier on a successful critical roll.
    pub const CRIT_MULTIPLIER: f64 = 2.0;
    /// Lowest divisor `1 + defense/100` may reach under negative defense.
    pub const MIN_DEFENSE_DIVISOR: f64 = 0.1;

    // ===== progression =====
    /// Number of entries a post-victory skill offer aims for.
    pub const SKILL_OFFER_SIZE: usize = 3;
    /// Rarity at or above which boss-victory offers are filled first.
    pub const HIGH_RARITY_FLOOR: u8 = 3;
    /// Rarity tier reserved for monster-only skills.
    pub const MONSTER_ONLY_RARITY: u8 = 5;
    /// Stage from which defense and critical boosts appear in reward menus.
    pub const STAT_GATE_STAGE: u32 = 3;
    /// Fraction of max health restored after every victory.
    pub const VICTORY_HEAL_RATIO: f64 = 0.30;

    // ===== campaign =====
    /// Last stage of the descent.
    pub const FINAL_STAGE: u32 = 10;
    /// Regular encounters fought before each stage boss.
    pub const BATTLES_PER_STAGE: u32 = 3;
    /// Upper bound on items stocked per shop visit.
    pub const SHOP_STOCK: usize = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MONSTER_SKILL_CHANCE: f64 = 0.30;

    pub fn new() -> Self {
        Self {
            monster_skill_chance: Self::DEFAULT_MONSTER_SKILL_CHANCE,
        }
    }

    pub fn with_monster_skill_chance(monster_skill_chance: f64) -> Self {
        Self {
            monster_skill_chance,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
