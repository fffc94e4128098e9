//! The skill catalog.
//!
//! One entry per skill: `(name, max level, rarity, uses, effect, power)`.
//! Rarity 5 is the monster-only tier; a handful of lower-rarity skills are
//! also flagged monster-only where regular monsters lean on them.

use abyss_core::{EffectId, SkillCatalog, SkillTemplate};

fn t(
    name: &str,
    max_level: u8,
    rarity: u8,
    uses: u32,
    effect: EffectId,
    power: f64,
) -> SkillTemplate {
    SkillTemplate::new(name, max_level, rarity, uses, effect, power)
}

/// Build the full skill registry.
pub fn skill_catalog() -> SkillCatalog {
    SkillCatalog::new(vec![
        // ===== common (1) =====

        // attack
        t("Stab", 2, 1, 99, EffectId::ScalingStrike, 1.5),
        t("Pierce", 5, 1, 15, EffectId::Reaping, 0.9),
        t("Kick", 3, 1, 10, EffectId::FixedStrike, 20.0),
        t("Ambush", 10, 1, 2, EffectId::ScalingStrike, 1.5),
        // drain
        t("Bite", 2, 2, 3, EffectId::LifeSteal, 1.0),
        // self buffs
        t("Iron Will", 3, 1, 3, EffectId::IronWill, 3.0),
        t("War Roar", 3, 1, 3, EffectId::WarCry, 3.0),
        // debuffs and utility
        t("Enfeeble", 3, 1, 10, EffectId::Weaken, -0.2),
        t("Stunning Blow", 2, 1, 10, EffectId::Stun, 1.0),
        t("Hatred", 3, 1, 5, EffectId::FocusedHatred, 1.0),
        t("Bone Armor", 3, 1, 2, EffectId::BoneArmor, 20.0),
        t("Snare", 2, 1, 3, EffectId::Ensnare, -0.2),
        t("First Aid", 3, 1, 1, EffectId::Mend, 1.0),
        t("Thorn Mail", 3, 1, 3, EffectId::ThornMail, 1.0),
        t("Mockery", 3, 1, 2, EffectId::Taunt, 1.0),

        // ===== rare (2) =====

        // attack
        t("Heavy Blow", 3, 2, 5, EffectId::FixedStrike, 50.0),
        t("Crush", 5, 2, 8, EffectId::Pulverize, 2.0),
        t("Reckless Charge", 2, 2, 2, EffectId::Overwhelm, 1.5),
        t("Dance of Blades", 3, 2, 3, EffectId::Flurry, 0.9),
        t("Twin Strike", 3, 2, 4, EffectId::Flurry, 1.0),
        // drain
        t("Life Wrest", 1, 2, 5, EffectId::LifeSteal, 1.3),
        t("Blood Drain", 3, 2, 3, EffectId::DrainLife, 1.3),
        t("Life Drain", 3, 2, 3, EffectId::DrainLife, 1.0),
        // lasting harm
        t("Hemorrhage", 3, 2, 10, EffectId::Exsanguinate, 1.0),
        t("Hamstring", 2, 2, 2, EffectId::Cripple, -0.5),
        // effects
        t("Madness", 2, 2, 2, EffectId::WarCry, 30.0),
        t("Dark Art", 2, 2, 3, EffectId::Hex, 1.0),
        t("Expose Weakness", 2, 2, 1, EffectId::ExposeWeakness, 1.0),
        t("Silencing Seal", 2, 2, 2, EffectId::Silence, 2.0),
        t("Reckless Abandon", 2, 2, 2, EffectId::RecklessAbandon, 1.0),
        t("Mirror Image", 2, 2, 2, EffectId::MirrorImage, 1.0),
        t("Fading Veil", 3, 2, 3, EffectId::Fade, 1.0),

        // ===== heroic (3) =====
        t("Execution", 1, 3, 3, EffectId::Culling, 2.5),
        t("Shieldbreaker", 1, 3, 5, EffectId::Stun, 2.0),
        t("Shadow Form", 1, 3, 1, EffectId::ShadowForm, 2.0),
        t("Wave of Ruin", 1, 3, 5, EffectId::ScalingStrike, 2.3),
        t("Soul Vengeance", 10, 3, 10, EffectId::Reaping, 1.2),
        t("Soulcrusher", 1, 3, 1, EffectId::Pulverize, 4.0),
        t("Shadow Assassination", 1, 3, 2, EffectId::Flurry, 1.5),
        t("Scorn the Weak", 1, 3, 5, EffectId::ScornTheWeak, 1.0),
        t("Soul Wrest", 1, 3, 5, EffectId::LifeSteal, 2.5),
        t("Warlord", 1, 3, 10, EffectId::WarCry, 50.0),
        t("Last Stand", 1, 3, 1, EffectId::IronWill, 100.0),
        t("Purification", 1, 3, 1, EffectId::Purify, 1.0),
        t("Dark Benediction", 1, 3, 1, EffectId::BoneArmor, 40.0),
        t("Storm of Blood", 1, 3, 2, EffectId::Exsanguinate, 0.15),
        t("Curse of Impotence", 1, 3, 2, EffectId::Weaken, -0.3),
        t("Blinding Light", 1, 3, 2, EffectId::Stun, 1.0),
        t("Transcendence", 1, 3, 1, EffectId::ShadowForm, 1.0),

        // ===== legendary (4) =====
        t("Meteor Shower", 1, 4, 3, EffectId::Overwhelm, 5.0),
        t("Earthsplitter", 10, 4, 10, EffectId::Overwhelm, 1.2),
        t("World's End", 1, 4, 1, EffectId::Overwhelm, 6.0),
        t("Judgement", 4, 4, 10, EffectId::Culling, 3.0),
        t("Doomstrike", 1, 4, 1, EffectId::Pulverize, 10.0),
        t("Soul Feast", 1, 4, 1, EffectId::LifeSteal, 4.0),
        t("Bastion", 1, 4, 1, EffectId::IronWill, 30.0),
        t("Primordial Restoration", 1, 4, 3, EffectId::Mend, 100.0),
        t("Berserker's Wrath", 1, 4, 1, EffectId::Frenzy, 0.5),
        t("Immortality", 1, 4, 1, EffectId::ShadowForm, 4.0),
        t("Ancient Cry", 1, 4, 1, EffectId::WarCry, 10.0),
        t("Divine Punishment", 5, 4, 2, EffectId::Culling, 3.5),
        t("Dimensional Collapse", 1, 4, 1, EffectId::Pulverize, 3.2),
        t("Armageddon", 1, 4, 1, EffectId::Overwhelm, 3.5),
        t("Sovereign's Might", 1, 4, 1, EffectId::Frenzy, 0.6),

        // ===== monster-only (5) =====
        t("Vanish", 1, 5, 2, EffectId::ShadowForm, 2.0).monster_only(),
        t("Bone Shatter", 1, 5, 2, EffectId::ShatterBone, 1.0).monster_only(),
        t("Rotting Touch", 1, 5, 99, EffectId::Weaken, -0.3).monster_only(),
        t("Earth Crush", 1, 5, 2, EffectId::Overwhelm, 2.0).monster_only(),
        t("Blight Breath", 1, 5, 5, EffectId::Blight, 0.07).monster_only(),
        t("Plague", 1, 5, 99, EffectId::Pestilence, 5.0).monster_only(),
        t("Petrifying Gaze", 1, 5, 99, EffectId::PetrifyingGaze, 1.0).monster_only(),
        t("Soul Drain Aura", 1, 5, 99, EffectId::SoulDrain, 0.8).monster_only(),
        t("Summon Abomination", 1, 5, 99, EffectId::SummonAbomination, 1.0).monster_only(),
        t("Grasp of Death", 1, 5, 99, EffectId::Culling, 1.5).monster_only(),
        t("Gaze of Terror", 1, 5, 99, EffectId::Weaken, -0.4).monster_only(),
        t("Withering Curse", 1, 5, 99, EffectId::Exsanguinate, 0.2).monster_only(),
        t("Hellfire Storm", 1, 5, 99, EffectId::Overwhelm, 2.8).monster_only(),
        t("Soul Scream", 1, 5, 99, EffectId::Silence, 2.0).monster_only(),
        t("Devour", 1, 5, 99, EffectId::Devour, 3.0).monster_only(),
        t("Fire Breath", 1, 5, 99, EffectId::FireBreath, 2.0).monster_only(),
        t("Frost Breath", 1, 5, 99, EffectId::FrostBreath, 1.0).monster_only(),
        t("Venom Spit", 1, 5, 99, EffectId::PoisonBreath, 3.0).monster_only(),
        t("Whirlpool", 1, 5, 99, EffectId::Whirlpool, 2.0).monster_only(),
        t("Eternal Abyss", 1, 5, 99, EffectId::Stun, 2.0).monster_only(),
        t("Annihilation", 1, 5, 99, EffectId::Culling, 3.0).monster_only(),
        t("Grim Curse", 1, 5, 99, EffectId::Hex, 1.0).monster_only(),
        t("Purging Flame", 1, 5, 99, EffectId::FireBreath, 1.5).monster_only(),
        t("Primal Madness", 1, 5, 99, EffectId::Frenzy, 0.5).monster_only(),
        t("Divine Ward", 1, 5, 99, EffectId::IronWill, 20.0).monster_only(),
        t("Time Warp", 1, 5, 99, EffectId::Taunt, 1.0).monster_only(),
    ])
}
