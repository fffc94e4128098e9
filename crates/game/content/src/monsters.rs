//! Monster tables, six entries per stage: five regulars and one boss.
//!
//! Entry format: `(name, stage, boss, health, attack, defense, evasion,
//! critical, gold, skills)`. Evasion and critical are fractional chances.
//! Every skill reference is resolved against the catalog at build time, so
//! a typo here fails construction instead of a fight.

use abyss_core::{BaseStats, MonsterTemplate, SkillCatalog, SkillTemplate};

use crate::ContentError;

struct Spec {
    name: &'static str,
    stage: u32,
    boss: bool,
    health: i32,
    attack: f64,
    defense: f64,
    evasion: f64,
    critical: f64,
    gold: u32,
    skills: &'static [&'static str],
}

#[allow(clippy::too_many_arguments)]
const fn m(
    name: &'static str,
    stage: u32,
    boss: bool,
    health: i32,
    attack: f64,
    defense: f64,
    evasion: f64,
    critical: f64,
    gold: u32,
    skills: &'static [&'static str],
) -> Spec {
    Spec {
        name,
        stage,
        boss,
        health,
        attack,
        defense,
        evasion,
        critical,
        gold,
        skills,
    }
}

#[rustfmt::skip]
const SPECS: &[Spec] = &[
    // stage 1 — the waking place
    m("Festering Slime", 1, false, 20, 5.0, 2.0, 0.10, 0.10, 5, &["Rotting Touch"]),
    m("Sneering Imp", 1, false, 25, 7.0, 3.0, 0.10, 0.10, 7, &["Pierce"]),
    m("Plague Rat", 1, false, 15, 6.0, 1.0, 0.20, 0.10, 4, &["Enfeeble"]),
    m("Vampire Bat", 1, false, 18, 5.0, 2.0, 0.30, 0.10, 5, &["Life Drain"]),
    m("Cave Lurker", 1, false, 22, 6.0, 3.0, 0.10, 0.10, 6, &["Ambush"]),
    m("Shadow Imp Lord", 1, true, 80, 12.0, 5.0, 0.10, 0.20, 50, &["Pierce", "Vanish"]),

    // stage 2 — the deep cave
    m("Raging Orc", 2, false, 50, 10.0, 5.0, 0.10, 0.10, 10, &["Crush"]),
    m("Warmonger Hobgoblin", 2, false, 50, 12.0, 6.0, 0.10, 0.10, 12, &["War Roar"]),
    m("Rotting Gnoll", 2, false, 50, 11.0, 4.0, 0.20, 0.10, 11, &["Rotting Touch"]),
    m("Starving Wolf", 2, false, 60, 13.0, 3.0, 0.30, 0.10, 10, &["Hemorrhage"]),
    m("Skeleton Soldier", 2, false, 50, 10.0, 8.0, 0.10, 0.10, 13, &["Bone Shatter"]),
    m("Orc Warlord", 2, true, 150, 15.0, 8.0, 0.10, 0.20, 100, &["Crush", "War Roar"]),

    // stage 3 — the drowned pools
    m("Walking Corpse", 3, false, 100, 15.0, 8.0, 0.10, 0.10, 15, &["Life Wrest"]),
    m("Corpse-Eater Ghoul", 3, false, 120, 17.0, 6.0, 0.10, 0.10, 17, &["Devour"]),
    m("Wailing Wight", 3, false, 100, 16.0, 5.0, 0.20, 0.10, 16, &["Soul Scream"]),
    m("Stonehide Gargoyle", 3, false, 120, 14.0, 10.0, 0.10, 0.10, 18, &["Petrifying Gaze"]),
    m("Greedy Mimic", 3, false, 110, 18.0, 12.0, 0.05, 0.20, 25, &["Stunning Blow"]),
    m("Ancient Lich", 3, true, 200, 25.0, 15.0, 0.10, 0.20, 150, &["Grasp of Death", "Bone Armor", "Silencing Seal"]),

    // stage 4 — the sounding dark
    m("Labyrinth Minotaur", 4, false, 150, 22.0, 10.0, 0.10, 0.15, 39, &["Reckless Charge"]),
    m("Shrieking Harpy", 4, false, 120, 20.0, 8.0, 0.30, 0.10, 30, &["Soul Scream"]),
    m("Vengeful Centaur", 4, false, 130, 25.0, 9.0, 0.20, 0.10, 50, &["Dance of Blades"]),
    m("Storm Gryphon", 4, false, 140, 24.0, 12.0, 0.15, 0.10, 26, &["Blinding Light"]),
    m("One-Eyed Cyclops", 4, false, 125, 28.0, 15.0, 0.05, 0.10, 30, &["Earth Crush"]),
    m("Petrifying Medusa", 4, true, 157, 35.0, 18.0, 0.20, 0.25, 250, &["Petrifying Gaze", "Venom Spit"]),

    // stage 5 — the trace of light
    m("Obsidian Golem", 5, false, 180, 30.0, 20.0, 0.0, 0.10, 185, &["Iron Will"]),
    m("Venom Wyvern", 5, false, 190, 35.0, 15.0, 0.20, 0.15, 216, &["Blight Breath"]),
    m("Deathgaze Basilisk", 5, false, 200, 32.0, 18.0, 0.10, 0.10, 170, &["Petrifying Gaze"]),
    m("Abyssal Naga", 5, false, 210, 38.0, 16.0, 0.25, 0.15, 40, &["Silencing Seal"]),
    m("Fallen Succubus", 5, false, 220, 40.0, 14.0, 0.30, 0.20, 45, &["Life Wrest"]),
    m("Nightmare Chimera", 5, true, 400, 45.0, 25.0, 0.15, 0.30, 400, &["Fire Breath", "Venom Spit", "Frost Breath"]),

    // stage 6 — the cold wind
    m("Deep Sea Elemental", 6, false, 270, 40.0, 25.0, 0.20, 0.10, 45, &["Snare"]),
    m("Flame Elemental", 6, false, 250, 45.0, 22.0, 0.20, 0.15, 48, &["Hellfire Storm"]),
    m("Vortex Elemental", 6, false, 245, 42.0, 20.0, 0.30, 0.10, 46, &["Dance of Blades"]),
    m("Earth Elemental", 6, false, 210, 38.0, 30.0, 0.10, 0.10, 50, &["Earth Crush"]),
    m("Shadow Assassin", 6, false, 200, 50.0, 18.0, 0.40, 0.25, 55, &["Shadow Assassination"]),
    m("Abyssal Hydra", 6, true, 550, 55.0, 30.0, 0.10, 0.20, 550, &["Devour", "Venom Spit", "Grim Curse"]),

    // stage 7 — the rough walls
    m("Hell Soldier", 7, false, 320, 55.0, 30.0, 0.10, 0.15, 60, &["War Roar"]),
    m("Vile Imp", 7, false, 340, 52.0, 28.0, 0.25, 0.10, 58, &["Vanish"]),
    m("Hellhound", 7, false, 370, 60.0, 25.0, 0.30, 0.15, 65, &["Hemorrhage"]),
    m("Bone Dragon", 7, false, 400, 65.0, 40.0, 0.10, 0.20, 80, &["Bone Armor"]),
    m("Fallen Angel", 7, false, 320, 70.0, 35.0, 0.20, 0.25, 90, &["Divine Punishment"]),
    m("Colossal Behemoth", 7, true, 750, 70.0, 40.0, 0.05, 0.25, 700, &["Earth Crush", "Bastion"]),

    // stage 8 — the whispering dark
    m("Frost Giant", 8, false, 510, 70.0, 40.0, 0.10, 0.15, 80, &["Frost Breath"]),
    m("Magma Giant", 8, false, 452, 75.0, 38.0, 0.10, 0.15, 85, &["Fire Breath"]),
    m("Storm Giant", 8, false, 400, 72.0, 35.0, 0.20, 0.15, 82, &["Blinding Light"]),
    m("Ancient Dragon Turtle", 8, false, 460, 65.0, 60.0, 0.0, 0.10, 100, &["Bastion"]),
    m("Death Knight", 8, false, 600, 80.0, 50.0, 0.15, 0.20, 110, &["Grasp of Death"]),
    m("Deep Leviathan", 8, true, 1000, 85.0, 50.0, 0.10, 0.30, 900, &["Earthsplitter", "Whirlpool"]),

    // stage 9 — shadows in the light
    m("High Demon", 9, false, 700, 85.0, 50.0, 0.15, 0.20, 120, &["Hellfire Storm"]),
    m("Abyss Watcher", 9, false, 720, 82.0, 48.0, 0.20, 0.20, 115, &["Expose Weakness"]),
    m("Void Reaver", 9, false, 680, 90.0, 45.0, 0.25, 0.20, 125, &["Dimensional Collapse"]),
    m("Ancient Spirit", 9, false, 650, 80.0, 60.0, 0.10, 0.15, 140, &["Purging Flame"]),
    m("Mythic Beast", 9, false, 600, 95.0, 55.0, 0.10, 0.25, 150, &["Primal Madness"]),
    m("Fallen Archangel", 9, true, 1300, 100.0, 60.0, 0.20, 0.35, 1200, &["Divine Punishment", "Execution", "Plague"]),

    // stage 10 — the abyss's end
    m("Elder Dragon", 10, false, 1100, 100.0, 70.0, 0.10, 0.25, 200, &["Fire Breath"]),
    m("Frost Elder Dragon", 10, false, 900, 110.0, 65.0, 0.15, 0.25, 220, &["Frost Breath"]),
    m("Dark Elder Dragon", 10, false, 980, 120.0, 60.0, 0.20, 0.25, 250, &["Blight Breath"]),
    m("Wrathful Elder Dragon", 10, false, 890, 130.0, 80.0, 0.10, 0.30, 300, &["Primal Madness"]),
    m("Golden Elder Dragon", 10, false, 857, 110.0, 90.0, 0.10, 0.20, 1000, &["Divine Ward"]),
    m("The Abyss's End", 10, true, 2000, 150.0, 80.0, 0.20, 0.50, 0, &["Annihilation", "Eternal Abyss", "Hellfire Storm"]),
];

/// Build the monster tables, resolving every skill reference through the
/// catalog.
pub fn monster_templates(catalog: &SkillCatalog) -> Result<Vec<MonsterTemplate>, ContentError> {
    SPECS
        .iter()
        .map(|spec| {
            let skills = spec
                .skills
                .iter()
                .map(|name| {
                    catalog
                        .get(name)
                        .cloned()
                        .ok_or_else(|| ContentError::UnknownSkill {
                            monster: spec.name.to_string(),
                            skill: (*name).to_string(),
                        })
                })
                .collect::<Result<Vec<SkillTemplate>, ContentError>>()?;

            Ok(MonsterTemplate::new(
                spec.name,
                spec.stage,
                spec.boss,
                spec.health,
                BaseStats::new(spec.attack, spec.defense, spec.evasion, spec.critical),
                spec.gold,
            )
            .with_skills(skills))
        })
        .collect()
}
