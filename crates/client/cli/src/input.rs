//! Stdin decision provider.
//!
//! Menus are printed 1-based; the engine and runtime re-request anything
//! out of range, so this provider only guards against non-numeric input.

use std::io::{self, Write};

use abyss_core::{Equipment, Monster, Player, SkillOffer, StatBoost};
use abyss_runtime::DecisionProvider;

pub struct StdinProvider;

impl StdinProvider {
    pub fn new() -> Self {
        Self
    }

    /// Read one number from stdin, re-prompting until it parses.
    fn read_number(&self, prompt: &str) -> usize {
        loop {
            print!("{prompt}");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                continue;
            }
            match line.trim().parse::<usize>() {
                Ok(value) => return value,
                Err(_) => println!("An unintelligible whisper. Give a clear answer."),
            }
        }
    }
}

impl DecisionProvider for StdinProvider {
    fn combat_action(&mut self, player: &Player, monster: &Monster) -> usize {
        let c = &player.character;
        println!(
            "\n[ {} ]  life {}/{}  attack {:.0}  defense {:.0}",
            c.name, c.current_health, c.max_health, c.effective.attack, c.effective.defense
        );
        println!(
            "[ {} ]  life {}/{}",
            monster.name(),
            monster.character.current_health,
            monster.character.max_health
        );
        println!("1. Strike (*)");
        for (i, skill) in c.skills.iter().enumerate() {
            println!(
                "{}. {} Lv.{} ({}/{})",
                i + 2,
                skill.name,
                skill.level,
                skill.uses,
                skill.initial_uses
            );
        }
        self.read_number("Choose your action: ")
    }

    fn stat_boost(&mut self, _player: &Player, choices: &[StatBoost]) -> usize {
        println!("\nWhat did you take from this battle?");
        for (i, boost) in choices.iter().enumerate() {
            println!("{}. {} +{:.2}", i + 1, boost.kind, boost.amount);
        }
        self.read_number("The time to choose: ").wrapping_sub(1)
    }

    fn skill_offer(&mut self, _player: &Player, offers: &[SkillOffer]) -> Option<usize> {
        println!("\nA new power can be felt in the dark...");
        for (i, offer) in offers.iter().enumerate() {
            let level = offer.owned_level.unwrap_or(0);
            println!(
                "{}. {} (uses {}, rarity {}, level {}/{})",
                i + 1,
                offer.name,
                offer.uses,
                offer.rarity,
                level,
                offer.max_level
            );
        }
        println!("{}. Refuse this power.", offers.len() + 1);
        let choice = self.read_number("Which power do you accept?: ");
        (1..=offers.len()).contains(&choice).then(|| choice - 1)
    }

    fn discard_for(&mut self, player: &Player, incoming: &SkillOffer) -> Option<usize> {
        let skills = &player.character.skills;
        println!("\nThe vessel is full. To take '{}', something must be emptied.", incoming.name);
        for (i, skill) in skills.iter().enumerate() {
            println!("{}. {} (Lv.{})", i + 1, skill.name, skill.level);
        }
        println!("{}. Refuse.", skills.len() + 1);
        let choice = self.read_number("Which power do you abandon?: ");
        (1..=skills.len()).contains(&choice).then(|| choice - 1)
    }

    fn shop_choice(&mut self, player: &Player, stock: &[Equipment]) -> Option<usize> {
        println!("\n[ blood-stained coins: {}G ]", player.gold);
        for (i, item) in stock.iter().enumerate() {
            let mut parts = Vec::new();
            if item.health != 0 {
                parts.push(format!("life {:+}", item.health));
            }
            if item.attack != 0.0 {
                parts.push(format!("attack {:+.0}", item.attack));
            }
            if item.defense != 0.0 {
                parts.push(format!("defense {:+.0}", item.defense));
            }
            if item.critical != 0.0 {
                parts.push(format!("crit {:+.2}", item.critical));
            }
            if item.evasion != 0.0 {
                parts.push(format!("evasion {:+.2}", item.evasion));
            }
            println!(
                "{}. {} ({}) - {}G ({})",
                i + 1,
                item.name,
                item.slot,
                item.price,
                parts.join(", ")
            );
        }
        println!("{}. Leave.", stock.len() + 1);
        let choice = self.read_number("The time to choose: ");
        (1..=stock.len()).contains(&choice).then(|| choice - 1)
    }
}
