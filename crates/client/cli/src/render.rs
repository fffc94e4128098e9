//! Plain-text rendering of the engine's event stream.

use abyss_core::GameEvent;
use abyss_runtime::EventSink;

pub struct TerminalSink;

impl EventSink for TerminalSink {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::DamageDealt {
                source,
                target,
                amount,
                critical,
                evaded,
            } => {
                if *evaded {
                    println!("{target} slips away from {source}'s blow!");
                } else if *amount == 0 {
                    println!("{target}'s flesh refuses the wound.");
                } else if *critical {
                    println!("{source} lands a crushing blow — {target} loses {amount} life!");
                } else {
                    println!("{source} tears {amount} life from {target}.");
                }
            }
            GameEvent::HealthChanged {
                name,
                health,
                max_health,
            } => println!("{name}'s life settles at {health}/{max_health}."),
            GameEvent::StatusApplied {
                target,
                effect,
                turns,
            } => println!("{target} is branded: {effect} ({turns} rounds)."),
            GameEvent::StatusExpired { target, effect } => {
                println!("The brand of {effect} fades from {target}.")
            }
            GameEvent::SkillExhausted { owner, skill } => {
                println!("{owner}'s {skill} is spent; the power scatters.")
            }
            GameEvent::TurnSkipped { name } => println!("{name} is bound and cannot move."),
            GameEvent::EncounterResolved { winner } => {
                println!("The dust settles. {winner} still stands.\n")
            }
            GameEvent::SkillLeveled { skill, level } => {
                println!("{skill} grows stronger. Lv.{level}")
            }
            GameEvent::SkillAcquired { skill } => {
                println!("The power '{skill}' is carved into your soul.")
            }
            GameEvent::SkillForgotten { skill } => {
                println!("The power '{skill}' dims into memory.")
            }
            GameEvent::StatRaised { stat, amount } => {
                println!("Your {stat} rises by {amount:.2}.")
            }
            GameEvent::ItemEquipped { slot, item } => println!("You don {item} ({slot})."),
            GameEvent::ItemUnequipped { slot, item } => {
                println!("You shed {item} ({slot}).")
            }
            GameEvent::GoldGained { amount, total } => {
                println!("You claim {amount}G of bloodied coin ({total}G carried).")
            }
            GameEvent::StageAdvanced { stage } => {
                println!("\n--------- depth {stage} ---------\n")
            }
        }
    }
}
