//! Mutable combat state: characters, status effects, skills, equipment.

mod character;
mod equipment;
mod monster;
mod skill;
mod status;

pub use character::{Character, DotHit, Player, TickReport};
pub use equipment::{EquipSlot, Equipment, EquipmentSlots};
pub use monster::{Monster, MonsterTemplate};
pub use skill::{Skill, SkillBook};
pub use status::{StatusEffect, StatusFlags, StatusLedger};
