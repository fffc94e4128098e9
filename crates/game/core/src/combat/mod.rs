//! Damage resolution.

mod damage;

pub use damage::{DamageOutcome, deal_attack, deal_skill_damage, resolve, resolve_direct};
