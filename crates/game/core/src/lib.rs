//! Deterministic combat and progression rules shared across clients.
//!
//! `abyss-core` defines the canonical rules — stats, status effects, skills,
//! damage resolution, the per-encounter turn machine, encounter selection,
//! and post-victory progression — and exposes pure APIs reused by the
//! runtime and offline tools. Randomness and decisions are injected: the
//! engine is a replayable state machine driven by one [`env::RngOracle`]
//! and the action indices its callers feed in.

pub mod catalog;
pub mod combat;
pub mod config;
pub mod effects;
pub mod engine;
pub mod env;
pub mod events;
pub mod progression;
pub mod select;
pub mod state;
pub mod stats;

pub use catalog::{SkillCatalog, SkillTemplate};
pub use combat::{DamageOutcome, deal_attack, deal_skill_damage, resolve, resolve_direct};
pub use config::GameConfig;
pub use effects::{EffectId, Recipient, SkillMutation, execute_skill, mutations};
pub use engine::{ChoiceError, Encounter, EncounterOutcome, EncounterStep};
pub use env::{PcgRng, RngOracle, ScriptedRng, sample_indices};
pub use events::GameEvent;
pub use progression::{
    Acquisition, BoostKind, SkillOffer, StatBoost, acquire_skill, acquire_with_discard,
    apply_stat_boost, skill_offers, stat_boost_choices,
};
pub use select::{SelectionError, pick_boss, pick_regular};
pub use state::{
    Character, DotHit, EquipSlot, Equipment, EquipmentSlots, Monster, MonsterTemplate, Player,
    Skill, SkillBook, StatusEffect, StatusFlags, StatusLedger, TickReport,
};
pub use stats::{BaseStats, EffectiveStats};
