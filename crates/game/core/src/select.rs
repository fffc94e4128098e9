//! Encounter selection.
//!
//! Uniform random choice over the monster templates matching the current
//! stage and role. Every pick spawns a fresh monster — independent health,
//! ledger, and skill use counts. An empty pool means the content tables are
//! incomplete, which is a fatal configuration error, not a recoverable one.

use crate::env::RngOracle;
use crate::state::{Monster, MonsterTemplate};

/// A required random draw had nothing to draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no monster template matches stage {stage} (boss: {boss})")]
    EmptyPool { stage: u32, boss: bool },
}

/// Pick a regular (non-boss) monster for `stage`.
pub fn pick_regular(
    templates: &[MonsterTemplate],
    stage: u32,
    rng: &mut dyn RngOracle,
) -> Result<Monster, SelectionError> {
    pick(templates, stage, false, rng)
}

/// Pick the boss for `stage`.
pub fn pick_boss(
    templates: &[MonsterTemplate],
    stage: u32,
    rng: &mut dyn RngOracle,
) -> Result<Monster, SelectionError> {
    pick(templates, stage, true, rng)
}

fn pick(
    templates: &[MonsterTemplate],
    stage: u32,
    boss: bool,
    rng: &mut dyn RngOracle,
) -> Result<Monster, SelectionError> {
    let pool: Vec<&MonsterTemplate> = templates
        .iter()
        .filter(|t| t.stage == stage && t.boss == boss)
        .collect();
    if pool.is_empty() {
        return Err(SelectionError::EmptyPool { stage, boss });
    }
    Ok(pool[rng.pick_index(pool.len())].spawn())
}
