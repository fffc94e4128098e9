//! Injectable environment components.
//!
//! The engine never reaches for ambient state: randomness comes in through
//! the [`RngOracle`] trait so runs are reproducible from a seed and tests
//! can script every roll.

mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng, sample_indices};
