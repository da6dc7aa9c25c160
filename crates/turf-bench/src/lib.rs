//! Benchmark profiles for the Turf contest automaton.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 150x150 grid over 75 generations, the
//!   canonical experiment size
//! - [`stress_profile`]: 500x500 grid (~250K cells) for stress testing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use turf_engine::{InitStrategy, SimulationConfig};
use turf_grid::NeighbourhoodKind;
use turf_rules::RuleVariant;

/// Build the reference benchmark profile: 150x150 grid, 75 generations.
pub fn reference_profile(rule: RuleVariant, seed: u64) -> SimulationConfig {
    SimulationConfig {
        rows: 150,
        cols: 150,
        neighbourhood: NeighbourhoodKind::VonNeumann,
        rule,
        init: InitStrategy::UniformRandom,
        max_generations: Some(75),
        stop: None,
        seed,
    }
}

/// Build a stress benchmark profile: 500x500 grid, 20 generations.
///
/// Same shape as [`reference_profile`] but at ~10x the cell count; the
/// shorter budget keeps wall-clock time comparable.
pub fn stress_profile(rule: RuleVariant, seed: u64) -> SimulationConfig {
    SimulationConfig {
        rows: 500,
        cols: 500,
        neighbourhood: NeighbourhoodKind::Moore,
        rule,
        init: InitStrategy::UniformRandom,
        max_generations: Some(20),
        stop: None,
        seed,
    }
}
