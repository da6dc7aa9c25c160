//! Turf: a competitive two-population cellular automaton.
//!
//! Two populations, `A` and `B`, contest a bounded 2D grid. Each
//! generation, every cell looks at its von Neumann or Moore surround and
//! a transition rule decides whether the cell stays, flips to the locally
//! dominant population, or empties. Updates are synchronous: the whole
//! generation is computed from the previous one before any cell changes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Turf sub-crates. For most users, adding `turf` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use turf::prelude::*;
//!
//! let config = SimulationConfig {
//!     rows: 16,
//!     cols: 16,
//!     neighbourhood: NeighbourhoodKind::VonNeumann,
//!     rule: RuleVariant::RandomTieBreak,
//!     init: InitStrategy::UniformRandom,
//!     max_generations: Some(10),
//!     stop: None,
//!     seed: 42,
//! };
//! let sim = Simulation::new(config).unwrap();
//! let report = sim.run().unwrap();
//! assert_eq!(report.outcome, RunOutcome::BudgetExhausted);
//! assert_eq!(report.trajectory.len(), 10); // one frame per generation
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `turf-core` | Cell states and neighbour counts |
//! | [`grid`] | `turf-grid` | Bordered grid, snapshots, neighbourhood sampling |
//! | [`rules`] | `turf-rules` | Transition rule variants |
//! | [`engine`] | `turf-engine` | Configuration, init strategies, the evolution driver |
//! | [`replay`] | `turf-replay` | Trajectory persistence and ASCII playback |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell states and neighbour counts (`turf-core`).
pub use turf_core as types;

/// Bordered grid storage, snapshots, and neighbourhood sampling
/// (`turf-grid`).
pub use turf_grid as grid;

/// Transition rule variants (`turf-rules`).
pub use turf_rules as rules;

/// Configuration, init strategies, and the evolution driver
/// (`turf-engine`).
pub use turf_engine as engine;

/// Trajectory persistence and ASCII playback (`turf-replay`).
pub use turf_replay as replay;

/// Common imports for typical Turf usage.
///
/// ```rust
/// use turf::prelude::*;
/// ```
pub mod prelude {
    pub use turf_core::{CellState, NeighbourCounts};

    pub use turf_grid::{Grid, NeighbourhoodKind, Snapshot};

    pub use turf_rules::RuleVariant;

    pub use turf_engine::{
        InitStrategy, RunOutcome, RunReport, RunState, Simulation, SimulationConfig,
        StopCondition, Trajectory,
    };

    pub use turf_replay::{ascii_frame, TrajectoryReader, TrajectoryWriter};
}
