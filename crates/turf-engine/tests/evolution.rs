//! Integration tests: full runs through the public engine API.
//!
//! Exercises whole-run behavior that the unit tests don't cover: frame
//! shapes across a complete trajectory, bit-exact reproducibility of
//! seeded runs, early stopping against the budget, and a recorded run
//! surviving a trip through the trajectory codec.

use proptest::prelude::*;
use turf_core::CellState;
use turf_engine::{
    InitStrategy, RunOutcome, Simulation, SimulationConfig, StopCondition,
};
use turf_grid::NeighbourhoodKind;
use turf_replay::{write_trajectory, TrajectoryReader};
use turf_rules::RuleVariant;
use turf_test_utils::grid_from_interior;

fn config(rows: u32, cols: u32, rule: RuleVariant, seed: u64) -> SimulationConfig {
    SimulationConfig {
        rows,
        cols,
        neighbourhood: NeighbourhoodKind::VonNeumann,
        rule,
        init: InitStrategy::UniformRandom,
        max_generations: Some(12),
        stop: None,
        seed,
    }
}

// ── Trajectory shape ─────────────────────────────────────────────────

#[test]
fn every_frame_is_interior_sized() {
    let report = Simulation::new(config(20, 14, RuleVariant::RandomTieBreak, 3))
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(report.trajectory.len(), 12);
    for frame in &report.trajectory {
        assert_eq!((frame.rows(), frame.cols()), (20, 14));
        assert_eq!(frame.cells().len(), 20 * 14);
    }
}

#[test]
fn non_square_grids_keep_their_orientation() {
    let report = Simulation::new(config(5, 31, RuleVariant::StrictMajority, 8))
        .unwrap()
        .run()
        .unwrap();
    let last = report.trajectory.last().unwrap();
    assert_eq!(last.rows(), 5);
    assert_eq!(last.cols(), 31);
    assert_eq!(last.iter_rows().count(), 5);
}

// ── Reproducibility ──────────────────────────────────────────────────

#[test]
fn identical_seeds_reproduce_the_whole_trajectory() {
    for rule in [
        RuleVariant::StrictMajority,
        RuleVariant::RandomTieBreak,
        RuleVariant::ProbabilisticContest,
    ] {
        let a = Simulation::new(config(16, 16, rule, 42)).unwrap().run().unwrap();
        let b = Simulation::new(config(16, 16, rule, 42)).unwrap().run().unwrap();
        assert_eq!(a.trajectory.as_slice(), b.trajectory.as_slice(), "{rule:?}");
    }
}

#[test]
fn different_seeds_diverge() {
    let a = Simulation::new(config(16, 16, RuleVariant::ProbabilisticContest, 1))
        .unwrap()
        .run()
        .unwrap();
    let b = Simulation::new(config(16, 16, RuleVariant::ProbabilisticContest, 2))
        .unwrap()
        .run()
        .unwrap();
    assert_ne!(a.trajectory.as_slice(), b.trajectory.as_slice());
}

// ── Early stopping ───────────────────────────────────────────────────

#[test]
fn predicate_stops_before_the_budget() {
    // One Empty cell in a field of A: strict majority claims it on the
    // first generation, well inside the 50-generation budget.
    let mut interior = vec![CellState::A; 25];
    interior[12] = CellState::Empty;
    let cfg = SimulationConfig {
        rows: 5,
        cols: 5,
        neighbourhood: NeighbourhoodKind::VonNeumann,
        rule: RuleVariant::StrictMajority,
        init: InitStrategy::UniformRandom,
        max_generations: Some(50),
        stop: Some(StopCondition::NoEmptyCells),
        seed: 0,
    };
    let report = Simulation::from_grid(cfg, grid_from_interior(5, 5, &interior))
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(report.outcome, RunOutcome::PredicateFired);
    assert!(report.generations < 50);
    assert_eq!(report.trajectory.len() as u64, report.generations);
    let last = report.trajectory.last().unwrap();
    assert_eq!(last.count(CellState::Empty), 0);
}

// ── Persistence round ────────────────────────────────────────────────

#[test]
fn recorded_run_survives_the_codec() {
    let seed = 99;
    let report = Simulation::new(config(9, 9, RuleVariant::RandomTieBreak, seed))
        .unwrap()
        .run()
        .unwrap();

    let buf = write_trajectory(Vec::new(), seed, report.trajectory.as_slice()).unwrap();
    let mut reader = TrajectoryReader::new(buf.as_slice()).unwrap();
    assert_eq!(reader.descriptor().seed, seed);
    assert_eq!(reader.descriptor().frame_count as usize, report.trajectory.len());

    let replayed = reader.read_all().unwrap();
    assert_eq!(replayed.as_slice(), report.trajectory.as_slice());
}

// ── Shape and termination properties ─────────────────────────────────

fn arb_rule() -> impl Strategy<Value = RuleVariant> {
    prop_oneof![
        Just(RuleVariant::StrictMajority),
        Just(RuleVariant::RandomTieBreak),
        Just(RuleVariant::ProbabilisticContest),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn budgeted_runs_terminate_with_exact_shape(
        rows in 1u32..=10,
        cols in 1u32..=10,
        budget in 1u64..=6,
        rule in arb_rule(),
        seed in any::<u64>(),
    ) {
        let report = Simulation::new(SimulationConfig {
            rows,
            cols,
            neighbourhood: NeighbourhoodKind::Moore,
            rule,
            init: InitStrategy::UniformRandom,
            max_generations: Some(budget),
            stop: None,
            seed,
        })
        .unwrap()
        .run()
        .unwrap();

        prop_assert_eq!(report.outcome, RunOutcome::BudgetExhausted);
        prop_assert_eq!(report.generations, budget);
        prop_assert_eq!(report.trajectory.len() as u64, budget);
        for frame in &report.trajectory {
            prop_assert_eq!((frame.rows(), frame.cols()), (rows, cols));
        }
    }
}
