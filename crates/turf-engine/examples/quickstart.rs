//! End-to-end contest run example.
//!
//! Demonstrates: build config → run the simulation → inspect population
//! counts → persist the trajectory → replay it as ASCII.

use turf_core::CellState;
use turf_engine::{InitStrategy, Simulation, SimulationConfig};
use turf_grid::NeighbourhoodKind;
use turf_replay::{ascii_frame, write_trajectory, Playback, TrajectoryReader};
use turf_rules::RuleVariant;

fn main() {
    println!("=== Turf Quickstart ===\n");

    // The canonical experiment shape: 150x150 interior, 75 generations,
    // both species seeded uniformly at random.
    let seed = 42;
    let config = SimulationConfig {
        rows: 150,
        cols: 150,
        neighbourhood: NeighbourhoodKind::VonNeumann,
        rule: RuleVariant::RandomTieBreak,
        init: InitStrategy::UniformRandom,
        max_generations: Some(75),
        stop: None,
        seed,
    };

    let sim = Simulation::new(config).expect("config is valid");
    let report = sim.run().expect("run completes");

    println!(
        "Run finished: {:?} after {} generations\n",
        report.outcome, report.generations
    );

    println!("Population counts every 15 generations:");
    for (i, frame) in report.trajectory.iter().enumerate() {
        if i % 15 == 0 || i + 1 == report.trajectory.len() {
            println!(
                "  gen {:>3}: empty={:>6}, A={:>6}, B={:>6}",
                i + 1,
                frame.count(CellState::Empty),
                frame.count(CellState::A),
                frame.count(CellState::B),
            );
        }
    }

    // Persist to memory (a file works the same through any `Write`).
    let buf = write_trajectory(Vec::new(), seed, report.trajectory.as_slice())
        .expect("encoding succeeds");
    println!("\nEncoded trajectory: {} bytes", buf.len());

    // Replay and render a corner of the final frame.
    let mut reader = TrajectoryReader::new(buf.as_slice()).expect("header is valid");
    let frames = reader.read_all().expect("frames decode");
    let playback = Playback::new(&frames);
    let last = playback.frame(frames.len() - 1).expect("non-empty run");

    println!("\nTop-left 20x40 of the final frame:");
    for line in ascii_frame(last).lines().take(20) {
        println!("  {}", &line[..40.min(line.len())]);
    }
}
