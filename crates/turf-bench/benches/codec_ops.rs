//! Criterion micro-benchmarks for trajectory encode/decode.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use turf_bench::reference_profile;
use turf_engine::Simulation;
use turf_replay::{write_trajectory, TrajectoryReader};
use turf_rules::RuleVariant;

/// Benchmark: serialize a full 75-frame 150x150 trajectory to memory.
fn bench_encode_trajectory(c: &mut Criterion) {
    let report = Simulation::new(reference_profile(RuleVariant::RandomTieBreak, 42))
        .unwrap()
        .run()
        .unwrap();
    let frames = report.trajectory.as_slice();

    c.bench_function("encode_trajectory_75x150x150", |b| {
        b.iter(|| {
            let buf = write_trajectory(Vec::new(), 42, frames).unwrap();
            black_box(buf);
        });
    });
}

/// Benchmark: decode the same trajectory back into snapshots.
fn bench_decode_trajectory(c: &mut Criterion) {
    let report = Simulation::new(reference_profile(RuleVariant::RandomTieBreak, 42))
        .unwrap()
        .run()
        .unwrap();
    let buf = write_trajectory(Vec::new(), 42, report.trajectory.as_slice()).unwrap();

    c.bench_function("decode_trajectory_75x150x150", |b| {
        b.iter(|| {
            let mut reader = TrajectoryReader::new(buf.as_slice()).unwrap();
            let frames = reader.read_all().unwrap();
            black_box(frames);
        });
    });
}

criterion_group!(benches, bench_encode_trajectory, bench_decode_trajectory);
criterion_main!(benches);
