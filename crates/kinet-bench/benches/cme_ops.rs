//! Criterion micro-benchmarks for exact propagation and moment extraction.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use kinet_bench::propagation_profile;
use kinet_cme::{CmePropagator, PropagationConfig};
use kinet_core::TriadNetwork;
use kinet_test_utils::REFERENCE_STATE;

/// Benchmark: the seven-step reference propagation.
fn bench_seven_steps(c: &mut Criterion) {
    let propagator =
        CmePropagator::new(TriadNetwork, PropagationConfig::new(REFERENCE_STATE, 7)).unwrap();
    c.bench_function("propagate_reference_7", |b| {
        b.iter(|| black_box(propagator.propagate().unwrap()));
    });
}

/// Benchmark: 26 steps from (60, 60, 60), serial vs 4 workers.
fn bench_wide_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagate_wide_26");
    for workers in [1, 4] {
        let propagator = CmePropagator::new(TriadNetwork, propagation_profile(26, workers)).unwrap();
        group.bench_function(format!("workers_{workers}"), |b| {
            b.iter(|| black_box(propagator.propagate().unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: moments of the 378-state distribution.
fn bench_moments(c: &mut Criterion) {
    let result = CmePropagator::new(TriadNetwork, propagation_profile(26, 1))
        .unwrap()
        .propagate()
        .unwrap();
    c.bench_function("moments_378_states", |b| {
        b.iter(|| black_box(result.distribution.moments()));
    });
}

criterion_group!(
    benches,
    bench_seven_steps,
    bench_wide_propagation,
    bench_moments
);
criterion_main!(benches);
