//! Criterion micro-benchmarks for propensity evaluation, single trajectories,
//! and full Monte Carlo estimates.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use kinet_bench::sampling_profile;
use kinet_core::{ReactionNetwork, TriadNetwork};
use kinet_ssa::{trajectory_rng, MonteCarloEstimator, SsaSampler, Thresholds};
use kinet_test_utils::{REFERENCE_STATE, SAMPLING_STATE};

/// Benchmark: propensity vector at the reference state.
fn bench_propensities(c: &mut Criterion) {
    let net = TriadNetwork;
    c.bench_function("propensities_reference_state", |b| {
        b.iter(|| black_box(net.propensities(black_box(&REFERENCE_STATE))));
    });
}

/// Benchmark: one trajectory from the sampling state, fixed stream.
fn bench_single_trajectory(c: &mut Criterion) {
    let sampler = SsaSampler::new(TriadNetwork, Thresholds::default(), 10_000).unwrap();
    c.bench_function("trajectory_10k_budget", |b| {
        b.iter(|| {
            let mut rng = trajectory_rng(7, 0);
            black_box(sampler.run(SAMPLING_STATE, &mut rng).unwrap());
        });
    });
}

/// Benchmark: 200-trajectory estimate, serial vs 4 workers.
fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_200");
    group.sample_size(10);
    for workers in [1, 4] {
        let estimator = MonteCarloEstimator::new(TriadNetwork, sampling_profile(42, workers)).unwrap();
        group.bench_function(format!("workers_{workers}"), |b| {
            b.iter(|| black_box(estimator.estimate().unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_propensities,
    bench_single_trajectory,
    bench_estimate
);
criterion_main!(benches);
