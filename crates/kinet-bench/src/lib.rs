//! Benchmark profiles for the Kinet engines.
//!
//! - [`sampling_profile`]: the reference hitting-probability run with a
//!   fixed seed and a caller-chosen worker count
//! - [`propagation_profile`]: exact propagation from a populous state whose
//!   support grows past the parallel fan-out threshold

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use kinet_cme::PropagationConfig;
use kinet_core::State;
use kinet_ssa::SamplingConfig;

/// Reference sampling run from `(110, 26, 55)`: 200 trajectories of at most
/// 10 000 firings, seeded so every iteration does identical work.
pub fn sampling_profile(seed: u64, workers: usize) -> SamplingConfig {
    SamplingConfig {
        seed: Some(seed),
        workers: Some(workers),
        ..SamplingConfig::new(State::new(110, 26, 55))
    }
}

/// Exact propagation from `(60, 60, 60)`. After 26 steps the support holds
/// 378 states.
pub fn propagation_profile(steps: u64, workers: usize) -> PropagationConfig {
    PropagationConfig {
        workers,
        ..PropagationConfig::new(State::new(60, 60, 60), steps)
    }
}
