//! Reference states shared by the test suites.

use kinet_core::State;

/// Starting state of the exact-propagation example, `(9, 8, 7)`.
///
/// Propensities here are `(288, 378, 168)`, total 834.
pub const REFERENCE_STATE: State = State::new(9, 8, 7);

/// Starting state of the hitting-probability example, `(110, 26, 55)`.
pub const SAMPLING_STATE: State = State::new(110, 26, 55);

/// The empty state; every propensity is zero.
pub const ABSORBING_STATE: State = State::new(0, 0, 0);

/// Number of distinct states reachable in exactly seven firings from
/// [`REFERENCE_STATE`].
pub const SEVEN_STEP_SUPPORT: usize = 22;

/// Per-species means after seven firings from [`REFERENCE_STATE`].
pub const SEVEN_STEP_MEANS: [f64; 3] = [
    5.835_304_996_071_677,
    12.494_885_983_195_326,
    7.805_691_649_865_952,
];

/// Per-species variances after seven firings from [`REFERENCE_STATE`].
pub const SEVEN_STEP_VARIANCES: [f64; 3] = [
    5.894_291_160_385_279,
    8.936_891_432_991_729,
    8.955_924_251_492_156,
];
