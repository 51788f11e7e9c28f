//! Test fixtures and mock networks for Kinet development.
//!
//! Provides the reference states used across the test suites and small
//! [`ReactionNetwork`] implementations with hand-picked propensities, so
//! engine behavior can be checked independently of the triad formulas.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use kinet_core::{Delta, Propensities, Reaction, ReactionNetwork, State, REACTION_COUNT};

pub use fixtures::{
    ABSORBING_STATE, REFERENCE_STATE, SAMPLING_STATE, SEVEN_STEP_MEANS, SEVEN_STEP_SUPPORT,
    SEVEN_STEP_VARIANCES,
};

const COUNTER_REACTIONS: [Reaction; REACTION_COUNT] = [
    Reaction {
        name: "0 -> X1",
        delta: Delta::new([1, 0, 0]),
    },
    Reaction {
        name: "0 -> X2",
        delta: Delta::new([0, 1, 0]),
    },
    Reaction {
        name: "0 -> X3",
        delta: Delta::new([0, 0, 1]),
    },
];

/// Three pure-birth reactions with state-independent propensities.
///
/// Reaction `i` adds one molecule of species `i`, so the species that grew
/// identifies which reaction fired. Never absorbing unless every weight is
/// zero; never underflows.
pub struct CounterNetwork {
    weights: [f64; REACTION_COUNT],
}

impl CounterNetwork {
    pub fn new(weights: [f64; REACTION_COUNT]) -> Self {
        Self { weights }
    }
}

impl ReactionNetwork for CounterNetwork {
    fn reactions(&self) -> &[Reaction; REACTION_COUNT] {
        &COUNTER_REACTIONS
    }

    fn propensities(&self, _state: &State) -> Propensities {
        Propensities::new(self.weights)
    }
}

const DRAIN_REACTIONS: [Reaction; REACTION_COUNT] = [
    Reaction {
        name: "X1 -> 0",
        delta: Delta::new([-1, 0, 0]),
    },
    Reaction {
        name: "noop",
        delta: Delta::new([0, 0, 0]),
    },
    Reaction {
        name: "noop",
        delta: Delta::new([0, 0, 0]),
    },
];

/// A network that violates the propensity contract.
///
/// Reaction 0 always has propensity 1 and removes one `X1`, even when no
/// `X1` is present. Used to check that engines report
/// [`ReactionError::Underflow`](kinet_core::ReactionError) instead of
/// panicking.
pub struct DrainNetwork;

impl ReactionNetwork for DrainNetwork {
    fn reactions(&self) -> &[Reaction; REACTION_COUNT] {
        &DRAIN_REACTIONS
    }

    fn propensities(&self, _state: &State) -> Propensities {
        Propensities::new([1.0, 0.0, 0.0])
    }
}

/// Assert `actual` is within `tol` of `expected`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}
