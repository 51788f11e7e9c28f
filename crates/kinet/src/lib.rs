//! Kinet: stochastic simulation and exact master-equation propagation for
//! a three-species reaction network.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Kinet sub-crates. For most users, adding `kinet` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use kinet::prelude::*;
//!
//! // Exact distribution after one firing from (9, 8, 7).
//! let config = PropagationConfig::new(State::new(9, 8, 7), 1);
//! let result = CmePropagator::new(TriadNetwork, config)
//!     .unwrap()
//!     .propagate()
//!     .unwrap();
//! assert_eq!(result.distribution.len(), 3);
//! let moments = result.distribution.moments();
//! assert!(moments.mean_of(Species::X1) < 9.0);
//!
//! // Reproducible hitting-probability estimate.
//! let config = SamplingConfig {
//!     n_simulations: 20,
//!     max_steps: 500,
//!     seed: Some(7),
//!     ..SamplingConfig::new(State::new(110, 26, 55))
//! };
//! let estimate = MonteCarloEstimator::new(TriadNetwork, config)
//!     .unwrap()
//!     .estimate()
//!     .unwrap();
//! assert!((0.0..=1.0).contains(&estimate.probability(Condition::C1)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `kinet-core` | States, reactions, propensities, the network trait, errors |
//! | [`ssa`] | `kinet-ssa` | Gillespie sampler and Monte Carlo estimator |
//! | [`cme`] | `kinet-cme` | Exact propagation and moments |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`kinet-core`).
///
/// Contains [`types::State`], [`types::Propensities`], the
/// [`types::ReactionNetwork`] trait, and the [`types::TriadNetwork`].
pub use kinet_core as types;

/// Stochastic simulation (`kinet-ssa`).
///
/// [`ssa::SsaSampler`] for single trajectories,
/// [`ssa::MonteCarloEstimator`] for hitting probabilities.
pub use kinet_ssa as ssa;

/// Exact master-equation propagation (`kinet-cme`).
///
/// [`cme::CmePropagator`] for step-by-step propagation,
/// [`cme::Moments`] for means and variances.
pub use kinet_cme as cme;

/// Common imports for typical Kinet usage.
///
/// ```rust
/// use kinet::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use kinet_core::{ReactionNetwork, Species, State, TriadNetwork};

    // Errors
    pub use kinet_core::{ConfigError, ReactionError};
    pub use kinet_cme::PropagateError;
    pub use kinet_ssa::EstimateError;

    // Sampling
    pub use kinet_ssa::{
        Condition, HitProbabilities, MonteCarloEstimator, SamplingConfig, SsaSampler, Thresholds,
    };

    // Exact propagation
    pub use kinet_cme::{CmePropagator, Distribution, Moments, PropagationConfig};
}
