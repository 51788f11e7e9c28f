//! Stochastic simulation of Kinet reaction networks.
//!
//! - [`SsaSampler`] runs one Gillespie direct-method trajectory and reports
//!   which monitored [`Thresholds`] it ever satisfied.
//! - [`MonteCarloEstimator`] runs many independent trajectories, optionally
//!   across worker threads, and turns the hit counts into
//!   [`HitProbabilities`].
//!
//! Randomness enters only through the [`UniformSource`] trait, so tests can
//! substitute a [`ScriptedSource`] or a seeded generator without touching
//! the default unseeded behavior.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod estimator;
pub mod sampler;
pub mod source;
pub mod threshold;

pub use config::SamplingConfig;
pub use estimator::{EstimateError, HitCounts, HitProbabilities, MonteCarloEstimator};
pub use sampler::{Halt, SsaSampler, Trajectory};
pub use source::{trajectory_rng, ScriptedSource, SourceError, UniformSource};
pub use threshold::{Condition, HitFlags, Thresholds};
