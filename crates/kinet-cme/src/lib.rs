//! Exact master-equation propagation for Kinet reaction networks.
//!
//! [`CmePropagator`] advances a sparse [`Distribution`] over states one
//! reaction firing at a time, and [`Moments`] extracts per-species means
//! and variances from the result. Every step produces a new distribution
//! from the previous one, so a run is a fold over `K` steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod distribution;
pub mod moments;
pub mod propagator;

pub use config::PropagationConfig;
pub use distribution::Distribution;
pub use moments::Moments;
pub use propagator::{CmePropagator, MassDrift, PropagateError, Propagation};
