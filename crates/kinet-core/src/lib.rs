//! Core types and traits for the Kinet reaction-network simulators.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! molecule-count [`State`], the stoichiometric [`Delta`] and [`Reaction`]
//! descriptors, the [`Propensities`] vector, and the [`ReactionNetwork`]
//! trait consumed by both the stochastic sampler (`kinet-ssa`) and the exact
//! master-equation propagator (`kinet-cme`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod network;
pub mod reaction;
pub mod state;

pub use error::{ConfigError, ReactionError};
pub use network::{ReactionNetwork, TriadNetwork};
pub use reaction::{Delta, Propensities, Reaction, REACTION_COUNT};
pub use state::{Species, State, SPECIES_COUNT};

/// Upper bound on the worker threads an engine spawns at once.
///
/// Larger requested worker counts are clamped, not rejected.
pub const MAX_WORKERS: usize = 64;
