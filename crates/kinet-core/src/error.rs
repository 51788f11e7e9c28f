//! Error types shared by the Kinet engines.
//!
//! Configuration problems are rejected before any simulation begins
//! ([`ConfigError`]). A firing that would leave the state space is a
//! [`ReactionError`]; it cannot happen for [`TriadNetwork`](crate::TriadNetwork)
//! but is reported rather than panicked on for user-supplied networks.

use std::error::Error;
use std::fmt;

use crate::state::{Species, State};

/// Invalid engine or command-line configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// An initial molecule count was negative.
    NegativeCount {
        /// The offending species.
        species: Species,
        /// The value supplied.
        value: i64,
    },
    /// An initial molecule count does not fit in `u32`.
    CountOverflow {
        /// The offending species.
        species: Species,
        /// The value supplied.
        value: i64,
    },
    /// `n_simulations` was zero.
    ZeroSimulations,
    /// `max_steps` was zero.
    ZeroMaxSteps,
    /// A negative propagation step count was requested.
    NegativeSteps {
        /// The value supplied.
        value: i64,
    },
    /// An explicit worker count of zero was requested.
    ZeroWorkers,
    /// The mass-drift tolerance is NaN, infinite, zero, or negative.
    InvalidDriftTolerance {
        /// The value supplied.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCount { species, value } => {
                write!(f, "initial count of {species} must be non-negative, got {value}")
            }
            Self::CountOverflow { species, value } => {
                write!(f, "initial count of {species} exceeds u32::MAX, got {value}")
            }
            Self::ZeroSimulations => write!(f, "n_simulations must be at least 1"),
            Self::ZeroMaxSteps => write!(f, "max_steps must be at least 1"),
            Self::NegativeSteps { value } => {
                write!(f, "steps must be non-negative, got {value}")
            }
            Self::ZeroWorkers => write!(f, "worker count must be at least 1"),
            Self::InvalidDriftTolerance { value } => {
                write!(f, "drift tolerance must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// A reaction firing that would leave the non-negative state space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReactionError {
    /// Applying the reaction's delta would make a count negative.
    ///
    /// Indicates a network whose propensity is positive without enough
    /// reactant molecules present.
    Underflow {
        /// Index of the reaction that fired.
        reaction: usize,
        /// The state it fired from.
        state: State,
    },
    /// Applying the reaction's delta would exceed `u32::MAX`.
    Overflow {
        /// Index of the reaction that fired.
        reaction: usize,
        /// The state it fired from.
        state: State,
    },
}

impl fmt::Display for ReactionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underflow { reaction, state } => write!(
                f,
                "reaction R{} fired from {state} with insufficient reactants",
                reaction + 1
            ),
            Self::Overflow { reaction, state } => write!(
                f,
                "reaction R{} fired from {state} overflows a molecule count",
                reaction + 1
            ),
        }
    }
}

impl Error for ReactionError {}
