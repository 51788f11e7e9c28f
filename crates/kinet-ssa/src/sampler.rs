//! Single-trajectory Gillespie direct-method sampler.
//!
//! [`SsaSampler::run`] follows the embedded jump chain of the
//! continuous-time Markov chain: each step picks one reaction with
//! probability proportional to its propensity and applies it. Firing times
//! are never drawn; only the order of events matters for hitting
//! questions.

use kinet_core::{ConfigError, ReactionError, ReactionNetwork, State};

use crate::source::UniformSource;
use crate::threshold::{HitFlags, Thresholds};

/// Why a trajectory stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// Every propensity is zero; no reaction can fire again.
    Absorbed,
    /// All three conditions have been hit.
    AllHit,
    /// `max_steps` reactions fired without absorption or all-hit.
    BudgetExhausted,
}

/// Outcome of one sampled trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trajectory {
    /// Conditions hit at any point, including the initial state.
    pub flags: HitFlags,
    /// Why the trajectory stopped.
    pub halt: Halt,
    /// Number of reactions that fired.
    pub reactions_fired: u64,
    /// State after the last firing.
    pub final_state: State,
}

/// Runs single trajectories of a [`ReactionNetwork`].
///
/// The sampler holds only immutable configuration; each call to
/// [`run`](SsaSampler::run) works on its own copy of the initial state, so
/// one sampler can be shared across threads.
#[derive(Clone, Debug)]
pub struct SsaSampler<N> {
    network: N,
    thresholds: Thresholds,
    max_steps: u64,
}

impl<N: ReactionNetwork> SsaSampler<N> {
    /// Create a sampler with a per-trajectory budget of `max_steps` firings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxSteps`] if `max_steps` is zero.
    pub fn new(network: N, thresholds: Thresholds, max_steps: u64) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        Ok(Self {
            network,
            thresholds,
            max_steps,
        })
    }

    /// The network being sampled.
    pub fn network(&self) -> &N {
        &self.network
    }

    /// The monitored thresholds.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Per-trajectory firing budget.
    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Simulate one trajectory from `initial`, drawing from `source`.
    ///
    /// Flags start from the checks at `initial`, so a condition already
    /// true there counts as hit with zero firings. The all-hit halt is
    /// checked after each firing. Consumes exactly one uniform per firing.
    ///
    /// # Errors
    ///
    /// Returns a [`ReactionError`] if the network selects a reaction that
    /// would drive a count negative. This cannot happen for a network that
    /// honours the [`ReactionNetwork`] contract.
    pub fn run<S>(&self, initial: State, source: &mut S) -> Result<Trajectory, ReactionError>
    where
        S: UniformSource + ?Sized,
    {
        let mut state = initial;
        let mut flags = HitFlags::at(&state, &self.thresholds);
        let mut fired = 0u64;

        let halt = loop {
            if fired == self.max_steps {
                break Halt::BudgetExhausted;
            }

            let propensities = self.network.propensities(&state);
            let total = propensities.total();
            if total == 0.0 {
                break Halt::Absorbed;
            }

            let r = source.next_uniform() * total;
            let Some(reaction) = propensities.select(r) else {
                break Halt::Absorbed;
            };

            state = state.apply(self.network.delta(reaction), reaction)?;
            fired += 1;

            flags.observe(&state, &self.thresholds);
            if flags.all() {
                break Halt::AllHit;
            }
        };

        tracing::trace!(?halt, reactions_fired = fired, %state, "trajectory halted");

        Ok(Trajectory {
            flags,
            halt,
            reactions_fired: fired,
            final_state: state,
        })
    }
}
