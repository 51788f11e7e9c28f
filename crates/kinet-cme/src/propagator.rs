//! Exact forward propagation of the chemical master equation.
//!
//! One step advances the distribution by exactly one reaction firing of the
//! embedded jump chain. Every state with positive total propensity sends
//! `mass * a_i / total` to `state + delta_i` for each reaction with
//! `a_i > 0`; an absorbing state keeps its mass. Contributions landing on
//! the same destination are summed, which keeps the support far below the
//! `3^K` worst case.
//!
//! Each step builds a fresh [`Distribution`] and only reads the previous
//! one. With several workers the source states are split into contiguous
//! chunks whose contributions are computed on scoped threads; the
//! contributions are then accumulated on the calling thread in source
//! order, so the result is bit-identical for any worker count.

use std::error::Error;
use std::fmt;
use std::thread;

use indexmap::IndexMap;
use kinet_core::{ConfigError, ReactionError, ReactionNetwork, State, REACTION_COUNT};

use crate::config::PropagationConfig;
use crate::distribution::Distribution;

/// Below this many source states a step never spawns threads.
const PARALLEL_MIN_SOURCES: usize = 256;

// ── Error type ──────────────────────────────────────────────────

/// Error from an exact propagation run.
#[derive(Clone, Debug, PartialEq)]
pub enum PropagateError {
    /// The configuration was rejected before propagation began.
    Config(ConfigError),
    /// A source state attempted an invalid firing.
    Reaction(ReactionError),
}

impl fmt::Display for PropagateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid propagation config: {e}"),
            Self::Reaction(e) => write!(f, "propagation failed: {e}"),
        }
    }
}

impl Error for PropagateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Reaction(e) => Some(e),
        }
    }
}

impl From<ConfigError> for PropagateError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ReactionError> for PropagateError {
    fn from(e: ReactionError) -> Self {
        Self::Reaction(e)
    }
}

// ── Diagnostics ─────────────────────────────────────────────────

/// Total mass strayed from 1 by more than the configured tolerance.
///
/// A non-fatal rounding diagnostic; propagation continues.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MassDrift {
    /// Step (1-based) after which the drift was observed.
    pub step: u64,
    /// Total mass after that step.
    pub total_mass: f64,
    /// `total_mass - 1.0`.
    pub deviation: f64,
}

/// Result of [`CmePropagator::propagate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Propagation {
    /// Distribution after the final step.
    pub distribution: Distribution,
    /// Number of steps taken.
    pub steps: u64,
    /// Support size after each step; `support_sizes[k]` is after step `k + 1`.
    pub support_sizes: Vec<usize>,
    /// Steps whose total mass drifted beyond tolerance.
    pub drift: Vec<MassDrift>,
}

// ── Propagator ──────────────────────────────────────────────────

/// Propagates an exact distribution over reaction-firing steps.
#[derive(Clone, Debug)]
pub struct CmePropagator<N> {
    network: N,
    config: PropagationConfig,
}

impl<N: ReactionNetwork> CmePropagator<N> {
    /// Validate `config` and build a propagator over `network`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by
    /// [`PropagationConfig::validate`].
    pub fn new(network: N, config: PropagationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { network, config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &PropagationConfig {
        &self.config
    }

    /// Propagate from `config.initial_state` for `config.steps` firings.
    ///
    /// # Errors
    ///
    /// Returns [`PropagateError::Reaction`] if a reachable state has a
    /// positive propensity for a reaction it cannot afford.
    pub fn propagate(&self) -> Result<Propagation, PropagateError> {
        self.propagate_from(Distribution::point(self.config.initial_state))
    }

    /// Propagate an arbitrary starting distribution for `config.steps` firings.
    ///
    /// # Errors
    ///
    /// As for [`propagate`](Self::propagate).
    pub fn propagate_from(&self, initial: Distribution) -> Result<Propagation, PropagateError> {
        let steps = self.config.steps;
        let mut support_sizes = Vec::new();
        let mut drift = Vec::new();
        let mut current = initial;

        for step in 1..=steps {
            let next = self.step(&current)?;
            let total_mass = next.total_mass();
            tracing::debug!(step, support = next.len(), total_mass, "propagated one firing");

            let deviation = total_mass - 1.0;
            if deviation.abs() > self.config.drift_tolerance {
                tracing::warn!(
                    step,
                    total_mass,
                    deviation,
                    tolerance = self.config.drift_tolerance,
                    "total probability mass drifted"
                );
                drift.push(MassDrift {
                    step,
                    total_mass,
                    deviation,
                });
            }

            support_sizes.push(next.len());
            current = next;
        }

        Ok(Propagation {
            distribution: current,
            steps,
            support_sizes,
            drift,
        })
    }

    /// Advance `current` by one reaction firing.
    ///
    /// `current` is only read; the returned distribution is built fresh.
    ///
    /// # Errors
    ///
    /// Returns a [`ReactionError`] if a source state has a positive
    /// propensity for a reaction that would drive a count negative.
    pub fn step(&self, current: &Distribution) -> Result<Distribution, ReactionError> {
        let mut next = IndexMap::with_capacity(current.len() * REACTION_COUNT);

        let workers = self.config.resolved_workers(current.len());
        if workers <= 1 || current.len() < PARALLEL_MIN_SOURCES {
            for (state, mass) in current.iter() {
                self.fan_out(state, mass, |dest, m| accumulate(&mut next, dest, m))?;
            }
        } else {
            for contributions in self.contributions_parallel(current, workers)? {
                for (dest, m) in contributions {
                    accumulate(&mut next, dest, m);
                }
            }
        }

        Ok(Distribution::from_map(next))
    }

    /// Compute every source's outgoing contributions, chunked across at
    /// most `workers` threads. Returned in chunk order.
    fn contributions_parallel(
        &self,
        current: &Distribution,
        workers: usize,
    ) -> Result<Vec<Vec<(State, f64)>>, ReactionError> {
        let sources: Vec<(State, f64)> = current.iter().collect();
        let chunk_len = sources.len().div_ceil(workers);
        let chunks: Vec<&[(State, f64)]> = sources.chunks(chunk_len).collect();
        let (tx, rx) = crossbeam_channel::bounded(chunks.len());

        thread::scope(|scope| {
            for (index, chunk) in chunks.into_iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    // The receiver outlives the scope, so send cannot fail.
                    let _ = tx.send((index, self.contributions(chunk)));
                });
            }
        });
        drop(tx);

        let mut partials: Vec<_> = rx.iter().collect();
        partials.sort_by_key(|(index, _)| *index);
        partials.into_iter().map(|(_, result)| result).collect()
    }

    fn contributions(&self, sources: &[(State, f64)]) -> Result<Vec<(State, f64)>, ReactionError> {
        let mut out = Vec::with_capacity(sources.len() * REACTION_COUNT);
        for &(state, mass) in sources {
            self.fan_out(state, mass, |dest, m| out.push((dest, m)))?;
        }
        Ok(out)
    }

    /// Emit `(destination, mass)` for every outgoing transition of `state`.
    fn fan_out<F>(&self, state: State, mass: f64, mut emit: F) -> Result<(), ReactionError>
    where
        F: FnMut(State, f64),
    {
        let propensities = self.network.propensities(&state);
        let total = propensities.total();
        if total == 0.0 {
            emit(state, mass);
            return Ok(());
        }
        for (reaction, a) in propensities.positive() {
            let dest = state.apply(self.network.delta(reaction), reaction)?;
            emit(dest, mass * (a / total));
        }
        Ok(())
    }
}

fn accumulate(map: &mut IndexMap<State, f64>, state: State, mass: f64) {
    *map.entry(state).or_insert(0.0) += mass;
}
