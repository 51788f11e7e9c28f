//! Exact-propagation configuration and validation.

use kinet_core::{ConfigError, State, MAX_WORKERS};

/// Configuration for a [`CmePropagator`](crate::CmePropagator) run.
#[derive(Clone, Debug, PartialEq)]
pub struct PropagationConfig {
    /// State holding all probability mass before the first firing.
    pub initial_state: State,
    /// Number of reaction-firing steps to propagate.
    pub steps: u64,
    /// Threads used to fan out source states within one step. Default: 1.
    /// Clamped by [`resolved_workers`](Self::resolved_workers).
    pub workers: usize,
    /// Allowed deviation of total mass from 1 before a drift diagnostic is
    /// recorded. Default: 1e-6.
    pub drift_tolerance: f64,
}

impl PropagationConfig {
    /// Default configuration: one worker, tolerance 1e-6.
    pub fn new(initial_state: State, steps: u64) -> Self {
        Self {
            initial_state,
            steps,
            workers: 1,
            drift_tolerance: 1e-6,
        }
    }

    /// Like [`new`](Self::new), for a step count from an untrusted source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeSteps`] if `steps < 0`.
    pub fn with_signed_steps(initial_state: State, steps: i64) -> Result<Self, ConfigError> {
        let steps = u64::try_from(steps).map_err(|_| ConfigError::NegativeSteps { value: steps })?;
        Ok(Self::new(initial_state, steps))
    }

    /// Check structural invariants before propagation begins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroWorkers`] or
    /// [`ConfigError::InvalidDriftTolerance`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if !self.drift_tolerance.is_finite() || self.drift_tolerance <= 0.0 {
            return Err(ConfigError::InvalidDriftTolerance {
                value: self.drift_tolerance,
            });
        }
        Ok(())
    }

    /// Threads used for a step over `sources` source states: the requested
    /// count, capped at [`MAX_WORKERS`] and at one thread per source.
    pub fn resolved_workers(&self, sources: usize) -> usize {
        self.workers.min(MAX_WORKERS).min(sources).max(1)
    }
}
