//! Monte Carlo run configuration and validation.

use kinet_core::{ConfigError, State, MAX_WORKERS};

use crate::threshold::Thresholds;

/// Configuration for a [`MonteCarloEstimator`](crate::MonteCarloEstimator) run.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingConfig {
    /// State every trajectory starts from.
    pub initial_state: State,
    /// Number of independent trajectories. Default: 200.
    pub n_simulations: u64,
    /// Per-trajectory firing budget. Default: 10 000.
    pub max_steps: u64,
    /// Monitored thresholds. Default: [`Thresholds::default()`].
    pub thresholds: Thresholds,
    /// Run seed. `None` draws a fresh seed per run (non-reproducible).
    pub seed: Option<u64>,
    /// Worker threads. `None` runs on the calling thread.
    pub workers: Option<usize>,
}

impl SamplingConfig {
    /// Default configuration starting from `initial_state`.
    pub fn new(initial_state: State) -> Self {
        Self {
            initial_state,
            n_simulations: 200,
            max_steps: 10_000,
            thresholds: Thresholds::default(),
            seed: None,
            workers: None,
        }
    }

    /// Check structural invariants before any trajectory runs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSimulations`], [`ConfigError::ZeroMaxSteps`],
    /// or [`ConfigError::ZeroWorkers`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_simulations == 0 {
            return Err(ConfigError::ZeroSimulations);
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        if self.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Worker threads actually used: never more than there are trajectories
    /// and never more than [`MAX_WORKERS`].
    pub fn resolved_workers(&self) -> usize {
        let requested = self.workers.unwrap_or(1).max(1);
        let cap = usize::try_from(self.n_simulations).unwrap_or(usize::MAX);
        requested.min(cap).min(MAX_WORKERS).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SamplingConfig {
        SamplingConfig::new(State::new(110, 26, 55))
    }

    #[test]
    fn defaults() {
        let c = base();
        assert_eq!(c.n_simulations, 200);
        assert_eq!(c.max_steps, 10_000);
        assert_eq!(c.thresholds, Thresholds::default());
        assert!(c.seed.is_none());
        assert!(c.validate().is_ok());
        assert_eq!(c.resolved_workers(), 1);
    }

    #[test]
    fn zero_simulations_rejected() {
        let c = SamplingConfig {
            n_simulations: 0,
            ..base()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroSimulations));
    }

    #[test]
    fn zero_max_steps_rejected() {
        let c = SamplingConfig {
            max_steps: 0,
            ..base()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroMaxSteps));
    }

    #[test]
    fn zero_workers_rejected() {
        let c = SamplingConfig {
            workers: Some(0),
            ..base()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn workers_capped_by_simulations() {
        let c = SamplingConfig {
            n_simulations: 3,
            workers: Some(8),
            ..base()
        };
        assert_eq!(c.resolved_workers(), 3);
    }

    #[test]
    fn huge_worker_request_is_clamped() {
        let c = SamplingConfig {
            n_simulations: 1_000_000_000,
            workers: Some(1_000_000_000),
            ..base()
        };
        assert!(c.validate().is_ok());
        assert_eq!(c.resolved_workers(), MAX_WORKERS);
    }
}
