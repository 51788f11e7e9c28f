//! Command-line arguments for both binaries.
//!
//! Counts and step budgets are parsed as signed integers so that a negative
//! value reaches validation and is reported as a [`ConfigError`] instead of
//! a generic parse failure.

use clap::Parser;
use kinet_cme::PropagationConfig;
use kinet_core::{ConfigError, State};
use kinet_ssa::SamplingConfig;

/// Estimate threshold-hitting probabilities by stochastic simulation.
#[derive(Debug, Parser)]
#[command(name = "kinet-sample", version, about, long_about = None)]
pub struct SampleArgs {
    /// Initial X1 count.
    #[arg(default_value_t = 110, allow_negative_numbers = true)]
    pub x1: i64,

    /// Initial X2 count.
    #[arg(default_value_t = 26, allow_negative_numbers = true)]
    pub x2: i64,

    /// Initial X3 count.
    #[arg(default_value_t = 55, allow_negative_numbers = true)]
    pub x3: i64,

    /// Number of independent trajectories.
    #[arg(short = 'n', long, default_value_t = 200, allow_negative_numbers = true)]
    pub simulations: i64,

    /// Reaction firings allowed per trajectory.
    #[arg(long, default_value_t = 10_000, allow_negative_numbers = true)]
    pub max_steps: i64,

    /// Seed for reproducible trajectories. Unseeded runs differ every time.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads for the trajectory batch.
    #[arg(short, long)]
    pub workers: Option<usize>,
}

impl SampleArgs {
    /// Validate and convert into a [`SamplingConfig`].
    pub fn into_config(self) -> Result<SamplingConfig, ConfigError> {
        let initial_state = State::from_signed([self.x1, self.x2, self.x3])?;
        // Non-positive values all map onto the "at least 1" errors.
        let n_simulations = u64::try_from(self.simulations).unwrap_or(0);
        let max_steps = u64::try_from(self.max_steps).unwrap_or(0);
        let config = SamplingConfig {
            n_simulations,
            max_steps,
            seed: self.seed,
            workers: self.workers,
            ..SamplingConfig::new(initial_state)
        };
        config.validate()?;
        Ok(config)
    }
}

/// Compute the exact state distribution after a fixed number of firings.
#[derive(Debug, Parser)]
#[command(name = "kinet-exact", version, about, long_about = None)]
pub struct ExactArgs {
    /// Initial X1 count.
    #[arg(default_value_t = 9, allow_negative_numbers = true)]
    pub x1: i64,

    /// Initial X2 count.
    #[arg(default_value_t = 8, allow_negative_numbers = true)]
    pub x2: i64,

    /// Initial X3 count.
    #[arg(default_value_t = 7, allow_negative_numbers = true)]
    pub x3: i64,

    /// Number of reaction firings to propagate.
    #[arg(short = 'k', long, default_value_t = 7, allow_negative_numbers = true)]
    pub steps: i64,

    /// Worker threads per propagation step.
    #[arg(short, long, default_value_t = 1)]
    pub workers: usize,

    /// Total-mass deviation from 1.0 that is reported as drift.
    #[arg(long, default_value_t = 1e-6)]
    pub drift_tolerance: f64,
}

impl ExactArgs {
    /// Validate and convert into a [`PropagationConfig`].
    pub fn into_config(self) -> Result<PropagationConfig, ConfigError> {
        let initial_state = State::from_signed([self.x1, self.x2, self.x3])?;
        let config = PropagationConfig {
            workers: self.workers,
            drift_tolerance: self.drift_tolerance,
            ..PropagationConfig::with_signed_steps(initial_state, self.steps)?
        };
        config.validate()?;
        Ok(config)
    }
}
