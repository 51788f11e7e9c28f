//! Monte Carlo estimation of hitting probabilities.
//!
//! [`MonteCarloEstimator`] runs `n_simulations` independent trajectories
//! and reports, per condition, the fraction that hit it. Trajectories share
//! nothing mutable: each draws from its own generator
//! ([`trajectory_rng`](crate::source::trajectory_rng)) and works on its own
//! copy of the initial state.
//!
//! With more than one worker the trajectory indices are split into
//! contiguous chunks run on scoped threads. Each worker accumulates local
//! [`HitCounts`] and sends them back over a channel; the caller reduces
//! them once every worker is done, so the hot loop takes no locks. Integer
//! counts reduce exactly, so the result does not depend on the worker count.

use std::error::Error;
use std::fmt;
use std::ops::Range;
use std::thread;

use kinet_core::{ConfigError, ReactionError, ReactionNetwork};

use crate::config::SamplingConfig;
use crate::sampler::{Halt, SsaSampler, Trajectory};
use crate::source::{fresh_run_seed, trajectory_rng, UniformSource};
use crate::threshold::Condition;

// ── Error type ──────────────────────────────────────────────────

/// Error from a Monte Carlo run.
#[derive(Clone, Debug, PartialEq)]
pub enum EstimateError {
    /// The configuration was rejected before any trajectory ran.
    Config(ConfigError),
    /// A trajectory attempted an invalid firing.
    Reaction(ReactionError),
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid sampling config: {e}"),
            Self::Reaction(e) => write!(f, "trajectory failed: {e}"),
        }
    }
}

impl Error for EstimateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Reaction(e) => Some(e),
        }
    }
}

impl From<ConfigError> for EstimateError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ReactionError> for EstimateError {
    fn from(e: ReactionError) -> Self {
        Self::Reaction(e)
    }
}

// ── Counters ────────────────────────────────────────────────────

/// Per-condition hit counts and halt tallies over a set of trajectories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitCounts {
    /// Trajectories that hit each condition, in condition order.
    pub hits: [u64; 3],
    /// Trajectories recorded.
    pub runs: u64,
    /// Trajectories that halted in an absorbing state.
    pub absorbed: u64,
    /// Trajectories that halted after hitting every condition.
    pub all_hit: u64,
    /// Trajectories that used up their firing budget.
    pub budget_exhausted: u64,
}

impl HitCounts {
    /// Add one trajectory outcome.
    pub fn record(&mut self, trajectory: &Trajectory) {
        for condition in Condition::ALL {
            if trajectory.flags.get(condition) {
                self.hits[condition.index()] += 1;
            }
        }
        self.runs += 1;
        match trajectory.halt {
            Halt::Absorbed => self.absorbed += 1,
            Halt::AllHit => self.all_hit += 1,
            Halt::BudgetExhausted => self.budget_exhausted += 1,
        }
    }

    /// Fold another worker's counts into this one.
    pub fn merge(&mut self, other: &HitCounts) {
        for (mine, theirs) in self.hits.iter_mut().zip(other.hits) {
            *mine += theirs;
        }
        self.runs += other.runs;
        self.absorbed += other.absorbed;
        self.all_hit += other.all_hit;
        self.budget_exhausted += other.budget_exhausted;
    }
}

/// Empirical hitting probabilities from a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitProbabilities {
    counts: HitCounts,
}

impl HitProbabilities {
    /// Wrap counts from a run of at least one trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSimulations`] if `counts.runs` is zero.
    pub fn from_counts(counts: HitCounts) -> Result<Self, ConfigError> {
        if counts.runs == 0 {
            return Err(ConfigError::ZeroSimulations);
        }
        Ok(Self { counts })
    }

    /// Fraction of trajectories that hit `condition`, in `[0, 1]`.
    pub fn probability(&self, condition: Condition) -> f64 {
        self.counts.hits[condition.index()] as f64 / self.counts.runs as f64
    }

    /// All three probabilities in condition order.
    pub fn probabilities(&self) -> [f64; 3] {
        Condition::ALL.map(|c| self.probability(c))
    }

    /// Binomial standard error `sqrt(p (1 - p) / N)` of an estimate.
    pub fn standard_error(&self, condition: Condition) -> f64 {
        let p = self.probability(condition);
        (p * (1.0 - p) / self.counts.runs as f64).sqrt()
    }

    /// Number of trajectories behind the estimates.
    pub fn runs(&self) -> u64 {
        self.counts.runs
    }

    /// Raw counts and halt tallies.
    pub fn counts(&self) -> &HitCounts {
        &self.counts
    }
}

// ── Estimator ───────────────────────────────────────────────────

/// Runs many independent trajectories and aggregates hit-rates.
#[derive(Clone, Debug)]
pub struct MonteCarloEstimator<N> {
    sampler: SsaSampler<N>,
    config: SamplingConfig,
}

impl<N: ReactionNetwork> MonteCarloEstimator<N> {
    /// Validate `config` and build an estimator over `network`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by
    /// [`SamplingConfig::validate`].
    pub fn new(network: N, config: SamplingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sampler = SsaSampler::new(network, config.thresholds, config.max_steps)?;
        Ok(Self { sampler, config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Run all trajectories and return the empirical probabilities.
    ///
    /// Uses `config.seed` when set, otherwise a fresh run seed. Trajectory
    /// `i` always draws from stream `i` of the run seed, so a seeded run
    /// gives identical results for any worker count.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Reaction`] if any trajectory attempts an
    /// invalid firing; the error from the lowest-indexed failing worker
    /// chunk is reported.
    pub fn estimate(&self) -> Result<HitProbabilities, EstimateError> {
        let run_seed = self.config.seed.unwrap_or_else(fresh_run_seed);
        let n = self.config.n_simulations;
        let workers = self.config.resolved_workers();

        tracing::debug!(
            runs = n,
            workers,
            seeded = self.config.seed.is_some(),
            initial = %self.config.initial_state,
            "starting monte carlo run"
        );

        let counts = if workers <= 1 {
            self.run_chunk(run_seed, 0..n)?
        } else {
            self.run_parallel(run_seed, n, workers)?
        };

        tracing::debug!(
            hits = ?counts.hits,
            absorbed = counts.absorbed,
            all_hit = counts.all_hit,
            budget_exhausted = counts.budget_exhausted,
            "monte carlo run finished"
        );

        Ok(HitProbabilities::from_counts(counts)?)
    }

    /// Run all trajectories on the calling thread, drawing every uniform
    /// from one shared `source` in trajectory order.
    ///
    /// Ignores `config.seed` and `config.workers`. Useful for replaying a
    /// scripted draw sequence.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Reaction`] if any trajectory attempts an
    /// invalid firing.
    pub fn estimate_with<S>(&self, source: &mut S) -> Result<HitProbabilities, EstimateError>
    where
        S: UniformSource + ?Sized,
    {
        let mut counts = HitCounts::default();
        for _ in 0..self.config.n_simulations {
            let trajectory = self.sampler.run(self.config.initial_state, source)?;
            counts.record(&trajectory);
        }
        Ok(HitProbabilities::from_counts(counts)?)
    }

    fn run_chunk(&self, run_seed: u64, indices: Range<u64>) -> Result<HitCounts, ReactionError> {
        let mut counts = HitCounts::default();
        for index in indices {
            let mut rng = trajectory_rng(run_seed, index);
            let trajectory = self.sampler.run(self.config.initial_state, &mut rng)?;
            counts.record(&trajectory);
        }
        Ok(counts)
    }

    fn run_parallel(&self, run_seed: u64, n: u64, workers: usize) -> Result<HitCounts, ReactionError> {
        let chunk = n.div_ceil(workers as u64);
        let ranges: Vec<Range<u64>> = (0..workers as u64)
            .map(|worker| worker.saturating_mul(chunk)..(worker + 1).saturating_mul(chunk).min(n))
            .filter(|range| !range.is_empty())
            .collect();
        let (tx, rx) = crossbeam_channel::bounded(ranges.len());

        thread::scope(|scope| {
            for (worker, indices) in ranges.into_iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    // The receiver outlives the scope, so send cannot fail.
                    let _ = tx.send((worker, self.run_chunk(run_seed, indices)));
                });
            }
        });
        drop(tx);

        let mut partials: Vec<_> = rx.iter().collect();
        partials.sort_by_key(|(worker, _)| *worker);

        let mut total = HitCounts::default();
        for (_, partial) in partials {
            total.merge(&partial?);
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;
    use crate::threshold::Thresholds;
    use kinet_core::{State, TriadNetwork};
    use kinet_test_utils::{CounterNetwork, DrainNetwork, ABSORBING_STATE, SAMPLING_STATE};

    fn config(n: u64) -> SamplingConfig {
        SamplingConfig {
            n_simulations: n,
            max_steps: 2_000,
            seed: Some(2024),
            ..SamplingConfig::new(SAMPLING_STATE)
        }
    }

    #[test]
    fn rejects_zero_simulations() {
        let err = MonteCarloEstimator::new(TriadNetwork, config(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroSimulations);
    }

    #[test]
    fn from_counts_rejects_empty_run() {
        assert_eq!(
            HitProbabilities::from_counts(HitCounts::default()),
            Err(ConfigError::ZeroSimulations)
        );
    }

    // ── Counters ────────────────────────────────────────────────

    #[test]
    fn merge_adds_fieldwise() {
        let mut a = HitCounts {
            hits: [1, 2, 3],
            runs: 4,
            absorbed: 1,
            all_hit: 2,
            budget_exhausted: 1,
        };
        let b = HitCounts {
            hits: [0, 1, 1],
            runs: 2,
            absorbed: 0,
            all_hit: 0,
            budget_exhausted: 2,
        };
        a.merge(&b);
        assert_eq!(a.hits, [1, 3, 4]);
        assert_eq!(a.runs, 6);
        assert_eq!(a.budget_exhausted, 3);
    }

    #[test]
    fn probabilities_and_standard_error() {
        let p = HitProbabilities::from_counts(HitCounts {
            hits: [0, 50, 100],
            runs: 100,
            ..HitCounts::default()
        })
        .unwrap();
        assert_eq!(p.probabilities(), [0.0, 0.5, 1.0]);
        assert_eq!(p.standard_error(Condition::C1), 0.0);
        assert!((p.standard_error(Condition::C2) - 0.05).abs() < 1e-12);
        assert_eq!(p.runs(), 100);
    }

    // ── Runs ────────────────────────────────────────────────────

    #[test]
    fn absorbing_start_gives_initial_flags_only() {
        let est = MonteCarloEstimator::new(
            TriadNetwork,
            SamplingConfig {
                n_simulations: 10,
                seed: Some(1),
                ..SamplingConfig::new(ABSORBING_STATE)
            },
        )
        .unwrap();
        let p = est.estimate().unwrap();
        assert_eq!(p.probabilities(), [0.0, 1.0, 0.0]);
        assert_eq!(p.counts().absorbed, 10);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let est = MonteCarloEstimator::new(TriadNetwork, config(40)).unwrap();
        assert_eq!(est.estimate().unwrap(), est.estimate().unwrap());
    }

    #[test]
    fn worker_count_does_not_change_seeded_result() {
        let serial = MonteCarloEstimator::new(TriadNetwork, config(37)).unwrap();
        let parallel = MonteCarloEstimator::new(
            TriadNetwork,
            SamplingConfig {
                workers: Some(4),
                ..config(37)
            },
        )
        .unwrap();
        assert_eq!(serial.estimate().unwrap(), parallel.estimate().unwrap());
    }

    #[test]
    fn huge_worker_request_matches_serial() {
        let serial = MonteCarloEstimator::new(TriadNetwork, config(9)).unwrap();
        let clamped = MonteCarloEstimator::new(
            TriadNetwork,
            SamplingConfig {
                workers: Some(usize::MAX),
                ..config(9)
            },
        )
        .unwrap();
        assert_eq!(clamped.config().resolved_workers(), 9);
        assert_eq!(serial.estimate().unwrap(), clamped.estimate().unwrap());
    }

    #[test]
    fn estimate_with_shared_source() {
        let thresholds = Thresholds {
            x1_at_least: 3,
            x2_below: 0,
            x3_above: 1_000,
        };
        // Every draw fires reaction 0, so X1 reaches 3 after three firings.
        let est = MonteCarloEstimator::new(
            CounterNetwork::new([1.0, 1.0, 1.0]),
            SamplingConfig {
                n_simulations: 4,
                max_steps: 3,
                thresholds,
                ..SamplingConfig::new(State::new(0, 0, 0))
            },
        )
        .unwrap();
        let mut source = ScriptedSource::new([0.0]).unwrap();
        let p = est.estimate_with(&mut source).unwrap();
        assert_eq!(p.probabilities(), [1.0, 0.0, 0.0]);
        assert_eq!(source.drawn(), 12);
        assert_eq!(p.counts().budget_exhausted, 4);
    }

    #[test]
    fn reaction_errors_propagate_from_workers() {
        let est = MonteCarloEstimator::new(
            DrainNetwork,
            SamplingConfig {
                n_simulations: 8,
                workers: Some(2),
                seed: Some(5),
                ..SamplingConfig::new(State::new(1, 50, 0))
            },
        )
        .unwrap();
        assert!(matches!(
            est.estimate(),
            Err(EstimateError::Reaction(ReactionError::Underflow { .. }))
        ));
    }
}
