//! Uniform random draws for the sampler.
//!
//! The sampler only ever needs values in `[0, 1)`, so it depends on the
//! small [`UniformSource`] trait rather than a concrete generator. Every
//! [`rand::RngCore`] is a source; [`ScriptedSource`] replays a fixed
//! sequence for tests.
//!
//! Reproducible runs derive one ChaCha8 generator per trajectory from a
//! run seed and the trajectory index ([`trajectory_rng`]), so the draws a
//! trajectory sees do not depend on how trajectories are spread over
//! worker threads.

use std::error::Error;
use std::fmt;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A provider of uniform values in `[0, 1)`.
pub trait UniformSource {
    /// Next value, `0.0 <= u < 1.0`.
    fn next_uniform(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// The generator for trajectory `index` of a run seeded with `run_seed`.
///
/// Each trajectory gets its own ChaCha8 stream under the shared seed.
pub fn trajectory_rng(run_seed: u64, index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(run_seed);
    rng.set_stream(index);
    rng
}

/// A fresh, non-reproducible run seed from the thread-local generator.
pub fn fresh_run_seed() -> u64 {
    rand::rng().random()
}

/// Invalid value sequence for a [`ScriptedSource`].
#[derive(Clone, Debug, PartialEq)]
pub enum SourceError {
    /// The sequence had no values.
    Empty,
    /// A value was NaN or outside `[0, 1)`.
    OutOfRange {
        /// Position of the value in the sequence.
        index: usize,
        /// The value supplied.
        value: f64,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "scripted source needs at least one value"),
            Self::OutOfRange { index, value } => {
                write!(f, "scripted value {value} at index {index} is outside [0, 1)")
            }
        }
    }
}

impl Error for SourceError {}

/// Replays a fixed sequence of uniform values, wrapping at the end.
///
/// Built with [`ScriptedSource::new`], which rejects empty sequences and
/// values outside `[0, 1)`.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source replaying `values` in order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Empty`] for an empty sequence, or
    /// [`SourceError::OutOfRange`] for the first value not in `[0, 1)`.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self, SourceError> {
        let values = values.into();
        if values.is_empty() {
            return Err(SourceError::Empty);
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..1.0).contains(*v))
        {
            return Err(SourceError::OutOfRange { index, value });
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_draws_are_unit_interval() {
        let mut rng = trajectory_rng(7, 0);
        for _ in 0..1000 {
            let u = rng.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn trajectory_rng_is_reproducible() {
        let a: Vec<f64> = {
            let mut rng = trajectory_rng(42, 3);
            (0..8).map(|_| rng.next_uniform()).collect()
        };
        let b: Vec<f64> = {
            let mut rng = trajectory_rng(42, 3);
            (0..8).map(|_| rng.next_uniform()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn trajectory_streams_differ() {
        let mut first = trajectory_rng(42, 0);
        let mut second = trajectory_rng(42, 1);
        let a: Vec<f64> = (0..4).map(|_| first.next_uniform()).collect();
        let b: Vec<f64> = (0..4).map(|_| second.next_uniform()).collect();
        assert_ne!(a, b);
    }

    // ── ScriptedSource ──────────────────────────────────────────

    #[test]
    fn scripted_replays_and_wraps() {
        let mut s = ScriptedSource::new([0.1, 0.5]).unwrap();
        assert_eq!(s.next_uniform(), 0.1);
        assert_eq!(s.next_uniform(), 0.5);
        assert_eq!(s.next_uniform(), 0.1);
        assert_eq!(s.drawn(), 3);
    }

    #[test]
    fn scripted_rejects_empty() {
        assert_eq!(
            ScriptedSource::new(Vec::new()).unwrap_err(),
            SourceError::Empty
        );
    }

    #[test]
    fn scripted_rejects_out_of_range() {
        assert_eq!(
            ScriptedSource::new([0.2, 1.0]).unwrap_err(),
            SourceError::OutOfRange {
                index: 1,
                value: 1.0
            }
        );
        assert_eq!(
            ScriptedSource::new([-0.1]).unwrap_err(),
            SourceError::OutOfRange {
                index: 0,
                value: -0.1
            }
        );
        assert!(matches!(
            ScriptedSource::new([f64::NAN]),
            Err(SourceError::OutOfRange { index: 0, .. })
        ));
    }
}
