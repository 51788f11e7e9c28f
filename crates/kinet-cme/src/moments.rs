//! Per-species mean and variance of a [`Distribution`].

use kinet_core::{Species, SPECIES_COUNT};

use crate::distribution::Distribution;

/// Means and variances of the three species counts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moments {
    /// `E[x_i]` in species order.
    pub mean: [f64; SPECIES_COUNT],
    /// `E[x_i^2] - E[x_i]^2` in species order.
    pub variance: [f64; SPECIES_COUNT],
}

impl Moments {
    /// Single pass over `distribution`; does not renormalize.
    pub fn of(distribution: &Distribution) -> Self {
        let mut mean = [0.0; SPECIES_COUNT];
        let mut second = [0.0; SPECIES_COUNT];
        for (state, mass) in distribution.iter() {
            for (i, count) in state.counts().into_iter().enumerate() {
                let x = f64::from(count);
                mean[i] += x * mass;
                second[i] += x * x * mass;
            }
        }
        let variance = std::array::from_fn(|i| second[i] - mean[i] * mean[i]);
        Self { mean, variance }
    }

    /// Mean count of `species`.
    pub fn mean_of(&self, species: Species) -> f64 {
        self.mean[species.index()]
    }

    /// Variance of the count of `species`.
    pub fn variance_of(&self, species: Species) -> f64 {
        self.variance[species.index()]
    }

    /// Standard deviation of the count of `species`.
    ///
    /// Rounding can leave a true-zero variance slightly negative; that is
    /// clamped to zero here.
    pub fn std_dev(&self, species: Species) -> f64 {
        self.variance_of(species).max(0.0).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinet_core::State;

    #[test]
    fn point_mass_has_zero_variance() {
        let m = Distribution::point(State::new(9, 8, 7)).moments();
        assert_eq!(m.mean, [9.0, 8.0, 7.0]);
        assert_eq!(m.variance, [0.0, 0.0, 0.0]);
        assert_eq!(m.std_dev(Species::X2), 0.0);
    }

    #[test]
    fn two_point_distribution() {
        let d: Distribution = [(State::new(0, 2, 0), 0.5), (State::new(4, 2, 1), 0.5)]
            .into_iter()
            .collect();
        let m = Moments::of(&d);
        assert_eq!(m.mean_of(Species::X1), 2.0);
        assert_eq!(m.variance_of(Species::X1), 4.0);
        assert_eq!(m.std_dev(Species::X1), 2.0);
        assert_eq!(m.variance_of(Species::X2), 0.0);
        assert_eq!(m.mean_of(Species::X3), 0.5);
        assert_eq!(m.variance_of(Species::X3), 0.25);
    }

    #[test]
    fn empty_distribution_has_zero_moments() {
        let m = Distribution::default().moments();
        assert_eq!(m.mean, [0.0; 3]);
        assert_eq!(m.variance, [0.0; 3]);
    }
}
