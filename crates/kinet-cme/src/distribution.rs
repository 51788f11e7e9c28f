//! Sparse probability distributions over states.

use indexmap::IndexMap;
use kinet_core::State;

use crate::moments::Moments;

/// Probability mass over a sparse set of states.
///
/// Backed by an insertion-ordered map: iteration visits states in the order
/// they first received mass, so any computation that walks a distribution
/// is reproducible bit for bit. Equality compares the mappings and ignores
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Distribution {
    masses: IndexMap<State, f64>,
}

impl Distribution {
    /// All mass at a single state.
    pub fn point(state: State) -> Self {
        let mut masses = IndexMap::with_capacity(1);
        masses.insert(state, 1.0);
        Self { masses }
    }

    pub(crate) fn from_map(masses: IndexMap<State, f64>) -> Self {
        Self { masses }
    }

    /// Number of states carrying mass.
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// `true` if no state carries mass.
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Mass at `state`, or `0.0` if it is not in the support.
    pub fn mass(&self, state: &State) -> f64 {
        self.masses.get(state).copied().unwrap_or(0.0)
    }

    /// `(state, mass)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (State, f64)> + '_ {
        self.masses.iter().map(|(s, m)| (*s, *m))
    }

    /// States carrying mass, in insertion order.
    pub fn support(&self) -> impl Iterator<Item = &State> + '_ {
        self.masses.keys()
    }

    /// Sum of all masses. Equals 1 up to accumulated rounding.
    pub fn total_mass(&self) -> f64 {
        self.masses.values().sum()
    }

    /// Per-species mean and variance.
    pub fn moments(&self) -> Moments {
        Moments::of(self)
    }
}

/// Collects `(state, mass)` pairs, summing the mass of repeated states.
impl FromIterator<(State, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (State, f64)>>(iter: I) -> Self {
        let mut masses = IndexMap::new();
        for (state, mass) in iter {
            *masses.entry(state).or_insert(0.0) += mass;
        }
        Self { masses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_mass() {
        let d = Distribution::point(State::new(9, 8, 7));
        assert_eq!(d.len(), 1);
        assert_eq!(d.mass(&State::new(9, 8, 7)), 1.0);
        assert_eq!(d.mass(&State::new(0, 0, 0)), 0.0);
        assert_eq!(d.total_mass(), 1.0);
    }

    #[test]
    fn collect_merges_repeated_states() {
        let a = State::new(1, 0, 0);
        let b = State::new(0, 1, 0);
        let d: Distribution = [(a, 0.25), (b, 0.5), (a, 0.25)].into_iter().collect();
        assert_eq!(d.len(), 2);
        assert_eq!(d.mass(&a), 0.5);
        assert_eq!(d.total_mass(), 1.0);
    }

    #[test]
    fn iteration_follows_first_insertion() {
        let states = [State::new(3, 0, 0), State::new(1, 0, 0), State::new(2, 0, 0)];
        let d: Distribution = states.iter().map(|&s| (s, 1.0 / 3.0)).collect();
        let order: Vec<State> = d.support().copied().collect();
        assert_eq!(order, states);
    }

    #[test]
    fn equality_ignores_order() {
        let a = State::new(1, 0, 0);
        let b = State::new(0, 1, 0);
        let x: Distribution = [(a, 0.5), (b, 0.5)].into_iter().collect();
        let y: Distribution = [(b, 0.5), (a, 0.5)].into_iter().collect();
        assert_eq!(x, y);
    }

    #[test]
    fn empty_distribution() {
        let d = Distribution::default();
        assert!(d.is_empty());
        assert_eq!(d.total_mass(), 0.0);
    }
}
