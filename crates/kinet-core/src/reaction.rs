//! Stoichiometric deltas, reaction descriptors, and propensity vectors.

use crate::state::SPECIES_COUNT;

/// Number of reactions in a network.
pub const REACTION_COUNT: usize = 3;

/// Fixed integer vector added to a [`State`](crate::State) when a reaction fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Delta([i32; SPECIES_COUNT]);

impl Delta {
    /// Create a delta from per-species changes.
    pub const fn new(changes: [i32; SPECIES_COUNT]) -> Self {
        Self(changes)
    }

    /// Per-species changes in species order.
    pub fn changes(&self) -> [i32; SPECIES_COUNT] {
        self.0
    }
}

/// A named reaction and its stoichiometric update.
///
/// The propensity formula lives on the owning
/// [`ReactionNetwork`](crate::ReactionNetwork); a `Reaction` at index `i`
/// pairs with the `i`-th entry of [`Propensities`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reaction {
    /// Human-readable label, e.g. `"2X1 + X2 -> 4X3"`.
    pub name: &'static str,
    /// State change applied when the reaction fires.
    pub delta: Delta,
}

/// Per-reaction propensities for a single state.
///
/// Entries are non-negative and indexed in the same order as
/// [`ReactionNetwork::reactions`](crate::ReactionNetwork::reactions).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Propensities([f64; REACTION_COUNT]);

impl Propensities {
    /// Wrap raw propensity values.
    pub const fn new(values: [f64; REACTION_COUNT]) -> Self {
        Self(values)
    }

    /// Propensity of reaction `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= REACTION_COUNT`.
    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    /// Raw values in reaction order.
    pub fn values(&self) -> [f64; REACTION_COUNT] {
        self.0
    }

    /// Sum of all propensities.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// `true` when no reaction can fire (an absorbing state).
    pub fn is_absorbing(&self) -> bool {
        self.total() == 0.0
    }

    /// Select the reaction whose cumulative-sum interval contains `r`.
    ///
    /// `r` is expected in `[0, total)`. Reaction `i` is chosen when
    /// `a_0 + .. + a_{i-1} <= r < a_0 + .. + a_i`, so the choice is
    /// proportional to propensity. If rounding pushes `r` to or past the
    /// total, the last reaction with positive propensity is returned; a
    /// zero-propensity reaction is never selected. Returns `None` only for
    /// an absorbing state.
    pub fn select(&self, r: f64) -> Option<usize> {
        let mut cumulative = 0.0;
        let mut last_positive = None;
        for (index, &a) in self.0.iter().enumerate() {
            if a <= 0.0 {
                continue;
            }
            cumulative += a;
            if r < cumulative {
                return Some(index);
            }
            last_positive = Some(index);
        }
        last_positive
    }

    /// Iterate `(reaction index, propensity)` pairs with positive propensity.
    pub fn positive(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, a)| a > 0.0)
    }
}
