//! The [`ReactionNetwork`] trait and the fixed three-reaction [`TriadNetwork`].
//!
//! Both engines consume a network through this trait, so the propensity
//! formulas and stoichiometry exist in exactly one place.

use crate::reaction::{Delta, Propensities, Reaction, REACTION_COUNT};
use crate::state::{Species, State};

/// A stochastic reaction network over three species.
///
/// # Contract
///
/// - `propensities()` MUST be a pure function of the state: same state,
///   bit-identical output.
/// - Every entry MUST be non-negative.
/// - A strictly positive entry `i` implies that applying
///   `reactions()[i].delta` to the state leaves every count non-negative.
///   The engines report a [`ReactionError`](crate::ReactionError) if a
///   network breaks this.
/// - The order of `reactions()` matches the order of the propensity vector.
///   Reaction selection relies on this positional correspondence.
pub trait ReactionNetwork: Send + Sync {
    /// Reactions in propensity order.
    fn reactions(&self) -> &[Reaction; REACTION_COUNT];

    /// Propensity of every reaction at `state`.
    fn propensities(&self, state: &State) -> Propensities;

    /// Stoichiometric update of reaction `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= REACTION_COUNT`.
    fn delta(&self, index: usize) -> &Delta {
        &self.reactions()[index].delta
    }
}

impl<N: ReactionNetwork + ?Sized> ReactionNetwork for &N {
    fn reactions(&self) -> &[Reaction; REACTION_COUNT] {
        (**self).reactions()
    }

    fn propensities(&self, state: &State) -> Propensities {
        (**self).propensities(state)
    }
}

const TRIAD_REACTIONS: [Reaction; REACTION_COUNT] = [
    Reaction {
        name: "2X1 + X2 -> 4X3",
        delta: Delta::new([-2, -1, 4]),
    },
    Reaction {
        name: "X1 + 2X3 -> 3X2",
        delta: Delta::new([-1, 3, -2]),
    },
    Reaction {
        name: "X2 + X3 -> 2X1",
        delta: Delta::new([2, -1, -1]),
    },
];

/// The three-species, three-reaction network.
///
/// | Reaction | Delta | Propensity |
/// |----------|-------|------------|
/// | R1: `2X1 + X2 -> 4X3` | `(-2, -1, +4)` | `0.5 * x1 * (x1 - 1) * x2` |
/// | R2: `X1 + 2X3 -> 3X2` | `(-1, +3, -2)` | `x1 * x3 * (x3 - 1)` |
/// | R3: `X2 + X3 -> 2X1`  | `(+2, -1, -1)` | `3 * x2 * x3` |
///
/// The combinatorial factors already vanish when a reactant count is too
/// small; the explicit reactant checks below only short-circuit and return
/// the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriadNetwork;

impl TriadNetwork {
    /// Create the network.
    pub const fn new() -> Self {
        TriadNetwork
    }
}

impl ReactionNetwork for TriadNetwork {
    fn reactions(&self) -> &[Reaction; REACTION_COUNT] {
        &TRIAD_REACTIONS
    }

    fn propensities(&self, state: &State) -> Propensities {
        let n1 = state.count(Species::X1);
        let n2 = state.count(Species::X2);
        let n3 = state.count(Species::X3);
        let (x1, x2, x3) = (f64::from(n1), f64::from(n2), f64::from(n3));

        let a1 = if n1 >= 2 && n2 >= 1 {
            0.5 * x1 * (x1 - 1.0) * x2
        } else {
            0.0
        };
        let a2 = if n1 >= 1 && n3 >= 2 {
            x1 * x3 * (x3 - 1.0)
        } else {
            0.0
        };
        let a3 = if n2 >= 1 && n3 >= 1 {
            3.0 * x2 * x3
        } else {
            0.0
        };

        Propensities::new([a1, a2, a3])
    }
}
