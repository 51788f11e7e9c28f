//! Molecule-count states and species indices.

use std::fmt;

use crate::error::{ConfigError, ReactionError};
use crate::reaction::Delta;

/// Number of chemical species tracked by a [`State`].
pub const SPECIES_COUNT: usize = 3;

/// One of the three chemical species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    /// Species `X1`.
    X1,
    /// Species `X2`.
    X2,
    /// Species `X3`.
    X3,
}

impl Species {
    /// All species in index order.
    pub const ALL: [Species; SPECIES_COUNT] = [Species::X1, Species::X2, Species::X3];

    /// Position of this species in a [`State`] or [`Delta`].
    pub fn index(self) -> usize {
        match self {
            Species::X1 => 0,
            Species::X2 => 1,
            Species::X3 => 2,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::X1 => write!(f, "X1"),
            Species::X2 => write!(f, "X2"),
            Species::X3 => write!(f, "X3"),
        }
    }
}

/// Molecule counts `(x1, x2, x3)` of the three species.
///
/// An immutable value type: equality and hashing are by value, so a
/// `State` can key the sparse probability mapping of the exact propagator.
/// Counts are unsigned, so a negative population is unrepresentable; signed
/// input goes through [`State::from_signed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State([u32; SPECIES_COUNT]);

impl State {
    /// Create a state from the three molecule counts.
    pub const fn new(x1: u32, x2: u32, x3: u32) -> Self {
        Self([x1, x2, x3])
    }

    /// Validate signed counts from an untrusted source (e.g. the command line).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeCount`] for the first negative
    /// component, or [`ConfigError::CountOverflow`] if a count exceeds
    /// `u32::MAX`.
    pub fn from_signed(counts: [i64; SPECIES_COUNT]) -> Result<Self, ConfigError> {
        let mut out = [0u32; SPECIES_COUNT];
        for ((species, value), slot) in Species::ALL.into_iter().zip(counts).zip(out.iter_mut()) {
            if value < 0 {
                return Err(ConfigError::NegativeCount { species, value });
            }
            *slot = u32::try_from(value)
                .map_err(|_| ConfigError::CountOverflow { species, value })?;
        }
        Ok(Self(out))
    }

    /// Count of a single species.
    pub fn count(&self, species: Species) -> u32 {
        self.0[species.index()]
    }

    /// All three counts in species order.
    pub fn counts(&self) -> [u32; SPECIES_COUNT] {
        self.0
    }

    /// Apply a stoichiometric update, component-wise.
    ///
    /// `reaction` is only used to label the error.
    ///
    /// # Errors
    ///
    /// Returns [`ReactionError::Underflow`] if any component would become
    /// negative, or [`ReactionError::Overflow`] if one would exceed
    /// `u32::MAX`.
    pub fn apply(&self, delta: &Delta, reaction: usize) -> Result<State, ReactionError> {
        let mut out = self.0;
        for (count, change) in out.iter_mut().zip(delta.changes()) {
            let next = i64::from(*count) + i64::from(change);
            if next < 0 {
                return Err(ReactionError::Underflow {
                    reaction,
                    state: *self,
                });
            }
            *count = u32::try_from(next).map_err(|_| ReactionError::Overflow {
                reaction,
                state: *self,
            })?;
        }
        Ok(State(out))
    }
}

impl From<[u32; SPECIES_COUNT]> for State {
    fn from(counts: [u32; SPECIES_COUNT]) -> Self {
        Self(counts)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn species_indices_follow_declaration_order() {
        let indices: Vec<usize> = Species::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn count_reads_each_component() {
        let s = State::new(9, 8, 7);
        assert_eq!(s.count(Species::X1), 9);
        assert_eq!(s.count(Species::X2), 8);
        assert_eq!(s.count(Species::X3), 7);
        assert_eq!(s.counts(), [9, 8, 7]);
    }

    #[test]
    fn equal_states_hash_equal() {
        let mut set = HashSet::new();
        set.insert(State::new(1, 2, 3));
        set.insert(State::from([1, 2, 3]));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn display_is_tuple_like() {
        assert_eq!(State::new(110, 26, 55).to_string(), "(110, 26, 55)");
    }

    // ── Signed input ────────────────────────────────────────────

    #[test]
    fn from_signed_accepts_non_negative() {
        assert_eq!(State::from_signed([9, 8, 7]).unwrap(), State::new(9, 8, 7));
        assert_eq!(State::from_signed([0, 0, 0]).unwrap(), State::default());
    }

    #[test]
    fn from_signed_rejects_negative_component() {
        let err = State::from_signed([1, -4, 2]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NegativeCount {
                species: Species::X2,
                value: -4
            }
        );
    }

    #[test]
    fn from_signed_rejects_oversized_component() {
        let big = i64::from(u32::MAX) + 1;
        let err = State::from_signed([0, 0, big]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::CountOverflow {
                species: Species::X3,
                ..
            }
        ));
    }

    // ── Updates ─────────────────────────────────────────────────

    #[test]
    fn apply_adds_componentwise() {
        let s = State::new(9, 8, 7);
        let next = s.apply(&Delta::new([-2, -1, 4]), 0).unwrap();
        assert_eq!(next, State::new(7, 7, 11));
    }

    #[test]
    fn apply_reports_underflow() {
        let s = State::new(1, 8, 7);
        let err = s.apply(&Delta::new([-2, -1, 4]), 0).unwrap_err();
        assert_eq!(
            err,
            ReactionError::Underflow {
                reaction: 0,
                state: s
            }
        );
    }

    #[test]
    fn apply_reports_overflow() {
        let s = State::new(u32::MAX, 0, 0);
        let err = s.apply(&Delta::new([1, 0, 0]), 2).unwrap_err();
        assert!(matches!(err, ReactionError::Overflow { reaction: 2, .. }));
    }

    #[test]
    fn apply_leaves_original_untouched() {
        let s = State::new(9, 8, 7);
        let _ = s.apply(&Delta::new([2, -1, -1]), 2).unwrap();
        assert_eq!(s, State::new(9, 8, 7));
    }
}
