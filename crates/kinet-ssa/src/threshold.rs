//! Monitored population thresholds and monotone hit-flags.

use std::fmt;

use kinet_core::{Species, State};

/// One of the three monitored conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// `x1 >= x1_at_least`.
    C1,
    /// `x2 < x2_below`.
    C2,
    /// `x3 > x3_above`.
    C3,
}

impl Condition {
    /// All conditions in index order.
    pub const ALL: [Condition; 3] = [Condition::C1, Condition::C2, Condition::C3];

    /// Position of this condition in a [`HitFlags`] triple.
    pub fn index(self) -> usize {
        match self {
            Condition::C1 => 0,
            Condition::C2 => 1,
            Condition::C3 => 2,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::C1 => write!(f, "C1"),
            Condition::C2 => write!(f, "C2"),
            Condition::C3 => write!(f, "C3"),
        }
    }
}

/// Threshold constants for the three conditions.
///
/// The comparison directions are fixed: C1 is `x1 >= x1_at_least`, C2 is
/// `x2 < x2_below`, C3 is `x3 > x3_above`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    /// C1 holds when `x1 >= x1_at_least`. Default: 150.
    pub x1_at_least: u32,
    /// C2 holds when `x2 < x2_below`. Default: 10.
    pub x2_below: u32,
    /// C3 holds when `x3 > x3_above`. Default: 100.
    pub x3_above: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            x1_at_least: 150,
            x2_below: 10,
            x3_above: 100,
        }
    }
}

impl Thresholds {
    /// Whether `condition` holds at `state`.
    pub fn holds(&self, condition: Condition, state: &State) -> bool {
        match condition {
            Condition::C1 => state.count(Species::X1) >= self.x1_at_least,
            Condition::C2 => state.count(Species::X2) < self.x2_below,
            Condition::C3 => state.count(Species::X3) > self.x3_above,
        }
    }

    /// Human-readable form of `condition`, e.g. `"C1: X1 >= 150"`.
    pub fn describe(&self, condition: Condition) -> String {
        match condition {
            Condition::C1 => format!("C1: X1 >= {}", self.x1_at_least),
            Condition::C2 => format!("C2: X2 < {}", self.x2_below),
            Condition::C3 => format!("C3: X3 > {}", self.x3_above),
        }
    }
}

/// Whether each condition has been satisfied at some point of a trajectory.
///
/// Flags are monotone: [`observe`](HitFlags::observe) can set a flag but
/// never clears one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitFlags([bool; 3]);

impl HitFlags {
    /// All flags clear.
    pub fn none() -> Self {
        Self([false; 3])
    }

    /// Flags as observed at a single state.
    pub fn at(state: &State, thresholds: &Thresholds) -> Self {
        let mut flags = Self::none();
        flags.observe(state, thresholds);
        flags
    }

    /// Set every flag whose condition holds at `state`.
    pub fn observe(&mut self, state: &State, thresholds: &Thresholds) {
        for condition in Condition::ALL {
            if thresholds.holds(condition, state) {
                self.0[condition.index()] = true;
            }
        }
    }

    /// Whether `condition` has been hit.
    pub fn get(&self, condition: Condition) -> bool {
        self.0[condition.index()]
    }

    /// `true` once every condition has been hit.
    pub fn all(&self) -> bool {
        self.0.iter().all(|&hit| hit)
    }

    /// Flags in condition order.
    pub fn as_array(&self) -> [bool; 3] {
        self.0
    }
}
