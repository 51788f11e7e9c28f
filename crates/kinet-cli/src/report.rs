//! Plain-text rendering of estimation and propagation results.

use std::fmt::Write;

use kinet_cme::Propagation;
use kinet_core::{Species, State};
use kinet_ssa::{Condition, HitProbabilities, Thresholds};

/// Line printed before a sampling run starts.
pub fn sampling_preamble(n_simulations: u64, initial_state: &State) -> String {
    format!("Running {n_simulations} simulations starting from {initial_state}...")
}

/// Hitting probabilities, one line per condition with 4 decimals and a
/// 2-decimal percentage.
///
/// ```text
/// --- Estimated Probabilities (200 Iterations) ---
/// Pr(C1: X1 >= 150) = 0.1234  (12.34%)
/// Pr(C2: X2 < 10)   = 0.0000  (0.00%)
/// Pr(C3: X3 > 100)  = 0.5000  (50.00%)
/// ```
pub fn sampling_report(estimate: &HitProbabilities, thresholds: &Thresholds) -> String {
    let labels = Condition::ALL.map(|c| format!("Pr({})", thresholds.describe(c)));
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = format!(
        "--- Estimated Probabilities ({} Iterations) ---\n",
        estimate.runs()
    );
    for (condition, label) in Condition::ALL.into_iter().zip(&labels) {
        let p = estimate.probability(condition);
        let _ = writeln!(out, "{label:<width$} = {p:.4}  ({:.2}%)", p * 100.0);
    }
    out
}

/// Support size after the final step, then per-species mean and variance
/// with 6 decimals.
pub fn exact_report(propagation: &Propagation) -> String {
    let moments = propagation.distribution.moments();
    let mut out = format!(
        "Exact Distribution after {} Reaction Firings:\n",
        propagation.steps
    );
    let _ = writeln!(
        out,
        "Number of unique states: {}\n",
        propagation.distribution.len()
    );
    out.push_str("Final Expected Values and Variances:\n");
    for species in Species::ALL {
        let _ = writeln!(out, "{species}:");
        let _ = writeln!(out, "  Mean     = {:.6}", moments.mean_of(species));
        let _ = writeln!(out, "  Variance = {:.6}\n", moments.variance_of(species));
    }
    out
}
