//! Estimate the probability that the reaction network ever crosses each
//! monitored threshold, by Gillespie simulation.
//!
//! ```bash
//! kinet-sample 110 26 55 --simulations 200 --seed 42
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use kinet_cli::args::SampleArgs;
use kinet_cli::{init_tracing, report};
use kinet_core::TriadNetwork;
use kinet_ssa::MonteCarloEstimator;

fn main() -> Result<()> {
    init_tracing();

    let config = SampleArgs::parse()
        .into_config()
        .context("invalid sampling configuration")?;
    let thresholds = config.thresholds;

    println!(
        "{}\n",
        report::sampling_preamble(config.n_simulations, &config.initial_state)
    );

    let estimate = MonteCarloEstimator::new(TriadNetwork, config)?.estimate()?;
    let counts = estimate.counts();
    tracing::debug!(
        absorbed = counts.absorbed,
        all_hit = counts.all_hit,
        budget_exhausted = counts.budget_exhausted,
        "halt reasons"
    );

    print!("{}", report::sampling_report(&estimate, &thresholds));
    Ok(())
}
