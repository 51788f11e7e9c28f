//! Shared plumbing for the `kinet-sample` and `kinet-exact` binaries.
//!
//! Argument structs convert raw (signed) command-line values into validated
//! engine configurations, and [`report`] renders results as plain text.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod report;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// Honors `RUST_LOG`; defaults to `warn` so stdout carries only the report.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
