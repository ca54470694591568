//! Diagnostic tracing to stderr
//!
//! Frames go to stdout; everything logged here goes to stderr so the two
//! never interleave on a redirected run.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber
///
/// Reads `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Returns `false` if a
/// subscriber was already installed, in which case the existing one is kept.
///
/// ```bash
/// RUST_LOG=lifegrid=debug lifegrid --update-rate 0.5 --seed 7
/// ```
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .is_ok()
}
