//! Tracing setup for the cleanse binary.
//!
//! Results go to stdout, so log lines are written to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber
///
/// `default_level` applies unless `RUST_LOG` is set. Calling this twice is a
/// no-op.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init("debug");
        init("warn");
        tracing::debug!("subscriber already installed");
    }
}
