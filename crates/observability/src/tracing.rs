//! Subscriber construction.
//!
//! Filtering is configured through `RUST_LOG`; each entry point has its own
//! fallback level when the variable is unset or invalid.

use tracing_subscriber::EnvFilter;

/// Level used by [`init`] when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Level used by [`init_for_tests`] when `RUST_LOG` is not set.
///
/// `multierr` reports similarity mismatches at `trace`.
pub const TEST_FILTER: &str = "multierr=trace";

/// Resolve the filter from `RUST_LOG`, falling back to `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// JSON logs with timestamps. Subsequent calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Human-readable logs routed through the test writer.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(TEST_FILTER))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialisation_is_harmless() {
        init_for_tests();
        init_for_tests();
        init();
        ::tracing::info!("still logging");
    }

    #[test]
    fn fallback_directives_parse() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
        assert!(TEST_FILTER.parse::<EnvFilter>().is_ok());
    }
}
