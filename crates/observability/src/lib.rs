//! Tracing setup shared by binaries, tests and benches that use `multierr`.
//!
//! The library itself only emits events; installing a subscriber is left to
//! whoever owns the process.

/// Initialize process-wide tracing with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize tracing for a test binary.
///
/// Output goes through the test harness capture, so it only shows for
/// failing tests. Safe to call from every test.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Subscriber construction and filter resolution.
pub mod tracing;
