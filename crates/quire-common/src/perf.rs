//! Performance timing utilities for instrumentation.
//!
//! Measurements leave the process as labeled numeric values: a `tracing`
//! event carrying an `elapsed_ms` field, plus a `metrics` histogram sample.
//! Nothing here installs a metrics recorder; without one the samples are
//! dropped.

use std::sync::OnceLock;
use std::time::Instant;

/// Histogram receiving every `measure`/`TimingGuard` sample, labeled by `label`.
pub const DURATION_METRIC: &str = "quire_duration_ms";

/// Get the current high-resolution timestamp in milliseconds.
///
/// Relative to the first call in this process.
pub fn now() -> f64 {
    static START: OnceLock<Instant> = OnceLock::new();
    let start = START.get_or_init(Instant::now);
    start.elapsed().as_secs_f64() * 1000.0
}

/// Measure the execution time of a closure and log it.
///
/// Returns the closure's result; the elapsed time goes to tracing and to
/// [`DURATION_METRIC`].
pub fn measure<T, F: FnOnce() -> T>(label: &'static str, f: F) -> T {
    let _guard = TimingGuard::new(label);
    f()
}

/// A guard that logs elapsed time when dropped.
///
/// Useful for timing blocks of code without closures.
pub struct TimingGuard {
    label: &'static str,
    start: f64,
}

impl TimingGuard {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: now(),
        }
    }

    /// Milliseconds since the guard was created.
    pub fn elapsed_ms(&self) -> f64 {
        now() - self.start
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        tracing::debug!(elapsed_ms = elapsed, "{}", self.label);
        metrics::histogram!(DURATION_METRIC, "label" => self.label).record(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_monotonic() {
        let a = now();
        let b = now();
        assert!(b >= a);
        assert!(a >= 0.0);
    }

    #[test]
    fn test_measure_returns_result() {
        let value = measure("test", || 40 + 2);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_guard_elapsed_grows() {
        let guard = TimingGuard::new("test");
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(guard.elapsed_ms() >= 2.0);
    }
}
