//! Resolution metrics and observability module.
//!
//! Counts how often the resolver runs, how often a language override
//! contributed text, and how often an unknown code fell back to the base
//! record. Counters never influence what the resolver returns.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global resolution metrics singleton.
pub struct ResolutionMetrics {
    /// Number of records resolved
    resolutions: AtomicUsize,

    /// Number of resolutions where at least one field came from an override
    override_hits: AtomicUsize,

    /// Number of free-form codes that matched no supported language
    unknown_codes: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<ResolutionMetrics> = OnceLock::new();

impl ResolutionMetrics {
    /// Get the global resolution metrics instance.
    pub fn global() -> &'static ResolutionMetrics {
        METRICS.get_or_init(ResolutionMetrics::new)
    }

    fn new() -> Self {
        Self {
            resolutions: AtomicUsize::new(0),
            override_hits: AtomicUsize::new(0),
            unknown_codes: AtomicUsize::new(0),
        }
    }

    /// Record one resolution and whether any override field was used.
    pub fn record_resolution(&self, used_override: bool) {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
        if used_override {
            self.override_hits.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record an unknown language code that fell back to the base record.
    pub fn record_unknown_code(&self) {
        self.unknown_codes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Relaxed)
    }

    pub fn override_hits(&self) -> usize {
        self.override_hits.load(Ordering::Relaxed)
    }

    pub fn unknown_codes(&self) -> usize {
        self.unknown_codes.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolutions = self.resolutions();
        let override_hits = self.override_hits();
        let override_hit_rate = if resolutions > 0 {
            (override_hits as f64 / resolutions as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            resolutions,
            override_hits,
            override_hit_rate,
            unknown_codes: self.unknown_codes(),
        }
    }
}

/// Snapshot of the resolution counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub resolutions: usize,
    pub override_hits: usize,

    /// Percentage of resolutions that used at least one override field
    pub override_hit_rate: f64,

    pub unknown_codes: usize,
}

impl MetricsReport {
    /// One-line summary suitable for logging.
    pub fn summary(&self) -> String {
        format!(
            "Resolutions: {} | Override hit rate: {:.1}% | Unknown codes: {}",
            self.resolutions, self.override_hit_rate, self.unknown_codes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests use private instances so they don't race with the global one.

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = ResolutionMetrics::new();
        assert_eq!(metrics.resolutions(), 0);
        assert_eq!(metrics.override_hits(), 0);
        assert_eq!(metrics.unknown_codes(), 0);
    }

    #[test]
    fn test_record_resolution() {
        let metrics = ResolutionMetrics::new();
        metrics.record_resolution(true);
        metrics.record_resolution(false);
        metrics.record_resolution(true);

        assert_eq!(metrics.resolutions(), 3);
        assert_eq!(metrics.override_hits(), 2);
    }

    #[test]
    fn test_record_unknown_code() {
        let metrics = ResolutionMetrics::new();
        metrics.record_unknown_code();
        metrics.record_unknown_code();
        assert_eq!(metrics.unknown_codes(), 2);
    }

    #[test]
    fn test_report_hit_rate() {
        let metrics = ResolutionMetrics::new();
        metrics.record_resolution(true);
        metrics.record_resolution(true);
        metrics.record_resolution(true);
        metrics.record_resolution(false);

        let report = metrics.report();
        assert_eq!(report.resolutions, 4);
        assert_eq!(report.override_hits, 3);
        assert!((report.override_hit_rate - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_report_with_no_resolutions() {
        let report = ResolutionMetrics::new().report();
        assert_eq!(report.override_hit_rate, 0.0);
    }

    #[test]
    fn test_report_summary() {
        let metrics = ResolutionMetrics::new();
        metrics.record_resolution(true);
        metrics.record_resolution(false);
        metrics.record_unknown_code();

        let summary = metrics.report().summary();
        assert!(summary.contains("Resolutions: 2"));
        assert!(summary.contains("50.0%"));
        assert!(summary.contains("Unknown codes: 1"));
    }

    #[test]
    fn test_global_returns_singleton() {
        assert!(std::ptr::eq(
            ResolutionMetrics::global(),
            ResolutionMetrics::global()
        ));
    }
}
