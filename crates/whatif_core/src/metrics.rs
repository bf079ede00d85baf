//! Projection metrics collection
//!
//! Lightweight instrumentation for a single projection run, useful when
//! profiling long horizons or checking how often inputs had to be clamped.

use serde::{Deserialize, Serialize};

/// Metrics collected while projecting one scenario
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMetrics {
    /// Days advanced by the cohort loop
    pub days_simulated: u64,
    /// Cohort-by-day retention lookups performed
    pub cohort_evaluations: u64,
    /// Day on which DAU peaked
    pub peak_dau_day: u32,
    /// Day on which daily revenue peaked
    pub peak_revenue_day: u32,
    /// Modified inputs that were pulled back into their valid range
    pub clamps_applied: u32,
}

impl ProjectionMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_day(&mut self, cohorts_evaluated: usize) {
        self.days_simulated += 1;
        self.cohort_evaluations += cohorts_evaluated as u64;
    }

    pub fn record_clamps(&mut self, clamps: u32) {
        self.clamps_applied += clamps;
    }

    /// Average cohorts evaluated per simulated day
    #[must_use]
    pub fn avg_cohorts_per_day(&self) -> f64 {
        if self.days_simulated == 0 {
            0.0
        } else {
            self.cohort_evaluations as f64 / self.days_simulated as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_basic() {
        let mut metrics = ProjectionMetrics::new();
        assert_eq!(metrics.avg_cohorts_per_day(), 0.0);

        metrics.record_day(0);
        metrics.record_day(1);
        metrics.record_day(2);
        metrics.record_clamps(2);

        assert_eq!(metrics.days_simulated, 3);
        assert_eq!(metrics.cohort_evaluations, 3);
        assert_eq!(metrics.avg_cohorts_per_day(), 1.0);
        assert_eq!(metrics.clamps_applied, 2);
    }
}
