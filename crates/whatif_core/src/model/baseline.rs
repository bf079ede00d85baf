//! Baseline game metrics
//!
//! The steady-state aggregate values a scenario starts from. A plain value
//! bag with no identity; every projection reads it and nothing mutates it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Retention anchors: probability that a user acquired on day 0 is still
/// active on day 1, day 7 and day 30.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RetentionRates {
    pub d1: f64,
    pub d7: f64,
    pub d30: f64,
}

impl RetentionRates {
    pub fn new(d1: f64, d7: f64, d30: f64) -> Self {
        Self { d1, d7, d30 }
    }

    /// Anchors as `(day, rate)` pairs in ascending day order
    pub fn anchors(&self) -> [(u32, f64); 3] {
        [(1, self.d1), (7, self.d7), (30, self.d30)]
    }

    /// Scale every anchor by `factor`, keeping each inside `[0, 1]`.
    ///
    /// Returns the scaled rates and how many anchors had to be clamped.
    pub fn scaled(&self, factor: f64) -> (Self, u32) {
        let mut clamps = 0;
        let mut scale = |rate: f64| {
            let (value, clamped) = clamp_probability(rate * factor);
            clamps += u32::from(clamped);
            value
        };
        let scaled = Self {
            d1: scale(self.d1),
            d7: scale(self.d7),
            d30: scale(self.d30),
        };
        (scaled, clamps)
    }
}

/// Aggregate baseline metrics for a game
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaselineMetrics {
    /// Daily active users
    pub dau: f64,
    /// Monthly active users
    pub mau: f64,
    pub retention: RetentionRates,
    /// Average revenue per (active) user
    pub arpu: f64,
    /// Average revenue per paying user
    pub arppu: f64,
    /// Fraction of active users that pay on a given day
    pub conversion_rate: f64,
    pub avg_revenue_per_purchase: f64,
    /// Average session length in minutes
    pub avg_session_length: f64,
    /// Sessions per active user per day
    pub sessions_per_user: f64,
}

impl BaselineMetrics {
    /// Reject NaN and infinite fields. Out-of-range but finite values are
    /// accepted and clamped during projection.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("dau", self.dau),
            ("mau", self.mau),
            ("retention.d1", self.retention.d1),
            ("retention.d7", self.retention.d7),
            ("retention.d30", self.retention.d30),
            ("arpu", self.arpu),
            ("arppu", self.arppu),
            ("conversionRate", self.conversion_rate),
            ("avgRevenuePerPurchase", self.avg_revenue_per_purchase),
            ("avgSessionLength", self.avg_session_length),
            ("sessionsPerUser", self.sessions_per_user),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, _)) => Err(SimulationError::NonFiniteBaseline(name)),
            None => Ok(()),
        }
    }

    /// DAU/MAU ratio, 0 when MAU is unknown
    pub fn stickiness(&self) -> f64 {
        if self.mau > 0.0 { self.dau / self.mau } else { 0.0 }
    }
}

/// Clamp a probability into `[0, 1]`, reporting whether it moved
pub(crate) fn clamp_probability(rate: f64) -> (f64, bool) {
    let clamped = rate.clamp(0.0, 1.0);
    (clamped, clamped != rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_retention_clamps_both_ends() {
        let rates = RetentionRates::new(0.8, 0.4, 0.1);

        let (up, clamps) = rates.scaled(1.5);
        assert_eq!(up.d1, 1.0);
        assert!((up.d7 - 0.6).abs() < 1e-12);
        assert_eq!(clamps, 1);

        let (down, clamps) = rates.scaled(-1.0);
        assert_eq!(down, RetentionRates::new(0.0, 0.0, 0.0));
        assert_eq!(clamps, 3);
    }

    #[test]
    fn test_validate_names_offending_field() {
        let baseline = BaselineMetrics {
            arppu: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            baseline.validate(),
            Err(SimulationError::NonFiniteBaseline("arppu"))
        );
        assert!(BaselineMetrics::default().validate().is_ok());
    }

    #[test]
    fn test_partial_payload_uses_defaults() {
        let json = r#"{"dau": 5000, "retention": {"d1": 0.4, "d7": 0.2, "d30": 0.1}, "conversionRate": 0.02}"#;
        let baseline: BaselineMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(baseline.dau, 5000.0);
        assert_eq!(baseline.conversion_rate, 0.02);
        assert_eq!(baseline.mau, 0.0);
        assert_eq!(baseline.stickiness(), 0.0);
    }
}
