//! Retention curve model
//!
//! Expands the three retention anchors (day 1, day 7, day 30) into a
//! per-day sequence of survival multipliers:
//! - before the first anchor: linear from 1.0 down to the day-1 rate
//! - between anchors: log-linear interpolation
//! - past the last anchor: exponential decay at the rate implied by day 30
//!
//! Every value is clamped into `[0, 1]` and `curve[0]` is always 1.0.

use serde::{Deserialize, Serialize};

use crate::model::RetentionRates;

/// Floor applied to an anchor before taking its logarithm, so a zero or
/// negative anchor yields a vanishing tail instead of NaN.
pub const MIN_RETENTION_RATE: f64 = 1e-9;

/// Day-indexed retention multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionCurve {
    rates: Vec<f64>,
}

impl RetentionCurve {
    /// Build a curve covering days `0..horizon_days`
    pub fn build(retention: &RetentionRates, horizon_days: u32) -> Self {
        let anchors = retention.anchors();
        if anchors.iter().any(|(_, rate)| *rate < MIN_RETENTION_RATE) {
            tracing::warn!(
                d1 = retention.d1,
                d7 = retention.d7,
                d30 = retention.d30,
                "retention anchor below minimum rate, tail will vanish"
            );
        }
        let rates = (0..horizon_days)
            .map(|day| {
                if day == 0 {
                    1.0
                } else {
                    rate_at(&anchors, day).clamp(0.0, 1.0)
                }
            })
            .collect();
        Self { rates }
    }

    /// Multiplier for users acquired `age` days ago, 0 beyond the curve
    #[inline]
    pub fn at(&self, age: usize) -> f64 {
        self.rates.get(age).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.rates
    }

    /// Expected active days per acquired user over the curve
    pub fn total(&self) -> f64 {
        self.rates.iter().sum()
    }
}

fn rate_at(anchors: &[(u32, f64); 3], day: u32) -> f64 {
    let (prev, next) = bracket(anchors, day);
    let d = f64::from(day);

    if day <= prev.0 {
        // Linear ramp from 1.0 on day 0 to the first anchor
        1.0 - (1.0 - prev.1) * (d / f64::from(prev.0))
    } else if day >= next.0 {
        let decay = safe_ln(next.1) / f64::from(next.0);
        (decay * d).exp()
    } else {
        let t = (d - f64::from(prev.0)) / f64::from(next.0 - prev.0);
        let log_prev = safe_ln(prev.1);
        let log_next = safe_ln(next.1);
        (log_prev + (log_next - log_prev) * t).exp()
    }
}

/// Pick the anchor pair whose day range contains `day`, falling back to the
/// first pair before day 1 and the last pair after day 30.
fn bracket(anchors: &[(u32, f64); 3], day: u32) -> ((u32, f64), (u32, f64)) {
    anchors
        .windows(2)
        .find(|pair| pair[0].0 <= day && day <= pair[1].0)
        .map(|pair| (pair[0], pair[1]))
        .unwrap_or_else(|| {
            if day < anchors[0].0 {
                (anchors[0], anchors[1])
            } else {
                (anchors[1], anchors[2])
            }
        })
}

fn safe_ln(rate: f64) -> f64 {
    rate.max(MIN_RETENTION_RATE).ln()
}
