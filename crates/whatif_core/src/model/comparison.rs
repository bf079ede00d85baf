//! Side-by-side comparison of two scenario results

use std::fmt;

use serde::{Deserialize, Serialize};

use super::results::{ScenarioResult, ScenarioSummary, percent_change};

/// Revenue change (percent) above which a change is a strong positive
pub const STRONG_POSITIVE_THRESHOLD: f64 = 10.0;
/// Revenue change (percent) above which a change is a moderate positive
pub const MODERATE_POSITIVE_THRESHOLD: f64 = 5.0;
/// Revenue change (percent) above which a change is a slight positive
pub const SLIGHT_POSITIVE_THRESHOLD: f64 = 0.0;
/// Revenue change (percent) above which a change is treated as neutral
pub const NEUTRAL_THRESHOLD: f64 = -5.0;

/// Differences in the three headline metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    pub total_revenue: f64,
    pub avg_dau: f64,
    pub projected_ltv: f64,
}

impl MetricDelta {
    pub fn absolute(modified: &ScenarioSummary, baseline: &ScenarioSummary) -> Self {
        Self {
            total_revenue: modified.total_revenue - baseline.total_revenue,
            avg_dau: modified.avg_dau - baseline.avg_dau,
            projected_ltv: modified.projected_ltv - baseline.projected_ltv,
        }
    }

    pub fn percent(modified: &ScenarioSummary, baseline: &ScenarioSummary) -> Self {
        Self {
            total_revenue: percent_change(modified.total_revenue, baseline.total_revenue),
            avg_dau: percent_change(modified.avg_dau, baseline.avg_dau),
            projected_ltv: percent_change(modified.projected_ltv, baseline.projected_ltv),
        }
    }
}

/// Discrete verdict bucketed on revenue percent change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    StrongPositive,
    ModeratePositive,
    SlightPositive,
    Neutral,
    SignificantNegative,
}

impl Recommendation {
    pub fn from_revenue_change_percent(percent: f64) -> Self {
        if percent > STRONG_POSITIVE_THRESHOLD {
            Recommendation::StrongPositive
        } else if percent > MODERATE_POSITIVE_THRESHOLD {
            Recommendation::ModeratePositive
        } else if percent > SLIGHT_POSITIVE_THRESHOLD {
            Recommendation::SlightPositive
        } else if percent > NEUTRAL_THRESHOLD {
            Recommendation::Neutral
        } else {
            Recommendation::SignificantNegative
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Recommendation::StrongPositive => {
                "Strong positive impact. This change is highly recommended."
            }
            Recommendation::ModeratePositive => {
                "Moderate positive impact. Consider implementing this change."
            }
            Recommendation::SlightPositive => {
                "Slight positive impact. May be worth testing further."
            }
            Recommendation::Neutral => {
                "Neutral or slightly negative impact. Proceed with caution."
            }
            Recommendation::SignificantNegative => {
                "Significant negative impact. Not recommended."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of comparing a modified scenario against a baseline scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub baseline: ScenarioResult,
    pub modified: ScenarioResult,
    pub difference: MetricDelta,
    pub percent_change: MetricDelta,
    pub recommendation: Recommendation,
}
