//! Projection results
//!
//! Output types produced by running a scenario: the per-day series, the
//! aggregate summary, the comparison against an unmodified baseline run and
//! the heuristic confidence band.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Share of total revenue attributed to existing users
pub const EXISTING_USER_REVENUE_SHARE: f64 = 0.60;
/// Share of total revenue attributed to newly acquired users
pub const NEW_USER_REVENUE_SHARE: f64 = 0.35;
/// Share of total revenue attributed to reactivated users
pub const REACTIVATED_USER_REVENUE_SHARE: f64 = 0.05;

/// One simulated day. Counts are rounded to whole users, revenue to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedDay {
    pub day: u32,
    /// Calendar date, present when the scenario has a start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    pub dau: u64,
    pub revenue: f64,
    pub new_users: u64,
    pub returning_users: u64,
    pub paying_users: u64,
    pub sessions: u64,
    /// Total minutes played across all sessions
    pub play_minutes: f64,
}

/// Aggregates over the whole projection horizon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub total_revenue: f64,
    pub avg_daily_revenue: f64,
    pub peak_daily_revenue: f64,
    pub total_dau: f64,
    pub avg_dau: f64,
    pub peak_dau: f64,
    /// Retention-weighted ARPU over the horizon
    pub projected_ltv: f64,
    pub total_sessions: f64,
    /// Modified average session length in minutes
    pub avg_session_length: f64,
}

/// Difference between a scenario and the unmodified baseline run.
///
/// Percent fields are expressed in percent (`12.5` = +12.5%) and are 0
/// whenever the baseline value is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioImpact {
    pub revenue_change: f64,
    pub revenue_change_percent: f64,
    pub dau_change: f64,
    pub dau_change_percent: f64,
    pub ltv_change: f64,
    pub ltv_change_percent: f64,
}

impl ScenarioImpact {
    pub fn between(scenario: &ScenarioSummary, baseline: &ScenarioSummary) -> Self {
        Self {
            revenue_change: scenario.total_revenue - baseline.total_revenue,
            revenue_change_percent: percent_change(scenario.total_revenue, baseline.total_revenue),
            dau_change: scenario.avg_dau - baseline.avg_dau,
            dau_change_percent: percent_change(scenario.avg_dau, baseline.avg_dau),
            ltv_change: scenario.projected_ltv - baseline.projected_ltv,
            ltv_change_percent: percent_change(scenario.projected_ltv, baseline.projected_ltv),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Heuristic spread around total revenue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
    /// Confidence level in `[0.5, 1.0]`
    pub level: f64,
}

/// Fixed-proportion attribution of total revenue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdown {
    pub from_existing_users: f64,
    pub from_new_users: f64,
    pub from_reactivated: f64,
}

impl RevenueBreakdown {
    pub fn from_total(total_revenue: f64) -> Self {
        Self {
            from_existing_users: total_revenue * EXISTING_USER_REVENUE_SHARE,
            from_new_users: total_revenue * NEW_USER_REVENUE_SHARE,
            from_reactivated: total_revenue * REACTIVATED_USER_REVENUE_SHARE,
        }
    }
}

/// Complete result of simulating one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub name: String,
    pub horizon_days: u32,
    pub days: Vec<ProjectedDay>,
    pub summary: ScenarioSummary,
    pub impact: ScenarioImpact,
    pub confidence: ConfidenceInterval,
    pub revenue_breakdown: RevenueBreakdown,
}

impl ScenarioResult {
    pub fn final_day(&self) -> Option<&ProjectedDay> {
        self.days.last()
    }

    /// Rounded revenue series, one value per day
    pub fn revenue_series(&self) -> Vec<f64> {
        self.days.iter().map(|day| day.revenue).collect()
    }

    /// Rounded DAU series, one value per day
    pub fn dau_series(&self) -> Vec<u64> {
        self.days.iter().map(|day| day.dau).collect()
    }
}

/// Signed relative change in percent, 0 when `base` is 0
pub fn percent_change(value: f64, base: f64) -> f64 {
    if base == 0.0 {
        0.0
    } else {
        (value - base) / base * 100.0
    }
}
