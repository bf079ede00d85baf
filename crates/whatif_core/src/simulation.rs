//! Cohort-based projection of daily active users and revenue.
//!
//! Each day a new cohort of users is acquired. A cohort acquired on day `c`
//! contributes `size * curve[d - c]` active users on day `d`, so DAU is the
//! new cohort plus the retained remainder of every earlier one. Revenue is
//! driven by paying users (DAU x conversion) at the modified ARPPU.
//!
//! `simulate` projects the scenario as given and once more with every
//! modification removed, and reports the difference as `impact`.

use jiff::ToSpan;
use jiff::civil::Date;

use crate::config::ScenarioInput;
use crate::error::Result;
use crate::metrics::ProjectionMetrics;
use crate::model::{
    BaselineMetrics, ConfidenceInterval, ModifiableVariable, ProjectedDay, RetentionRates,
    RevenueBreakdown, ScenarioImpact, ScenarioModification, ScenarioResult, ScenarioSummary,
    clamp_probability,
};
use crate::retention::RetentionCurve;

/// Lowest confidence level reported, however large the modifications
pub const CONFIDENCE_FLOOR: f64 = 0.5;
/// Confidence lost per unit of mean modification magnitude
pub const CONFIDENCE_PER_MAGNITUDE: f64 = 0.3;
/// Fraction of lost confidence applied on each side of total revenue
pub const CONFIDENCE_SPREAD: f64 = 0.5;

/// Baseline metrics after modifications, clamped to their valid ranges
#[derive(Debug, Clone, PartialEq)]
pub struct ModifiedMetrics {
    pub retention: RetentionRates,
    pub arpu: f64,
    pub arppu: f64,
    pub conversion_rate: f64,
    pub session_length: f64,
    pub sessions_per_user: f64,
    /// Number of values pulled back into range
    pub clamps: u32,
}

impl ModifiedMetrics {
    pub fn apply(baseline: &BaselineMetrics, modification: &ScenarioModification) -> Self {
        let factor = |variable: ModifiableVariable| 1.0 + modification.delta(variable);
        let mut clamps = 0;
        let mut non_negative = |value: f64| {
            if value < 0.0 {
                clamps += 1;
                0.0
            } else {
                value
            }
        };

        let arpu = non_negative(baseline.arpu * factor(ModifiableVariable::ArpuChange));
        let arppu = non_negative(baseline.arppu * factor(ModifiableVariable::ArppuChange));
        let session_length = non_negative(
            baseline.avg_session_length * factor(ModifiableVariable::SessionLengthChange),
        );
        let sessions_per_user = non_negative(baseline.sessions_per_user);

        let (conversion_rate, conversion_clamped) = clamp_probability(
            baseline.conversion_rate * factor(ModifiableVariable::ConversionChange),
        );
        let (retention, retention_clamps) = baseline
            .retention
            .scaled(factor(ModifiableVariable::RetentionChange));

        Self {
            retention,
            arpu,
            arppu,
            conversion_rate,
            session_length,
            sessions_per_user,
            clamps: clamps + u32::from(conversion_clamped) + retention_clamps,
        }
    }
}

/// Raw output of one projection pass, before impact and confidence
#[derive(Debug, Clone)]
pub(crate) struct Projection {
    pub days: Vec<ProjectedDay>,
    pub summary: ScenarioSummary,
}

/// Project `input.baseline` under `modification` for the input's horizon.
///
/// Callers must have validated `input`; in particular the horizon is at
/// least one day.
pub(crate) fn run_projection(
    input: &ScenarioInput,
    modification: &ScenarioModification,
    metrics: &mut ProjectionMetrics,
) -> Projection {
    let modified = ModifiedMetrics::apply(&input.baseline, modification);
    metrics.record_clamps(modified.clamps);

    let horizon = input.horizon_days as usize;
    let curve = RetentionCurve::build(&modified.retention, input.horizon_days);

    // The acquisition lever reads the raw delta, independent of retention
    let cohort_size = (input.effective_daily_new_users()
        * (1.0 + modification.delta(ModifiableVariable::DauChange)))
    .max(0.0);

    let mut cohorts: Vec<f64> = Vec::with_capacity(horizon);
    let mut days = Vec::with_capacity(horizon);

    let mut total_revenue = 0.0;
    let mut total_dau = 0.0;
    let mut total_sessions = 0.0;
    let mut peak_dau = 0.0;
    let mut peak_revenue = 0.0;

    for day in 0..horizon {
        cohorts.push(cohort_size);

        let returning_users: f64 = cohorts[..day]
            .iter()
            .enumerate()
            .map(|(cohort_day, size)| size * curve.at(day - cohort_day))
            .sum();
        metrics.record_day(day);

        let new_users = cohort_size;
        let dau = new_users + returning_users;
        let paying_users = dau * modified.conversion_rate;
        let revenue = paying_users * modified.arppu;
        let sessions = dau * modified.sessions_per_user;

        total_revenue += revenue;
        total_dau += dau;
        total_sessions += sessions;
        if dau > peak_dau {
            peak_dau = dau;
            metrics.peak_dau_day = day as u32;
        }
        if revenue > peak_revenue {
            peak_revenue = revenue;
            metrics.peak_revenue_day = day as u32;
        }

        days.push(ProjectedDay {
            day: day as u32,
            date: date_for_day(input.start_date, day),
            dau: dau.round() as u64,
            revenue: round_cents(revenue),
            new_users: new_users.round() as u64,
            returning_users: returning_users.round() as u64,
            paying_users: paying_users.round() as u64,
            sessions: sessions.round() as u64,
            play_minutes: round_cents(sessions * modified.session_length),
        });
    }

    let horizon_f = horizon as f64;
    let summary = ScenarioSummary {
        total_revenue,
        avg_daily_revenue: total_revenue / horizon_f,
        peak_daily_revenue: peak_revenue,
        total_dau,
        avg_dau: total_dau / horizon_f,
        peak_dau,
        projected_ltv: curve.total() * modified.arpu,
        total_sessions,
        avg_session_length: modified.session_length,
    };

    Projection { days, summary }
}

/// Simulate a scenario and compare it against its unmodified baseline.
pub fn simulate(input: &ScenarioInput) -> Result<ScenarioResult> {
    simulate_with_metrics(input).map(|(result, _)| result)
}

/// Like `simulate`, also returning metrics for the scenario's own
/// projection pass (the baseline pass is not instrumented).
pub fn simulate_with_metrics(input: &ScenarioInput) -> Result<(ScenarioResult, ProjectionMetrics)> {
    input.validate()?;
    tracing::debug!(
        name = %input.name,
        horizon_days = input.horizon_days,
        "simulating scenario"
    );

    let mut metrics = ProjectionMetrics::new();
    let projection = run_projection(input, &input.modifications, &mut metrics);
    let baseline = run_projection(
        input,
        &ScenarioModification::none(),
        &mut ProjectionMetrics::new(),
    );
    let impact = ScenarioImpact::between(&projection.summary, &baseline.summary);

    Ok((assemble(input, projection, impact), metrics))
}

/// Project a scenario on its own, without a baseline pass.
///
/// `impact` is all zeros. Use this when the caller only needs the series
/// and summary, or is itself computing the baseline.
pub fn simulate_standalone(input: &ScenarioInput) -> Result<ScenarioResult> {
    input.validate()?;
    let projection = run_projection(input, &input.modifications, &mut ProjectionMetrics::new());
    Ok(assemble(input, projection, ScenarioImpact::default()))
}

fn assemble(input: &ScenarioInput, projection: Projection, impact: ScenarioImpact) -> ScenarioResult {
    let total_revenue = projection.summary.total_revenue;
    ScenarioResult {
        name: input.name.clone(),
        horizon_days: input.horizon_days,
        days: projection.days,
        confidence: confidence_interval(&input.modifications, total_revenue),
        revenue_breakdown: RevenueBreakdown::from_total(total_revenue),
        summary: projection.summary,
        impact,
    }
}

/// Heuristic band around total revenue that widens with the mean size of
/// the modifications.
pub fn confidence_interval(modification: &ScenarioModification, total_revenue: f64) -> ConfidenceInterval {
    let magnitude = modification.magnitude().min(1.0);
    let level = (1.0 - magnitude * CONFIDENCE_PER_MAGNITUDE).max(CONFIDENCE_FLOOR);
    let spread = (1.0 - level) * CONFIDENCE_SPREAD;
    ConfidenceInterval {
        low: total_revenue * (1.0 - spread),
        high: total_revenue * (1.0 + spread),
        level,
    }
}

fn date_for_day(start: Option<Date>, day: usize) -> Option<Date> {
    start.and_then(|date| date.checked_add((day as i64).days()).ok())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioBuilder;
    use crate::error::SimulationError;

    fn reference_input() -> ScenarioInput {
        ScenarioBuilder::new("Reference")
            .dau(10_000.0)
            .retention(0.4, 0.2, 0.1)
            .monetization(0.5, 15.0, 0.03)
            .sessions(12.0, 2.0)
            .horizon_days(30)
            .daily_new_users(1_000.0)
            .build()
    }

    #[test]
    fn test_modified_metrics_clamps() {
        let baseline = reference_input().baseline;
        let modification = ScenarioModification {
            conversion_change: Some(-2.0),
            retention_change: Some(2.0),
            arppu_change: Some(-1.5),
            ..Default::default()
        };
        let modified = ModifiedMetrics::apply(&baseline, &modification);
        assert_eq!(modified.conversion_rate, 0.0);
        assert_eq!(modified.arppu, 0.0);
        assert_eq!(modified.retention.d1, 1.0);
        assert!((modified.retention.d30 - 0.3).abs() < 1e-12);
        assert_eq!(modified.clamps, 3);
    }

    #[test]
    fn test_unmodified_metrics_pass_through() {
        let baseline = reference_input().baseline;
        let modified = ModifiedMetrics::apply(&baseline, &ScenarioModification::none());
        assert_eq!(modified.retention, baseline.retention);
        assert_eq!(modified.arppu, baseline.arppu);
        assert_eq!(modified.conversion_rate, baseline.conversion_rate);
        assert_eq!(modified.clamps, 0);
    }

    #[test]
    fn test_day_zero_has_only_new_users() {
        let input = ScenarioBuilder::from_input(reference_input())
            .dau_change(0.25)
            .build();
        let result = simulate(&input).unwrap();
        let first = &result.days[0];
        assert_eq!(first.new_users, 1_250);
        assert_eq!(first.returning_users, 0);
        assert_eq!(first.dau, 1_250);
    }

    #[test]
    fn test_second_day_returning_users() {
        let result = simulate(&reference_input()).unwrap();
        // Day 1: one prior cohort at 40% retention
        assert_eq!(result.days[1].returning_users, 400);
        assert_eq!(result.days[1].dau, 1_400);
        assert_eq!(result.days[1].paying_users, 42);
        assert!((result.days[1].revenue - 630.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_averages() {
        let result = simulate(&reference_input()).unwrap();
        let summary = &result.summary;
        assert!((summary.avg_dau - summary.total_dau / 30.0).abs() < 1e-9);
        assert!((summary.avg_daily_revenue - summary.total_revenue / 30.0).abs() < 1e-9);
        assert!(summary.peak_dau >= summary.avg_dau);
        // With constant acquisition DAU only grows
        assert_eq!(result.final_day().unwrap().dau as f64, summary.peak_dau.round());
    }

    #[test]
    fn test_ltv_is_retention_weighted_arpu() {
        let input = reference_input();
        let result = simulate(&input).unwrap();
        let curve = RetentionCurve::build(&input.baseline.retention, input.horizon_days);
        assert!((result.summary.projected_ltv - curve.total() * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_unmodified_scenario_has_zero_impact() {
        let result = simulate(&reference_input()).unwrap();
        assert!(result.impact.is_zero());
        assert_eq!(result.confidence.level, 1.0);
        assert_eq!(result.confidence.low, result.summary.total_revenue);
        assert_eq!(result.confidence.high, result.summary.total_revenue);
    }

    #[test]
    fn test_standalone_has_zero_impact_even_when_modified() {
        let input = ScenarioBuilder::from_input(reference_input())
            .arppu_change(0.5)
            .build();
        let result = simulate_standalone(&input).unwrap();
        assert!(result.impact.is_zero());
        assert!(result.summary.total_revenue > 0.0);
    }

    #[test]
    fn test_confidence_interval() {
        let modification = ScenarioModification {
            retention_change: Some(0.2),
            arpu_change: Some(-0.4),
            ..Default::default()
        };
        let interval = confidence_interval(&modification, 1_000.0);
        // magnitude 0.3 -> level 0.91 -> spread 0.045
        assert!((interval.level - 0.91).abs() < 1e-12);
        assert!((interval.low - 955.0).abs() < 1e-9);
        assert!((interval.high - 1_045.0).abs() < 1e-9);

        let extreme = ScenarioModification::single(ModifiableVariable::DauChange, 5.0);
        let interval = confidence_interval(&extreme, 1_000.0);
        assert!((interval.level - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let input = ScenarioBuilder::from_input(reference_input())
            .horizon_days(0)
            .build();
        assert_eq!(simulate(&input), Err(SimulationError::InvalidHorizon(0)));
        assert_eq!(
            simulate_standalone(&input),
            Err(SimulationError::InvalidHorizon(0))
        );
    }

    #[test]
    fn test_dates_follow_start_date() {
        let input = ScenarioBuilder::from_input(reference_input())
            .start(2025, 1, 30)
            .build();
        let result = simulate(&input).unwrap();
        assert_eq!(result.days[0].date, Some(jiff::civil::date(2025, 1, 30)));
        assert_eq!(result.days[2].date, Some(jiff::civil::date(2025, 2, 1)));

        let undated = simulate(&reference_input()).unwrap();
        assert!(undated.days.iter().all(|day| day.date.is_none()));
    }

    #[test]
    fn test_metrics_collected() {
        let (_, metrics) = simulate_with_metrics(&reference_input()).unwrap();
        assert_eq!(metrics.days_simulated, 30);
        // Day d looks back over d earlier cohorts
        assert_eq!(metrics.cohort_evaluations, (0..30).sum::<u64>());
        assert_eq!(metrics.peak_dau_day, 29);
        assert_eq!(metrics.clamps_applied, 0);
    }
}
