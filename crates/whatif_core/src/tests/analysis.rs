//! End-to-end tests for comparison, sensitivity sweeps and breakeven search

use super::{reference_input, reference_scenario};
use crate::analysis::{SensitivityRange, compare_scenarios, sensitivity_analysis};
use crate::model::{MetricDelta, ModifiableVariable, Recommendation};
use crate::optimization::{BreakevenConfig, find_breakeven, find_breakeven_detailed};
use crate::simulation::simulate;

#[test]
fn test_compare_identical_inputs() {
    let comparison = compare_scenarios(&reference_input(), &reference_input()).unwrap();
    assert_eq!(comparison.difference, MetricDelta::default());
    assert_eq!(comparison.percent_change, MetricDelta::default());
    assert_eq!(comparison.recommendation, Recommendation::Neutral);
    assert_eq!(comparison.baseline, comparison.modified);
}

#[test]
fn test_compare_uses_independent_baselines() {
    // Both sides modified: each side's impact is against its own baseline
    let left = reference_scenario("Left").arppu_change(0.1).build();
    let right = reference_scenario("Right").arppu_change(0.3).build();
    let comparison = compare_scenarios(&left, &right).unwrap();

    assert!((comparison.baseline.impact.revenue_change_percent - 10.0).abs() < 1e-9);
    assert!((comparison.modified.impact.revenue_change_percent - 30.0).abs() < 1e-9);
    let expected = (1.3 / 1.1 - 1.0) * 100.0;
    assert!((comparison.percent_change.total_revenue - expected).abs() < 1e-9);
    assert_eq!(comparison.recommendation, Recommendation::StrongPositive);
}

#[test]
fn test_sensitivity_sample_counts() {
    for steps in [0, 1, 4, 10] {
        let points = sensitivity_analysis(
            &reference_input(),
            ModifiableVariable::RetentionChange,
            &SensitivityRange::new(-0.2, 0.3, steps),
        )
        .unwrap();
        assert_eq!(points.len(), steps as usize + 1);
        assert_eq!(points[0].value, -0.2);
        if steps > 0 {
            assert!((points[steps as usize].value - 0.3).abs() < 1e-12);
            let step = 0.5 / f64::from(steps);
            for pair in points.windows(2) {
                assert!((pair[1].value - pair[0].value - step).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn test_sensitivity_matches_direct_simulation() {
    let points = sensitivity_analysis(
        &reference_input(),
        ModifiableVariable::ArppuChange,
        &SensitivityRange::new(0.0, 0.2, 2),
    )
    .unwrap();
    let direct = simulate(
        &reference_input().with_variable(ModifiableVariable::ArppuChange, points[1].value),
    )
    .unwrap();
    assert_eq!(points[1].result.summary, direct.summary);
    assert_eq!(points[1].result.impact, direct.impact);
    assert!(points[1].result.name.contains("ARPPU +10.0%"));
}

#[test]
fn test_breakeven_arpu_is_zero() {
    let value = find_breakeven(&reference_input(), ModifiableVariable::ArpuChange, 0.0)
        .unwrap()
        .unwrap();
    assert!(value.abs() <= 0.001);
}

#[test]
fn test_breakeven_offsets_existing_modification() {
    // A 20% conversion drop: how much ARPPU recovers total revenue?
    let input = reference_scenario("Offset").conversion_change(-0.2).build();
    let search = find_breakeven_detailed(
        &input,
        ModifiableVariable::ArppuChange,
        0.0,
        &BreakevenConfig::default(),
        None,
    )
    .unwrap();
    let value = search.value.expect("0.25 lies inside [-0.5, 0.5]");
    // 0.8 * (1 + x) = 1 -> x = 0.25
    assert!((value - 0.25).abs() < 1e-6);
    assert!(search.converged());
}

#[test]
fn test_breakeven_out_of_range_returns_none() {
    // Revenue can never rise 10x inside [-0.5, 0.5]
    let baseline_revenue = simulate(&reference_input()).unwrap().summary.total_revenue;
    let value = find_breakeven(
        &reference_input(),
        ModifiableVariable::ConversionChange,
        baseline_revenue * 10.0,
    )
    .unwrap();
    assert_eq!(value, None);
}

#[test]
fn test_unknown_variable_name_rejected() {
    let parsed = "retentionBoost".parse::<ModifiableVariable>();
    assert!(parsed.is_err());
    assert_eq!(
        parsed.unwrap_err().to_string(),
        "unknown modification variable 'retentionBoost'"
    );
}
