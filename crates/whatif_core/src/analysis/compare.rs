//! Scenario comparison.

use crate::config::ScenarioInput;
use crate::error::Result;
use crate::model::{MetricDelta, Recommendation, ScenarioComparison};
use crate::simulation::simulate;

/// Simulate both scenarios independently and compare their headline
/// metrics.
///
/// Each side is a full `simulate` call, so each carries its own impact
/// against its own unmodified baseline.
pub fn compare_scenarios(
    baseline: &ScenarioInput,
    modified: &ScenarioInput,
) -> Result<ScenarioComparison> {
    let baseline_result = simulate(baseline)?;
    let modified_result = simulate(modified)?;

    let difference = MetricDelta::absolute(&modified_result.summary, &baseline_result.summary);
    let percent_change = MetricDelta::percent(&modified_result.summary, &baseline_result.summary);
    let recommendation = Recommendation::from_revenue_change_percent(percent_change.total_revenue);

    tracing::debug!(
        baseline = %baseline.name,
        modified = %modified.name,
        revenue_change_percent = percent_change.total_revenue,
        ?recommendation,
        "compared scenarios"
    );

    Ok(ScenarioComparison {
        baseline: baseline_result,
        modified: modified_result,
        difference,
        percent_change,
        recommendation,
    })
}
