//! Bisection search for a breakeven modification value
//!
//! Assumes revenue impact increases monotonically with the swept variable.
//! If it does not, the search can settle on the wrong bracket and will
//! usually report `MaxIterationsReached`.

use crate::config::ScenarioInput;
use crate::error::Result;
use crate::metrics::ProjectionMetrics;
use crate::model::{ModifiableVariable, ScenarioImpact, ScenarioModification};
use crate::simulation::run_projection;

use super::config::BreakevenConfig;
use super::result::{BreakevenIteration, BreakevenSearch, TerminationReason};

/// Upper bound on history slots reserved up front
const HISTORY_PREALLOCATION: usize = 64;

/// Progress callback for breakeven search
///
/// Arguments: (iteration, `current_value`, `revenue_change`)
pub type ProgressCallback = Box<dyn Fn(usize, f64, f64) + Send + Sync>;

/// Find the value of `variable` at which revenue impact equals
/// `target_revenue_change`, keeping the full search history.
///
/// All other modifications on `input` are held fixed. Impact is measured
/// against the same scenario with no modifications, exactly as `simulate`
/// reports it.
pub fn find_breakeven_detailed(
    input: &ScenarioInput,
    variable: ModifiableVariable,
    target_revenue_change: f64,
    config: &BreakevenConfig,
    progress_callback: Option<ProgressCallback>,
) -> Result<BreakevenSearch> {
    input.validate()?;
    config.validate()?;

    // The baseline pass does not depend on the swept value
    let baseline = run_projection(
        input,
        &ScenarioModification::none(),
        &mut ProjectionMetrics::new(),
    );

    let mut low = config.low;
    let mut high = config.high;
    let mut history = Vec::with_capacity(config.max_iterations.min(HISTORY_PREALLOCATION));

    for iteration in 1..=config.max_iterations {
        let mid = f64::midpoint(low, high);
        let candidate = input.with_variable(variable, mid);
        let projection = run_projection(
            &candidate,
            &candidate.modifications,
            &mut ProjectionMetrics::new(),
        );
        let revenue_change =
            ScenarioImpact::between(&projection.summary, &baseline.summary).revenue_change;

        history.push(BreakevenIteration {
            value: mid,
            revenue_change,
        });
        tracing::trace!(iteration, value = mid, revenue_change, "breakeven step");

        if let Some(ref callback) = progress_callback {
            callback(iteration, mid, revenue_change);
        }

        if (revenue_change - target_revenue_change).abs() < config.tolerance {
            return Ok(BreakevenSearch {
                variable,
                target_revenue_change,
                value: Some(mid),
                termination_reason: TerminationReason::Converged,
                history,
            });
        }

        if revenue_change < target_revenue_change {
            low = mid;
        } else {
            high = mid;
        }
    }

    tracing::warn!(
        %variable,
        target_revenue_change,
        iterations = config.max_iterations,
        "breakeven search did not converge"
    );

    Ok(BreakevenSearch {
        variable,
        target_revenue_change,
        value: None,
        termination_reason: TerminationReason::MaxIterationsReached,
        history,
    })
}
