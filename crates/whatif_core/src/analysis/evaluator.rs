//! Sensitivity sweep evaluator - runs one full simulation per sample value.
//!
//! With the `parallel` feature the samples are simulated on the rayon pool.
//! Results are returned in sample order either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ScenarioInput;
use crate::error::Result;
use crate::model::{ModifiableVariable, ScenarioResult};
use crate::simulation::simulate;

use super::config::{SensitivityRange, sample_label};

/// One sample of a sensitivity sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Value the swept variable was set to
    pub value: f64,
    pub result: ScenarioResult,
}

/// Sweep `variable` across `range`, holding every other modification fixed.
pub fn sensitivity_analysis(
    base: &ScenarioInput,
    variable: ModifiableVariable,
    range: &SensitivityRange,
) -> Result<Vec<SensitivityPoint>> {
    base.validate()?;
    range.validate()?;

    let values = range.sweep_values();
    tracing::debug!(
        name = %base.name,
        %variable,
        samples = values.len(),
        "running sensitivity sweep"
    );

    let evaluate = |value: &f64| -> Result<SensitivityPoint> {
        let input = base
            .with_variable(variable, *value)
            .with_name(sample_label(&base.name, variable, *value));
        Ok(SensitivityPoint {
            value: *value,
            result: simulate(&input)?,
        })
    };

    #[cfg(feature = "parallel")]
    let points = values.par_iter().map(evaluate).collect();

    #[cfg(not(feature = "parallel"))]
    let points = values.iter().map(evaluate).collect();

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioBuilder;
    use crate::error::SimulationError;

    fn base_input() -> ScenarioInput {
        ScenarioBuilder::new("Base")
            .dau(10_000.0)
            .retention(0.4, 0.2, 0.1)
            .monetization(0.5, 15.0, 0.03)
            .horizon_days(20)
            .arpu_change(0.05)
            .build()
    }

    #[test]
    fn test_single_sample_at_min() {
        let points = sensitivity_analysis(
            &base_input(),
            ModifiableVariable::ArppuChange,
            &SensitivityRange::new(-0.3, 0.3, 0),
        )
        .unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].value, -0.3);
        assert_eq!(points[0].result.name, "Base (ARPPU -30.0%)");
    }

    #[test]
    fn test_samples_in_order_with_other_modifications_kept() {
        let points = sensitivity_analysis(
            &base_input(),
            ModifiableVariable::ConversionChange,
            &SensitivityRange::new(-0.2, 0.2, 4),
        )
        .unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].value, -0.2);
        assert_eq!(points[4].value, 0.2);
        assert!(points.windows(2).all(|w| w[0].value < w[1].value));
        // More conversion means more revenue
        assert!(
            points
                .windows(2)
                .all(|w| w[0].result.summary.total_revenue < w[1].result.summary.total_revenue)
        );
        // ARPU delta stays in every sample, so LTV impact is constant
        let ltv = points[0].result.impact.ltv_change_percent;
        assert!((ltv - 5.0).abs() < 1e-9);
        assert!(
            points
                .iter()
                .all(|p| (p.result.impact.ltv_change_percent - ltv).abs() < 1e-9)
        );
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let input = ScenarioBuilder::from_input(base_input()).horizon_days(0).build();
        assert_eq!(
            sensitivity_analysis(
                &input,
                ModifiableVariable::DauChange,
                &SensitivityRange::new(0.0, 1.0, 2)
            ),
            Err(SimulationError::InvalidHorizon(0))
        );

        assert!(
            sensitivity_analysis(
                &base_input(),
                ModifiableVariable::DauChange,
                &SensitivityRange::new(0.0, f64::INFINITY, 2)
            )
            .is_err()
        );
    }
}
