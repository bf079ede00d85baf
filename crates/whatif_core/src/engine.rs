//! Convenience wrapper holding a caller-owned "current baseline".
//!
//! The stored baseline is plain accessor state; no computation reads it
//! implicitly. Every method delegates to the free functions in
//! `simulation`, `analysis` and `optimization`.

use crate::analysis::{SensitivityPoint, SensitivityRange, compare_scenarios, sensitivity_analysis};
use crate::config::ScenarioInput;
use crate::error::Result;
use crate::model::{
    BaselineMetrics, ModifiableVariable, ScenarioComparison, ScenarioModification, ScenarioResult,
};
use crate::optimization::find_breakeven;
use crate::simulation::simulate;

#[derive(Debug, Clone, Default)]
pub struct WhatIfEngine {
    baseline: Option<BaselineMetrics>,
}

impl WhatIfEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_baseline(baseline: BaselineMetrics) -> Self {
        Self {
            baseline: Some(baseline),
        }
    }

    pub fn set_baseline(&mut self, baseline: BaselineMetrics) {
        self.baseline = Some(baseline);
    }

    pub fn baseline(&self) -> Option<&BaselineMetrics> {
        self.baseline.as_ref()
    }

    pub fn clear_baseline(&mut self) -> Option<BaselineMetrics> {
        self.baseline.take()
    }

    /// Build a scenario on top of the stored baseline, if one is set
    pub fn scenario_from_baseline(
        &self,
        name: impl Into<String>,
        modifications: ScenarioModification,
        horizon_days: u32,
    ) -> Option<ScenarioInput> {
        self.baseline.as_ref().map(|baseline| ScenarioInput {
            name: name.into(),
            baseline: baseline.clone(),
            modifications,
            horizon_days,
            ..Default::default()
        })
    }

    pub fn simulate(&self, input: &ScenarioInput) -> Result<ScenarioResult> {
        simulate(input)
    }

    pub fn compare_scenarios(
        &self,
        baseline: &ScenarioInput,
        modified: &ScenarioInput,
    ) -> Result<ScenarioComparison> {
        compare_scenarios(baseline, modified)
    }

    pub fn sensitivity_analysis(
        &self,
        input: &ScenarioInput,
        variable: ModifiableVariable,
        range: &SensitivityRange,
    ) -> Result<Vec<SensitivityPoint>> {
        sensitivity_analysis(input, variable, range)
    }

    pub fn find_breakeven(
        &self,
        input: &ScenarioInput,
        variable: ModifiableVariable,
        target_revenue_change: f64,
    ) -> Result<Option<f64>> {
        find_breakeven(input, variable, target_revenue_change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RetentionRates;

    fn baseline() -> BaselineMetrics {
        BaselineMetrics {
            dau: 10_000.0,
            retention: RetentionRates::new(0.4, 0.2, 0.1),
            arpu: 0.5,
            arppu: 15.0,
            conversion_rate: 0.03,
            ..Default::default()
        }
    }

    #[test]
    fn test_baseline_accessors() {
        let mut engine = WhatIfEngine::new();
        assert!(engine.baseline().is_none());
        assert!(
            engine
                .scenario_from_baseline("x", ScenarioModification::none(), 30)
                .is_none()
        );

        engine.set_baseline(baseline());
        assert_eq!(engine.baseline(), Some(&baseline()));

        assert_eq!(engine.clear_baseline(), Some(baseline()));
        assert!(engine.baseline().is_none());
    }

    #[test]
    fn test_scenario_from_stored_baseline() {
        let engine = WhatIfEngine::with_baseline(baseline());
        let modification = ScenarioModification::single(ModifiableVariable::RetentionChange, 0.1);
        let input = engine
            .scenario_from_baseline("Retention +10%", modification, 45)
            .unwrap();
        assert_eq!(input.horizon_days, 45);
        assert_eq!(input.baseline, baseline());

        let result = engine.simulate(&input).unwrap();
        assert_eq!(result.days.len(), 45);
        assert!(result.impact.dau_change_percent > 0.0);
    }
}
