//! Configuration types for one-variable sensitivity sweeps.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::model::ModifiableVariable;

/// Inclusive range sampled at `steps + 1` evenly spaced points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRange {
    pub min: f64,
    pub max: f64,
    pub steps: u32,
}

impl SensitivityRange {
    pub fn new(min: f64, max: f64, steps: u32) -> Self {
        Self { min, max, steps }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(SimulationError::InvalidSweep {
                steps: self.steps,
                reason: "range bounds must be finite",
            });
        }
        Ok(())
    }

    /// Number of samples the sweep produces
    pub fn sample_count(&self) -> usize {
        self.steps as usize + 1
    }

    /// Sample values from `min` to `max` inclusive. Zero steps yields only
    /// `min`.
    pub fn sweep_values(&self) -> Vec<f64> {
        if self.steps == 0 {
            return vec![self.min];
        }
        let step_size = (self.max - self.min) / f64::from(self.steps);
        (0..=self.steps)
            .map(|i| {
                if i == self.steps {
                    self.max
                } else {
                    self.min + step_size * f64::from(i)
                }
            })
            .collect()
    }
}

/// Scenario name for a sweep sample, e.g. `"Launch (Retention +10.0%)"`
pub fn sample_label(base_name: &str, variable: ModifiableVariable, value: f64) -> String {
    format!("{base_name} ({} {:+.1}%)", variable.label(), value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_values_zero_steps() {
        let range = SensitivityRange::new(-0.2, 0.2, 0);
        assert_eq!(range.sweep_values(), vec![-0.2]);
        assert_eq!(range.sample_count(), 1);
    }

    #[test]
    fn test_sweep_values_evenly_spaced() {
        let range = SensitivityRange::new(-0.2, 0.2, 4);
        let values = range.sweep_values();
        assert_eq!(values.len(), 5);
        assert_eq!(values[0], -0.2);
        assert_eq!(values[4], 0.2);
        for (i, value) in values.iter().enumerate() {
            assert!((value - (-0.2 + 0.1 * i as f64)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invalid_range() {
        let range = SensitivityRange::new(f64::NAN, 0.2, 3);
        assert!(matches!(
            range.validate(),
            Err(SimulationError::InvalidSweep { steps: 3, .. })
        ));
    }

    #[test]
    fn test_sample_label() {
        assert_eq!(
            sample_label("Launch", ModifiableVariable::RetentionChange, 0.1),
            "Launch (Retention +10.0%)"
        );
        assert_eq!(
            sample_label("Launch", ModifiableVariable::ArpuChange, -0.25),
            "Launch (ARPU -25.0%)"
        );
    }
}
