//! Breakeven search configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

fn default_low() -> f64 {
    -0.5
}

fn default_high() -> f64 {
    0.5
}

fn default_max_iterations() -> usize {
    50
}

fn default_tolerance() -> f64 {
    0.001
}

/// Bounds and stopping rules for the breakeven bisection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakevenConfig {
    /// Lower bound of the swept variable
    #[serde(default = "default_low")]
    pub low: f64,

    /// Upper bound of the swept variable
    #[serde(default = "default_high")]
    pub high: f64,

    /// Maximum bisection steps
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Absolute tolerance on revenue change
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for BreakevenConfig {
    fn default() -> Self {
        Self {
            low: default_low(),
            high: default_high(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

impl BreakevenConfig {
    /// Reject bounds and tolerances the bisection cannot converge on
    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(SimulationError::InvalidBreakevenConfig(
                "search bounds must be finite",
            ));
        }
        if self.low >= self.high {
            return Err(SimulationError::InvalidBreakevenConfig(
                "lower bound must be below upper bound",
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SimulationError::InvalidBreakevenConfig(
                "tolerance must be a positive finite number",
            ));
        }
        Ok(())
    }
}
