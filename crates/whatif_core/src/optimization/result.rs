//! Breakeven result types
//!
//! Contains types for tracking search progress and the final outcome.

use serde::{Deserialize, Serialize};

use crate::model::ModifiableVariable;

/// A single bisection step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakevenIteration {
    /// Value of the swept variable at this step
    pub value: f64,
    /// Revenue impact against the unmodified baseline
    pub revenue_change: f64,
}

/// Reason why the search terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Revenue impact came within tolerance of the target
    Converged,

    /// Iteration budget exhausted without reaching tolerance
    MaxIterationsReached,
}

/// Outcome of a breakeven search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakevenSearch {
    pub variable: ModifiableVariable,

    /// Revenue change the search aimed for
    pub target_revenue_change: f64,

    /// Breakeven value, present only when the search converged
    pub value: Option<f64>,

    /// Why the search terminated
    pub termination_reason: TerminationReason,

    /// Every evaluated step in order
    pub history: Vec<BreakevenIteration>,
}

impl BreakevenSearch {
    #[must_use]
    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::Converged
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.history.len()
    }

    /// The step whose revenue change ended closest to the target
    #[must_use]
    pub fn closest(&self) -> Option<&BreakevenIteration> {
        self.history.iter().min_by(|a, b| {
            let da = (a.revenue_change - self.target_revenue_change).abs();
            let db = (b.revenue_change - self.target_revenue_change).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}
