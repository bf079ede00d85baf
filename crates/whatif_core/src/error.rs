use std::fmt;

use crate::model::ModifiableVariable;

/// Errors raised when a scenario cannot be projected.
///
/// These all indicate caller misuse and are reported before any projection
/// work starts. Numeric degeneracies inside an otherwise valid scenario are
/// clamped rather than reported.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The projection horizon must be at least one day
    InvalidHorizon(u32),
    /// A variable name that does not match any modifiable field
    UnknownVariable(String),
    /// A sensitivity sweep range that cannot be sampled
    InvalidSweep { steps: u32, reason: &'static str },
    /// A baseline metric is NaN or infinite
    NonFiniteBaseline(&'static str),
    /// A modification delta is NaN or infinite
    NonFiniteModification(ModifiableVariable),
    /// Daily acquisition is infinite
    InvalidDailyNewUsers(f64),
    /// Breakeven bounds or tolerance that bisection cannot work with
    InvalidBreakevenConfig(&'static str),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidHorizon(days) => {
                write!(f, "projection horizon must be at least 1 day (got {days})")
            }
            SimulationError::UnknownVariable(name) => {
                write!(f, "unknown modification variable '{name}'")
            }
            SimulationError::InvalidSweep { steps, reason } => {
                write!(f, "invalid sweep range ({steps} steps): {reason}")
            }
            SimulationError::NonFiniteBaseline(field) => {
                write!(f, "baseline metric '{field}' is not a finite number")
            }
            SimulationError::NonFiniteModification(variable) => {
                write!(f, "modification '{variable}' is not a finite number")
            }
            SimulationError::InvalidDailyNewUsers(users) => {
                write!(f, "daily new users must be finite (got {users})")
            }
            SimulationError::InvalidBreakevenConfig(reason) => {
                write!(f, "invalid breakeven search: {reason}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SimulationError::InvalidHorizon(0).to_string(),
            "projection horizon must be at least 1 day (got 0)"
        );
        assert_eq!(
            SimulationError::UnknownVariable("churnChange".into()).to_string(),
            "unknown modification variable 'churnChange'"
        );
        assert_eq!(
            SimulationError::NonFiniteModification(ModifiableVariable::ArpuChange).to_string(),
            "modification 'arpuChange' is not a finite number"
        );
        assert_eq!(
            SimulationError::InvalidDailyNewUsers(f64::INFINITY).to_string(),
            "daily new users must be finite (got inf)"
        );
    }
}
