//! Scenario configuration
//!
//! The main configuration type is `ScenarioInput`, which contains everything
//! needed to project one scenario. Helper methods support sweep and
//! breakeven use cases.
//!
//! # Builder DSL
//!
//! ```ignore
//! use whatif_core::config::ScenarioBuilder;
//! use whatif_core::model::{BaselineMetrics, RetentionRates};
//!
//! let input = ScenarioBuilder::new("Retention push")
//!     .baseline(baseline)
//!     .horizon_days(90)
//!     .daily_new_users(2_500.0)
//!     .start(2025, 3, 1)
//!     .retention_change(0.10)
//!     .arppu_change(-0.05)
//!     .build();
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::model::{BaselineMetrics, ModifiableVariable, ScenarioModification};

pub mod builder;

pub use builder::ScenarioBuilder;

/// New users acquired per day when a scenario does not say otherwise
pub const DEFAULT_DAILY_NEW_USERS: f64 = 1000.0;

fn default_horizon_days() -> u32 {
    30
}

/// Everything needed to project one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    /// Display label only
    #[serde(default)]
    pub name: String,

    pub baseline: BaselineMetrics,

    #[serde(default)]
    pub modifications: ScenarioModification,

    /// Number of days to project. Cost grows with the square of the
    /// horizon, and callers bound it.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,

    /// Users acquired per day. Unset or zero falls back to
    /// `DEFAULT_DAILY_NEW_USERS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_new_users: Option<f64>,

    /// Calendar date of day 0, used to label projected days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            baseline: BaselineMetrics::default(),
            modifications: ScenarioModification::default(),
            horizon_days: default_horizon_days(),
            daily_new_users: None,
            start_date: None,
        }
    }
}

impl ScenarioInput {
    /// Daily acquisition with the fallback for unset, zero or NaN values.
    /// Infinite values are rejected by `validate`.
    pub fn effective_daily_new_users(&self) -> f64 {
        self.daily_new_users
            .filter(|users| *users != 0.0 && !users.is_nan())
            .unwrap_or(DEFAULT_DAILY_NEW_USERS)
    }

    /// Check the scenario can be projected at all
    pub fn validate(&self) -> Result<()> {
        if self.horizon_days == 0 {
            return Err(SimulationError::InvalidHorizon(self.horizon_days));
        }
        if let Some(users) = self.daily_new_users
            && users.is_infinite()
        {
            return Err(SimulationError::InvalidDailyNewUsers(users));
        }
        self.baseline.validate()?;
        self.modifications.validate()
    }

    /// Same scenario with every modification removed
    pub fn as_baseline(&self) -> Self {
        Self {
            modifications: ScenarioModification::none(),
            ..self.clone()
        }
    }

    /// Same scenario with `variable` set to `value`, other modifications kept
    pub fn with_variable(&self, variable: ModifiableVariable, value: f64) -> Self {
        Self {
            modifications: variable.with(&self.modifications, value),
            ..self.clone()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
