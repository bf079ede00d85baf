//! Scenario Builder
//!
//! Fluent API for assembling a `ScenarioInput` in code.

use super::ScenarioInput;
use crate::model::{BaselineMetrics, ModifiableVariable, RetentionRates};

/// Builder for `ScenarioInput`
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    input: ScenarioInput,
}

impl ScenarioBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            input: ScenarioInput {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Start from an existing scenario, keeping all of its settings
    pub fn from_input(input: ScenarioInput) -> Self {
        Self { input }
    }

    // === Baseline ===

    pub fn baseline(mut self, baseline: BaselineMetrics) -> Self {
        self.input.baseline = baseline;
        self
    }

    pub fn dau(mut self, dau: f64) -> Self {
        self.input.baseline.dau = dau;
        self
    }

    pub fn retention(mut self, d1: f64, d7: f64, d30: f64) -> Self {
        self.input.baseline.retention = RetentionRates::new(d1, d7, d30);
        self
    }

    /// Set ARPU, ARPPU and conversion rate together
    pub fn monetization(mut self, arpu: f64, arppu: f64, conversion_rate: f64) -> Self {
        self.input.baseline.arpu = arpu;
        self.input.baseline.arppu = arppu;
        self.input.baseline.conversion_rate = conversion_rate;
        self
    }

    pub fn sessions(mut self, avg_session_length: f64, sessions_per_user: f64) -> Self {
        self.input.baseline.avg_session_length = avg_session_length;
        self.input.baseline.sessions_per_user = sessions_per_user;
        self
    }

    // === Projection ===

    pub fn horizon_days(mut self, days: u32) -> Self {
        self.input.horizon_days = days;
        self
    }

    pub fn daily_new_users(mut self, users: f64) -> Self {
        self.input.daily_new_users = Some(users);
        self
    }

    pub fn start(mut self, year: i16, month: i8, day: i8) -> Self {
        self.input.start_date = Some(jiff::civil::date(year, month, day));
        self
    }

    // === Modifications ===

    pub fn modify(mut self, variable: ModifiableVariable, value: f64) -> Self {
        variable.set(&mut self.input.modifications, value);
        self
    }

    pub fn retention_change(self, value: f64) -> Self {
        self.modify(ModifiableVariable::RetentionChange, value)
    }

    pub fn arpu_change(self, value: f64) -> Self {
        self.modify(ModifiableVariable::ArpuChange, value)
    }

    pub fn conversion_change(self, value: f64) -> Self {
        self.modify(ModifiableVariable::ConversionChange, value)
    }

    pub fn dau_change(self, value: f64) -> Self {
        self.modify(ModifiableVariable::DauChange, value)
    }

    pub fn arppu_change(self, value: f64) -> Self {
        self.modify(ModifiableVariable::ArppuChange, value)
    }

    pub fn session_length_change(self, value: f64) -> Self {
        self.modify(ModifiableVariable::SessionLengthChange, value)
    }

    pub fn build(self) -> ScenarioInput {
        self.input
    }
}
