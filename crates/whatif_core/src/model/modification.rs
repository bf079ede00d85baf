//! Scenario modifications
//!
//! Relative deltas applied multiplicatively to baseline metrics. Each field
//! is independently present or absent; an absent field means "no change".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Sparse set of signed fractional deltas (`0.10` = +10%)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioModification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arpu_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_change: Option<f64>,
    /// Acquisition-side lever: scales the size of each new cohort
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dau_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arppu_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_length_change: Option<f64>,
}

impl ScenarioModification {
    /// No modifications at all
    pub fn none() -> Self {
        Self::default()
    }

    /// A modification touching exactly one variable
    pub fn single(variable: ModifiableVariable, value: f64) -> Self {
        let mut modification = Self::default();
        variable.set(&mut modification, value);
        modification
    }

    /// Delta for `variable`, treating an absent field as 0
    pub fn delta(&self, variable: ModifiableVariable) -> f64 {
        variable.get(self).unwrap_or(0.0)
    }

    /// Every delta that is present, in declaration order
    pub fn defined(&self) -> impl Iterator<Item = (ModifiableVariable, f64)> + '_ {
        ModifiableVariable::ALL
            .into_iter()
            .filter_map(|variable| variable.get(self).map(|value| (variable, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.defined().next().is_none()
    }

    /// Mean absolute value of the defined deltas, 0 when none are defined
    pub fn magnitude(&self) -> f64 {
        let (sum, count) = self
            .defined()
            .fold((0.0, 0u32), |(sum, count), (_, value)| {
                (sum + value.abs(), count + 1)
            });
        if count == 0 { 0.0 } else { sum / f64::from(count) }
    }

    pub fn validate(&self) -> Result<()> {
        match self.defined().find(|(_, value)| !value.is_finite()) {
            Some((variable, _)) => Err(SimulationError::NonFiniteModification(variable)),
            None => Ok(()),
        }
    }
}

/// The six fields a scenario can perturb.
///
/// Sweeps and breakeven searches name their variable with this enum, so
/// the only place an unknown name can appear is string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModifiableVariable {
    RetentionChange,
    ArpuChange,
    ConversionChange,
    DauChange,
    ArppuChange,
    SessionLengthChange,
}

impl ModifiableVariable {
    pub const ALL: [ModifiableVariable; 6] = [
        ModifiableVariable::RetentionChange,
        ModifiableVariable::ArpuChange,
        ModifiableVariable::ConversionChange,
        ModifiableVariable::DauChange,
        ModifiableVariable::ArppuChange,
        ModifiableVariable::SessionLengthChange,
    ];

    pub fn get(self, modification: &ScenarioModification) -> Option<f64> {
        match self {
            ModifiableVariable::RetentionChange => modification.retention_change,
            ModifiableVariable::ArpuChange => modification.arpu_change,
            ModifiableVariable::ConversionChange => modification.conversion_change,
            ModifiableVariable::DauChange => modification.dau_change,
            ModifiableVariable::ArppuChange => modification.arppu_change,
            ModifiableVariable::SessionLengthChange => modification.session_length_change,
        }
    }

    pub fn set(self, modification: &mut ScenarioModification, value: f64) {
        let slot = match self {
            ModifiableVariable::RetentionChange => &mut modification.retention_change,
            ModifiableVariable::ArpuChange => &mut modification.arpu_change,
            ModifiableVariable::ConversionChange => &mut modification.conversion_change,
            ModifiableVariable::DauChange => &mut modification.dau_change,
            ModifiableVariable::ArppuChange => &mut modification.arppu_change,
            ModifiableVariable::SessionLengthChange => &mut modification.session_length_change,
        };
        *slot = Some(value);
    }

    /// Copy of `modification` with this variable replaced by `value`
    pub fn with(self, modification: &ScenarioModification, value: f64) -> ScenarioModification {
        let mut updated = *modification;
        self.set(&mut updated, value);
        updated
    }

    /// Field name as it appears in serialized scenarios
    pub fn name(self) -> &'static str {
        match self {
            ModifiableVariable::RetentionChange => "retentionChange",
            ModifiableVariable::ArpuChange => "arpuChange",
            ModifiableVariable::ConversionChange => "conversionChange",
            ModifiableVariable::DauChange => "dauChange",
            ModifiableVariable::ArppuChange => "arppuChange",
            ModifiableVariable::SessionLengthChange => "sessionLengthChange",
        }
    }

    /// Human-readable label for reports
    pub fn label(self) -> &'static str {
        match self {
            ModifiableVariable::RetentionChange => "Retention",
            ModifiableVariable::ArpuChange => "ARPU",
            ModifiableVariable::ConversionChange => "Conversion",
            ModifiableVariable::DauChange => "New Users",
            ModifiableVariable::ArppuChange => "ARPPU",
            ModifiableVariable::SessionLengthChange => "Session Length",
        }
    }
}

impl fmt::Display for ModifiableVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModifiableVariable {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        ModifiableVariable::ALL
            .into_iter()
            .find(|variable| variable.name().to_lowercase() == normalized)
            .ok_or_else(|| SimulationError::UnknownVariable(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_camel_and_snake_case() {
        assert_eq!(
            "retentionChange".parse::<ModifiableVariable>(),
            Ok(ModifiableVariable::RetentionChange)
        );
        assert_eq!(
            "session_length_change".parse::<ModifiableVariable>(),
            Ok(ModifiableVariable::SessionLengthChange)
        );
        assert_eq!(
            "ARPPU-change".parse::<ModifiableVariable>(),
            Ok(ModifiableVariable::ArppuChange)
        );
        assert_eq!(
            "churnChange".parse::<ModifiableVariable>(),
            Err(SimulationError::UnknownVariable("churnChange".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip() {
        for variable in ModifiableVariable::ALL {
            assert_eq!(variable.name().parse::<ModifiableVariable>(), Ok(variable));
        }
    }

    #[test]
    fn test_magnitude_counts_only_defined_fields() {
        assert_eq!(ScenarioModification::none().magnitude(), 0.0);

        let modification = ScenarioModification {
            retention_change: Some(0.2),
            arpu_change: Some(-0.4),
            dau_change: Some(0.0),
            ..Default::default()
        };
        assert!((modification.magnitude() - 0.2).abs() < 1e-12);
        assert_eq!(modification.defined().count(), 3);
    }

    #[test]
    fn test_with_replaces_only_target() {
        let base = ScenarioModification {
            arpu_change: Some(0.1),
            ..Default::default()
        };
        let swept = ModifiableVariable::DauChange.with(&base, -0.25);
        assert_eq!(swept.arpu_change, Some(0.1));
        assert_eq!(swept.dau_change, Some(-0.25));
        assert_eq!(base.dau_change, None);
    }

    #[test]
    fn test_serde_skips_absent_fields() {
        let modification = ScenarioModification::single(ModifiableVariable::ConversionChange, 0.05);
        let json = serde_json::to_string(&modification).unwrap();
        assert_eq!(json, r#"{"conversionChange":0.05}"#);

        let parsed: ScenarioModification = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_empty());
    }
}
