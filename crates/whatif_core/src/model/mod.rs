mod baseline;
mod comparison;
mod modification;
mod results;

pub use baseline::{BaselineMetrics, RetentionRates};
pub(crate) use baseline::clamp_probability;
pub use comparison::{
    MODERATE_POSITIVE_THRESHOLD, MetricDelta, NEUTRAL_THRESHOLD, Recommendation,
    SLIGHT_POSITIVE_THRESHOLD, STRONG_POSITIVE_THRESHOLD, ScenarioComparison,
};
pub use modification::{ModifiableVariable, ScenarioModification};
pub use results::{
    ConfidenceInterval, EXISTING_USER_REVENUE_SHARE, NEW_USER_REVENUE_SHARE, ProjectedDay,
    REACTIVATED_USER_REVENUE_SHARE, RevenueBreakdown, ScenarioImpact, ScenarioResult,
    ScenarioSummary, percent_change,
};
