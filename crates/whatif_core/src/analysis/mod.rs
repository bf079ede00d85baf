//! Derived analyses built on repeated simulation.
//!
//! - `compare_scenarios` runs two scenarios and buckets the revenue change
//!   into a `Recommendation`.
//! - `sensitivity_analysis` sweeps one modification across a range.
//!
//! ```ignore
//! use whatif_core::analysis::{SensitivityRange, sensitivity_analysis};
//! use whatif_core::model::ModifiableVariable;
//!
//! let points = sensitivity_analysis(
//!     &input,
//!     ModifiableVariable::RetentionChange,
//!     &SensitivityRange::new(-0.2, 0.2, 8),
//! )?;
//! for point in &points {
//!     println!("{:+.2} -> {:.0}", point.value, point.result.summary.total_revenue);
//! }
//! ```
//!
//! Breakeven search lives in `crate::optimization`.

mod compare;
mod config;
mod evaluator;

pub use compare::compare_scenarios;
pub use config::{SensitivityRange, sample_label};
pub use evaluator::{SensitivityPoint, sensitivity_analysis};
