//! Breakeven search
//!
//! Finds the value of a single modification at which the scenario's
//! revenue impact hits a target, by bisection over a bounded range.
//!
//! # Example
//!
//! ```ignore
//! use whatif_core::model::ModifiableVariable;
//! use whatif_core::optimization::find_breakeven;
//!
//! // How much can ARPPU drop before a retention push stops paying off?
//! let input = ScenarioBuilder::from_input(base).retention_change(0.05).build();
//! match find_breakeven(&input, ModifiableVariable::ArppuChange, 0.0)? {
//!     Some(value) => println!("breakeven at {:+.1}%", value * 100.0),
//!     None => println!("no breakeven in range"),
//! }
//! ```

mod binary_search;
mod config;
mod result;

pub use binary_search::{ProgressCallback, find_breakeven_detailed};
pub use config::BreakevenConfig;
pub use result::{BreakevenIteration, BreakevenSearch, TerminationReason};

use crate::config::ScenarioInput;
use crate::error::Result;
use crate::model::ModifiableVariable;

/// Breakeven value of `variable` for `target_revenue_change`, using the
/// default range `[-0.5, 0.5]`, 50 iterations and a 0.001 tolerance.
///
/// Returns `Ok(None)` when the search does not converge.
pub fn find_breakeven(
    input: &ScenarioInput,
    variable: ModifiableVariable,
    target_revenue_change: f64,
) -> Result<Option<f64>> {
    find_breakeven_detailed(
        input,
        variable,
        target_revenue_change,
        &BreakevenConfig::default(),
        None,
    )
    .map(|search| search.value)
}
