//! Cross-module tests for the what-if engine
//!
//! Tests are organized by topic:
//! - `simulation_result` - Result structure and projection properties
//! - `degenerate_inputs` - Extreme modifications and zero baselines
//! - `analysis` - Comparison, sensitivity and breakeven end to end
//! - `builder_dsl` - Builder DSL and serialized scenario payloads

mod analysis;

use crate::config::{ScenarioBuilder, ScenarioInput};

/// The reference scenario used across tests: 10k DAU, 40/20/10 retention
fn reference_scenario(name: &str) -> ScenarioBuilder {
    ScenarioBuilder::new(name)
        .dau(10_000.0)
        .retention(0.40, 0.20, 0.10)
        .monetization(0.50, 15.0, 0.03)
        .sessions(12.0, 2.0)
        .horizon_days(30)
        .daily_new_users(1_000.0)
}

fn reference_input() -> ScenarioInput {
    reference_scenario("Reference").build()
}
