//! What-if simulation library for game analytics
//!
//! This crate projects daily active users and revenue forward from a small
//! set of aggregate baseline metrics under relative perturbations.
//! It supports:
//! - Cohort-based DAU projection driven by a day-1/7/30 retention curve
//! - Revenue, LTV and session projections with impact against the baseline
//! - Heuristic confidence bands and fixed-share revenue attribution
//! - Scenario comparison with a bucketed recommendation
//! - One-variable sensitivity sweeps
//! - Breakeven search by bisection
//!
//! Everything is synchronous and pure; callers own persistence.
//!
//! # Builder DSL
//!
//! ```ignore
//! use whatif_core::{ScenarioBuilder, simulate};
//!
//! let input = ScenarioBuilder::new("Retention +10%")
//!     .dau(10_000.0)
//!     .retention(0.40, 0.20, 0.10)
//!     .monetization(0.50, 15.0, 0.03)
//!     .horizon_days(30)
//!     .daily_new_users(1_000.0)
//!     .retention_change(0.10)
//!     .build();
//!
//! let result = simulate(&input)?;
//! println!("revenue impact: {:+.1}%", result.impact.revenue_change_percent);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod optimization;
pub mod retention;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{SensitivityPoint, SensitivityRange, compare_scenarios, sensitivity_analysis};
pub use config::{ScenarioBuilder, ScenarioInput};
pub use engine::WhatIfEngine;
pub use error::SimulationError;
pub use optimization::{BreakevenConfig, find_breakeven, find_breakeven_detailed};
pub use simulation::{simulate, simulate_standalone, simulate_with_metrics};
