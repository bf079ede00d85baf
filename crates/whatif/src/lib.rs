//! Command-line front end for the what-if simulation engine
//!
//! Loads scenario files, runs one of the engine operations and renders the
//! outcome as a text report, YAML or JSON. All simulation logic lives in
//! `whatif_core`.

#![warn(clippy::all)]

pub mod commands;
pub mod data;
pub mod logging;
pub mod report;
pub mod util;

pub use commands::{Command, execute};
pub use data::ScenarioDirectory;
pub use logging::{LogTarget, init_logging};
pub use report::{OutputFormat, Report};
