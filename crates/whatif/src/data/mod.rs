//! Scenario file loading and the data directory layout

pub mod storage;

pub use storage::{ScenarioDirectory, StorageError, load_scenario};
