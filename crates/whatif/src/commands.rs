//! Command-line subcommands and their execution

use std::path::{Path, PathBuf};

use clap::Subcommand;
use color_eyre::eyre::{Result, WrapErr};
use whatif_core::model::ModifiableVariable;
use whatif_core::optimization::{BreakevenConfig, ProgressCallback, find_breakeven_detailed};
use whatif_core::{ScenarioInput, SensitivityRange, compare_scenarios, sensitivity_analysis, simulate};

use crate::data::ScenarioDirectory;
use crate::report::{Report, SensitivityReport};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Project a scenario and report its impact against the unmodified baseline
    Simulate {
        /// Scenario file, or the name of a scenario in the data directory
        scenario: PathBuf,
    },

    /// Simulate two scenarios and recommend based on the revenue change
    Compare {
        baseline: PathBuf,
        modified: PathBuf,
    },

    /// Sweep one modification across a range, keeping the others fixed
    Sensitivity {
        scenario: PathBuf,

        /// Variable to sweep, e.g. retentionChange or arppu_change
        #[arg(long)]
        variable: ModifiableVariable,

        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        #[arg(long, allow_negative_numbers = true)]
        max: f64,

        /// Number of intervals; the sweep evaluates steps + 1 values
        #[arg(long, default_value_t = 10)]
        steps: u32,
    },

    /// Find the value of one modification where revenue change hits a target
    Breakeven {
        scenario: PathBuf,

        #[arg(long)]
        variable: ModifiableVariable,

        /// Absolute revenue change to aim for
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        target: f64,
    },
}

fn load(store: &ScenarioDirectory, arg: &Path) -> Result<ScenarioInput> {
    store
        .load(arg)
        .wrap_err_with(|| format!("Failed to load scenario '{}'", arg.display()))
}

/// Run a command against scenarios resolved through `store`
pub fn execute(command: &Command, store: &ScenarioDirectory) -> Result<Report> {
    match command {
        Command::Simulate { scenario } => {
            let input = load(store, scenario)?;
            tracing::info!(name = %input.name, "simulate");
            let result = simulate(&input).wrap_err("Simulation failed")?;
            Ok(Report::Simulation(result))
        }
        Command::Compare { baseline, modified } => {
            let baseline = load(store, baseline)?;
            let modified = load(store, modified)?;
            tracing::info!(baseline = %baseline.name, modified = %modified.name, "compare");
            let comparison = compare_scenarios(&baseline, &modified).wrap_err("Comparison failed")?;
            Ok(Report::Comparison(comparison))
        }
        Command::Sensitivity {
            scenario,
            variable,
            min,
            max,
            steps,
        } => {
            let input = load(store, scenario)?;
            tracing::info!(name = %input.name, %variable, min, max, steps, "sensitivity");
            let points = sensitivity_analysis(&input, *variable, &SensitivityRange::new(*min, *max, *steps))
                .wrap_err("Sensitivity analysis failed")?;
            Ok(Report::Sensitivity(SensitivityReport {
                scenario: input.name,
                variable: *variable,
                points,
            }))
        }
        Command::Breakeven {
            scenario,
            variable,
            target,
        } => {
            let input = load(store, scenario)?;
            tracing::info!(name = %input.name, %variable, target, "breakeven");
            let progress: ProgressCallback = Box::new(|iteration, value, revenue_change| {
                tracing::debug!(iteration, value, revenue_change, "breakeven progress");
            });
            let search = find_breakeven_detailed(
                &input,
                *variable,
                *target,
                &BreakevenConfig::default(),
                Some(progress),
            )
            .wrap_err("Breakeven search failed")?;
            Ok(Report::Breakeven(search))
        }
    }
}
