//! Rendering of command results as text, YAML or JSON

use std::fmt::Write;

use clap::ValueEnum;
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use whatif_core::SensitivityPoint;
use whatif_core::model::{ModifiableVariable, ScenarioComparison, ScenarioResult};
use whatif_core::optimization::BreakevenSearch;

use crate::util::{
    format_currency, format_currency_change, format_currency_short, format_delta,
    format_percent_change, format_percentage, format_users,
};

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
    Json,
}

/// A sensitivity sweep together with what was swept
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityReport {
    pub scenario: String,
    pub variable: ModifiableVariable,
    pub points: Vec<SensitivityPoint>,
}

/// Outcome of one command. Serialized formats emit the inner value as is.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Simulation(ScenarioResult),
    Comparison(ScenarioComparison),
    Sensitivity(SensitivityReport),
    Breakeven(BreakevenSearch),
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => {
                let mut out = String::new();
                self.write_text(&mut out)
                    .wrap_err("Failed to format text report")?;
                Ok(out)
            }
            OutputFormat::Yaml => {
                serde_saphyr::to_string(self).wrap_err("Failed to serialize report as YAML")
            }
            OutputFormat::Json => {
                let mut json =
                    serde_json::to_string_pretty(self).wrap_err("Failed to serialize report as JSON")?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        match self {
            Report::Simulation(result) => write_simulation(out, result),
            Report::Comparison(comparison) => write_comparison(out, comparison),
            Report::Sensitivity(report) => write_sensitivity(out, report),
            Report::Breakeven(search) => write_breakeven(out, search),
        }
    }
}

fn write_simulation(out: &mut String, result: &ScenarioResult) -> std::fmt::Result {
    let summary = &result.summary;
    let impact = &result.impact;

    writeln!(out, "Scenario: {} ({} days)", result.name, result.horizon_days)?;
    writeln!(
        out,
        "  Total revenue:       {:>16}  {} ({})",
        format_currency(summary.total_revenue),
        format_currency_change(impact.revenue_change),
        format_percent_change(impact.revenue_change_percent)
    )?;
    writeln!(
        out,
        "  Average DAU:         {:>16}  ({})",
        format_users(summary.avg_dau),
        format_percent_change(impact.dau_change_percent)
    )?;
    writeln!(out, "  Peak DAU:            {:>16}", format_users(summary.peak_dau))?;
    writeln!(
        out,
        "  Projected LTV:       {:>16}  ({})",
        format_currency(summary.projected_ltv),
        format_percent_change(impact.ltv_change_percent)
    )?;
    writeln!(
        out,
        "  Avg session length:  {:>12.1} min",
        summary.avg_session_length
    )?;
    writeln!(
        out,
        "  Confidence ({}): {} - {}",
        format_percentage(result.confidence.level),
        format_currency_short(result.confidence.low),
        format_currency_short(result.confidence.high)
    )?;
    let breakdown = &result.revenue_breakdown;
    writeln!(
        out,
        "  Revenue breakdown:   existing {} / new {} / reactivated {}",
        format_currency_short(breakdown.from_existing_users),
        format_currency_short(breakdown.from_new_users),
        format_currency_short(breakdown.from_reactivated)
    )?;

    writeln!(out)?;
    writeln!(
        out,
        "{:>5}  {:>10}  {:>10}  {:>8}  {:>10}  {:>8}  {:>12}",
        "Day", "Date", "DAU", "New", "Returning", "Paying", "Revenue"
    )?;
    for day in &result.days {
        let date = day
            .date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:>5}  {:>10}  {:>10}  {:>8}  {:>10}  {:>8}  {:>12}",
            day.day,
            date,
            format_users(day.dau as f64),
            format_users(day.new_users as f64),
            format_users(day.returning_users as f64),
            format_users(day.paying_users as f64),
            format_currency(day.revenue)
        )?;
    }
    Ok(())
}

fn write_comparison(out: &mut String, comparison: &ScenarioComparison) -> std::fmt::Result {
    let base = &comparison.baseline.summary;
    let modified = &comparison.modified.summary;

    writeln!(
        out,
        "Comparison: {} -> {}",
        comparison.baseline.name, comparison.modified.name
    )?;
    writeln!(
        out,
        "{:<16}  {:>16}  {:>16}  {:>16}  {:>10}",
        "", "Baseline", "Modified", "Difference", "Change"
    )?;
    writeln!(
        out,
        "{:<16}  {:>16}  {:>16}  {:>16}  {:>10}",
        "Total revenue",
        format_currency(base.total_revenue),
        format_currency(modified.total_revenue),
        format_currency_change(comparison.difference.total_revenue),
        format_percent_change(comparison.percent_change.total_revenue)
    )?;
    writeln!(
        out,
        "{:<16}  {:>16}  {:>16}  {:>16.1}  {:>10}",
        "Average DAU",
        format_users(base.avg_dau),
        format_users(modified.avg_dau),
        comparison.difference.avg_dau,
        format_percent_change(comparison.percent_change.avg_dau)
    )?;
    writeln!(
        out,
        "{:<16}  {:>16}  {:>16}  {:>16}  {:>10}",
        "Projected LTV",
        format_currency(base.projected_ltv),
        format_currency(modified.projected_ltv),
        format_currency_change(comparison.difference.projected_ltv),
        format_percent_change(comparison.percent_change.projected_ltv)
    )?;
    writeln!(out)?;
    writeln!(out, "Recommendation: {}", comparison.recommendation)
}

fn write_sensitivity(out: &mut String, report: &SensitivityReport) -> std::fmt::Result {
    writeln!(
        out,
        "Sensitivity of {} to {} ({} samples)",
        report.scenario,
        report.variable.label(),
        report.points.len()
    )?;
    writeln!(
        out,
        "{:>8}  {:>16}  {:>10}  {:>10}  {:>12}",
        "Value", "Total revenue", "Revenue", "Avg DAU", "LTV"
    )?;
    for point in &report.points {
        let result = &point.result;
        writeln!(
            out,
            "{:>8}  {:>16}  {:>10}  {:>10}  {:>12}",
            format_delta(point.value),
            format_currency_short(result.summary.total_revenue),
            format_percent_change(result.impact.revenue_change_percent),
            format_users(result.summary.avg_dau),
            format_currency(result.summary.projected_ltv)
        )?;
    }
    Ok(())
}

fn write_breakeven(out: &mut String, search: &BreakevenSearch) -> std::fmt::Result {
    writeln!(
        out,
        "Breakeven for {} (target revenue change {})",
        search.variable.label(),
        format_currency_change(search.target_revenue_change)
    )?;
    match search.value {
        Some(value) => writeln!(
            out,
            "  Value: {} (converged after {} iterations)",
            format_delta(value),
            search.iterations()
        ),
        None => {
            writeln!(
                out,
                "  No breakeven in the search range after {} iterations",
                search.iterations()
            )?;
            match search.closest() {
                Some(step) => writeln!(
                    out,
                    "  Closest: {} with revenue change {}",
                    format_delta(step.value),
                    format_currency_change(step.revenue_change)
                ),
                None => Ok(()),
            }
        }
    }
}
