//! Load scenario batches from CSV and export projected series

use std::io::{Read, Write};
use std::path::Path;

use csv::{Reader, Writer};
use log::debug;

use super::{NamedScenario, ScenarioInputs, DEFAULT_MONTHLY_SAVINGS};
use crate::error::InputError;
use crate::projection::{
    ProjectionSeries, DEFAULT_ALTERNATIVE_ANNUAL_RATE, DEFAULT_BASELINE_ANNUAL_RATE,
    DEFAULT_CONTRIBUTION_MULTIPLIER, DEFAULT_HORIZON_MONTHS, DEFAULT_INITIAL_AMOUNT,
};

/// Raw CSV row; every column except `name` is optional
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    #[serde(default = "default_initial_amount")]
    initial_amount: f64,
    #[serde(default)]
    one_time_purchase: f64,
    #[serde(default = "default_monthly_savings")]
    monthly_savings: f64,
    #[serde(default = "default_baseline_rate_pct")]
    baseline_rate_pct: f64,
    #[serde(default = "default_alternative_rate_pct")]
    alternative_rate_pct: f64,
    #[serde(default = "default_contribution_multiplier")]
    contribution_multiplier: f64,
    #[serde(default = "default_horizon_months")]
    horizon_months: f64,
    #[serde(default)]
    horizon_years: Option<f64>,
}

fn default_initial_amount() -> f64 { DEFAULT_INITIAL_AMOUNT }
fn default_monthly_savings() -> f64 { DEFAULT_MONTHLY_SAVINGS }
fn default_baseline_rate_pct() -> f64 { DEFAULT_BASELINE_ANNUAL_RATE * 100.0 }
fn default_alternative_rate_pct() -> f64 { DEFAULT_ALTERNATIVE_ANNUAL_RATE * 100.0 }
fn default_contribution_multiplier() -> f64 { DEFAULT_CONTRIBUTION_MULTIPLIER }
fn default_horizon_months() -> f64 { DEFAULT_HORIZON_MONTHS as f64 }

impl CsvRow {
    fn into_scenario(self) -> NamedScenario {
        NamedScenario {
            name: self.name,
            inputs: ScenarioInputs {
                initial_amount: self.initial_amount,
                one_time_purchase: self.one_time_purchase,
                monthly_savings: self.monthly_savings,
                baseline_rate_pct: self.baseline_rate_pct,
                alternative_rate_pct: self.alternative_rate_pct,
                contribution_multiplier: self.contribution_multiplier,
                horizon_months: self.horizon_months,
                horizon_years: self.horizon_years,
            },
        }
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, InputError> {
    debug!("loading scenarios from {}", path.as_ref().display());
    let file = std::fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<NamedScenario>, InputError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }

    Ok(scenarios)
}

/// Write one `month,baseline_value,alternative_value` row per point
pub fn write_series_csv<W: Write>(writer: W, series: &ProjectionSeries) -> Result<(), InputError> {
    let mut csv_writer = Writer::from_writer(writer);
    for point in series.points() {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}
