//! Scenario inputs and batch runner
//!
//! Planner form state (percent rates, horizon in months or years, a one-time
//! purchase taken out of savings) is coerced here into
//! [`ProjectionParameters`]. The runner then projects many scenarios or
//! rate variations in parallel.

pub mod loader;

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::projection::{
    horizon_from_months, horizon_from_years, project, ProjectionParameters, ProjectionSeries,
    DEFAULT_ALTERNATIVE_ANNUAL_RATE, DEFAULT_BASELINE_ANNUAL_RATE, DEFAULT_CONTRIBUTION_MULTIPLIER,
    DEFAULT_HORIZON_MONTHS, DEFAULT_INITIAL_AMOUNT,
};

pub use loader::{load_scenarios, load_scenarios_from_reader, write_series_csv};

/// Longest horizon accepted from user input (100 years)
pub const MAX_HORIZON_MONTHS: u32 = 1_200;

/// Default monthly SIP in the scenario planner form
pub const DEFAULT_MONTHLY_SAVINGS: f64 = 15_000.0;

/// Raw scenario inputs as entered in the planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    /// Current savings before any purchase
    pub initial_amount: f64,

    /// One-time purchase paid out of the initial amount
    pub one_time_purchase: f64,

    /// Monthly savings on the current plan
    pub monthly_savings: f64,

    /// Annual growth of the current plan, in percent
    pub baseline_rate_pct: f64,

    /// Annual growth of the what-if plan, in percent
    pub alternative_rate_pct: f64,

    /// Multiplier on monthly savings for the what-if plan
    pub contribution_multiplier: f64,

    /// Horizon in months; ignored when `horizon_years` is set
    pub horizon_months: f64,

    /// Horizon in years
    pub horizon_years: Option<f64>,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            initial_amount: DEFAULT_INITIAL_AMOUNT,
            one_time_purchase: 0.0,
            monthly_savings: DEFAULT_MONTHLY_SAVINGS,
            baseline_rate_pct: DEFAULT_BASELINE_ANNUAL_RATE * 100.0,
            alternative_rate_pct: DEFAULT_ALTERNATIVE_ANNUAL_RATE * 100.0,
            contribution_multiplier: DEFAULT_CONTRIBUTION_MULTIPLIER,
            horizon_months: DEFAULT_HORIZON_MONTHS as f64,
            horizon_years: None,
        }
    }
}

impl ScenarioInputs {
    /// Horizon in whole months, bounded by [`MAX_HORIZON_MONTHS`]
    pub fn horizon(&self) -> Result<u32> {
        let months = match self.horizon_years {
            Some(years) => horizon_from_years(years)?,
            None => horizon_from_months(self.horizon_months)?,
        };
        if months > MAX_HORIZON_MONTHS {
            return Err(ProjectionError::invalid(
                "horizon_months",
                format!("{} months exceeds the limit of {}", months, MAX_HORIZON_MONTHS),
            ));
        }
        Ok(months)
    }

    /// Coerce into engine parameters
    pub fn to_parameters(&self) -> Result<ProjectionParameters> {
        if !(self.initial_amount >= 0.0) {
            return Err(ProjectionError::invalid(
                "initial_amount",
                format!("must be a non-negative amount, got {}", self.initial_amount),
            ));
        }
        let initial_amount = self.initial_amount - self.one_time_purchase;
        if !(initial_amount >= 0.0) {
            return Err(ProjectionError::invalid(
                "one_time_purchase",
                format!(
                    "purchase of {} exceeds the initial amount of {}",
                    self.one_time_purchase, self.initial_amount
                ),
            ));
        }

        let params = ProjectionParameters {
            initial_amount,
            monthly_contribution: self.monthly_savings,
            baseline_annual_rate: self.baseline_rate_pct / 100.0,
            alternative_annual_rate: self.alternative_rate_pct / 100.0,
            alternative_contribution_multiplier: self.contribution_multiplier,
            horizon_months: self.horizon()?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Coerce and project in one step
    pub fn simulate(&self) -> Result<ProjectionSeries> {
        project(&self.to_parameters()?)
    }
}

/// Scenario with a display name, as loaded from a batch file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub inputs: ScenarioInputs,
}

/// Result of one scenario in a batch
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ProjectionSeries>,
}

/// Project every scenario independently, in parallel, preserving input order
pub fn run_batch(scenarios: &[NamedScenario]) -> Vec<ScenarioOutcome> {
    info!("running {} scenarios", scenarios.len());

    scenarios
        .par_iter()
        .map(|scenario| {
            let result = scenario.inputs.simulate();
            if let Err(err) = &result {
                warn!("scenario {:?} failed: {}", scenario.name, err);
            }
            ScenarioOutcome {
                name: scenario.name.clone(),
                result,
            }
        })
        .collect()
}

/// Runner holding base parameters for variations
///
/// # Example
/// ```
/// use savings_projection::ScenarioRunner;
///
/// let runner = ScenarioRunner::default();
/// let sweep = runner.sweep_alternative_rate(&[0.10, 0.12, 0.14]);
/// assert_eq!(sweep.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base: ProjectionParameters,
}

impl ScenarioRunner {
    pub fn new(base: ProjectionParameters) -> Self {
        Self { base }
    }

    /// Project the base parameters
    pub fn run(&self) -> Result<ProjectionSeries> {
        project(&self.base)
    }

    /// Project a copy of the base parameters after applying `adjust`
    pub fn run_with<F>(&self, adjust: F) -> Result<ProjectionSeries>
    where
        F: FnOnce(&mut ProjectionParameters),
    {
        let mut params = self.base.clone();
        adjust(&mut params);
        project(&params)
    }

    /// One projection per what-if annual rate, in input order
    pub fn sweep_alternative_rate(&self, rates: &[f64]) -> Vec<Result<ProjectionSeries>> {
        rates
            .par_iter()
            .map(|&rate| self.run_with(|p| p.alternative_annual_rate = rate))
            .collect()
    }

    /// One projection per what-if contribution multiplier, in input order
    pub fn sweep_multiplier(&self, multipliers: &[f64]) -> Vec<Result<ProjectionSeries>> {
        multipliers
            .par_iter()
            .map(|&m| self.run_with(|p| p.alternative_contribution_multiplier = m))
            .collect()
    }

    /// Get reference to base parameters for inspection
    pub fn base(&self) -> &ProjectionParameters {
        &self.base
    }

    /// Get mutable reference to base parameters for customization
    pub fn base_mut(&mut self) -> &mut ProjectionParameters {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_convert_percentages() {
        let params = ScenarioInputs::default().to_parameters().unwrap();
        assert_eq!(params.initial_amount, 500_000.0);
        assert_eq!(params.monthly_contribution, 15_000.0);
        assert!((params.baseline_annual_rate - 0.08).abs() < 1e-12);
        assert!((params.alternative_annual_rate - 0.12).abs() < 1e-12);
        assert_eq!(params.horizon_months, 120);
    }

    #[test]
    fn test_one_time_purchase_reduces_opening_balance() {
        let inputs = ScenarioInputs {
            one_time_purchase: 140_000.0,
            ..Default::default()
        };
        let series = inputs.simulate().unwrap();
        assert_eq!(series.points()[0].baseline_value, 360_000);
        assert_eq!(series.points()[0].alternative_value, 360_000);
    }

    #[test]
    fn test_purchase_larger_than_savings_rejected() {
        let inputs = ScenarioInputs {
            one_time_purchase: 600_000.0,
            ..Default::default()
        };
        assert!(matches!(
            inputs.to_parameters(),
            Err(ProjectionError::InvalidParameter { name: "one_time_purchase", .. })
        ));
    }

    #[test]
    fn test_negative_horizon_rejected() {
        let inputs = ScenarioInputs {
            horizon_months: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            inputs.to_parameters(),
            Err(ProjectionError::InvalidParameter { name: "horizon_months", .. })
        ));
    }

    #[test]
    fn test_horizon_years_override_months() {
        let by_years = ScenarioInputs {
            horizon_months: 3.0,
            horizon_years: Some(5.0),
            ..Default::default()
        };
        let by_months = ScenarioInputs {
            horizon_months: 60.0,
            ..Default::default()
        };
        assert_eq!(by_years.simulate().unwrap(), by_months.simulate().unwrap());
    }

    #[test]
    fn test_horizon_limit() {
        let inputs = ScenarioInputs {
            horizon_months: (MAX_HORIZON_MONTHS + 1) as f64,
            ..Default::default()
        };
        assert!(inputs.to_parameters().is_err());

        let inputs = ScenarioInputs {
            horizon_months: MAX_HORIZON_MONTHS as f64,
            ..Default::default()
        };
        assert!(inputs.to_parameters().is_ok());
    }

    #[test]
    fn test_run_batch_preserves_order_and_isolates_failures() {
        let scenarios = vec![
            NamedScenario { name: "plan".into(), inputs: ScenarioInputs::default() },
            NamedScenario {
                name: "broken".into(),
                inputs: ScenarioInputs { horizon_months: 1.5, ..Default::default() },
            },
            NamedScenario {
                name: "short".into(),
                inputs: ScenarioInputs { horizon_months: 12.0, ..Default::default() },
            },
        ];

        let outcomes = run_batch(&scenarios);
        let names: Vec<_> = outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["plan", "broken", "short"]);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert_eq!(outcomes[2].result.as_ref().unwrap().len(), 13);
    }

    #[test]
    fn test_sweep_matches_individual_runs() {
        let runner = ScenarioRunner::default();
        let rates = [0.06, 0.12, 0.18];
        let sweep = runner.sweep_alternative_rate(&rates);
        assert_eq!(sweep.len(), 3);

        for (series, &rate) in sweep.iter().zip(&rates) {
            let expected = project(&ProjectionParameters {
                alternative_annual_rate: rate,
                ..ProjectionParameters::default()
            })
            .unwrap();
            assert_eq!(series.as_ref().unwrap(), &expected);
        }

        // Higher what-if rate should result in a higher final alternative
        let finals: Vec<i64> = sweep
            .iter()
            .map(|s| s.as_ref().unwrap().summary().unwrap().final_alternative)
            .collect();
        assert!(finals[0] < finals[1] && finals[1] < finals[2]);
    }

    #[test]
    fn test_sweep_multiplier_and_base_mut() {
        let mut runner = ScenarioRunner::default();
        runner.base_mut().horizon_months = 24;
        assert_eq!(runner.base().horizon_months, 24);

        let sweep = runner.sweep_multiplier(&[1.0, 2.0]);
        let low = sweep[0].as_ref().unwrap().summary().unwrap();
        let high = sweep[1].as_ref().unwrap().summary().unwrap();
        assert_eq!(low.months, 24);
        assert!(high.alternative_contributed > low.alternative_contributed);
        assert_eq!(runner.run().unwrap().len(), 25);
    }
}
