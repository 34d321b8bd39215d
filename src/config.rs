//! Layered configuration for scenario inputs
//!
//! Defaults, then an optional JSON file, then `PROJECTION_*` environment
//! variables. Command line flags are applied last by the binaries.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::InputError;
use crate::overview::BudgetSnapshot;
use crate::scenario::ScenarioInputs;

pub const ENV_INITIAL_AMOUNT: &str = "PROJECTION_INITIAL_AMOUNT";
pub const ENV_ONE_TIME_PURCHASE: &str = "PROJECTION_ONE_TIME_PURCHASE";
pub const ENV_MONTHLY_SAVINGS: &str = "PROJECTION_MONTHLY_SAVINGS";
pub const ENV_BASELINE_RATE_PCT: &str = "PROJECTION_BASELINE_RATE_PCT";
pub const ENV_ALTERNATIVE_RATE_PCT: &str = "PROJECTION_ALTERNATIVE_RATE_PCT";
pub const ENV_CONTRIBUTION_MULTIPLIER: &str = "PROJECTION_CONTRIBUTION_MULTIPLIER";
pub const ENV_HORIZON_MONTHS: &str = "PROJECTION_HORIZON_MONTHS";
pub const ENV_HORIZON_YEARS: &str = "PROJECTION_HORIZON_YEARS";

/// Read any serde type from a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    debug!("reading config from {}", path.display());
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Scenario inputs from defaults, an optional JSON file and the process environment
pub fn load_scenario_inputs(path: Option<&Path>) -> Result<ScenarioInputs, InputError> {
    let mut inputs = match path {
        Some(path) => read_json(path)?,
        None => ScenarioInputs::default(),
    };
    apply_env_overrides(&mut inputs, |key| env::var(key).ok())?;
    Ok(inputs)
}

/// Budget snapshot from defaults or a JSON file
pub fn load_budget(path: Option<&Path>) -> Result<BudgetSnapshot, InputError> {
    match path {
        Some(path) => read_json(path),
        None => Ok(BudgetSnapshot::default()),
    }
}

/// Apply numeric overrides looked up through `lookup`
pub fn apply_env_overrides<F>(inputs: &mut ScenarioInputs, lookup: F) -> Result<(), InputError>
where
    F: Fn(&str) -> Option<String>,
{
    let parse = |key: &str| -> Result<Option<f64>, InputError> {
        match lookup(key) {
            Some(value) => value
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| InputError::Env {
                    key: key.to_string(),
                    value,
                }),
            None => Ok(None),
        }
    };

    if let Some(v) = parse(ENV_INITIAL_AMOUNT)? {
        inputs.initial_amount = v;
    }
    if let Some(v) = parse(ENV_ONE_TIME_PURCHASE)? {
        inputs.one_time_purchase = v;
    }
    if let Some(v) = parse(ENV_MONTHLY_SAVINGS)? {
        inputs.monthly_savings = v;
    }
    if let Some(v) = parse(ENV_BASELINE_RATE_PCT)? {
        inputs.baseline_rate_pct = v;
    }
    if let Some(v) = parse(ENV_ALTERNATIVE_RATE_PCT)? {
        inputs.alternative_rate_pct = v;
    }
    if let Some(v) = parse(ENV_CONTRIBUTION_MULTIPLIER)? {
        inputs.contribution_multiplier = v;
    }
    if let Some(v) = parse(ENV_HORIZON_MONTHS)? {
        inputs.horizon_months = v;
    }
    if let Some(v) = parse(ENV_HORIZON_YEARS)? {
        inputs.horizon_years = Some(v);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_applied() {
        let mut inputs = ScenarioInputs::default();
        let lookup = lookup_from(&[
            (ENV_MONTHLY_SAVINGS, "20000"),
            (ENV_ALTERNATIVE_RATE_PCT, " 14.5 "),
            (ENV_HORIZON_YEARS, "15"),
        ]);
        apply_env_overrides(&mut inputs, lookup).unwrap();

        assert_eq!(inputs.monthly_savings, 20_000.0);
        assert_eq!(inputs.alternative_rate_pct, 14.5);
        assert_eq!(inputs.horizon_years, Some(15.0));
        assert_eq!(inputs.initial_amount, 500_000.0);
    }

    #[test]
    fn test_env_override_not_a_number() {
        let mut inputs = ScenarioInputs::default();
        let err = apply_env_overrides(&mut inputs, lookup_from(&[(ENV_INITIAL_AMOUNT, "abc")]))
            .unwrap_err();
        match err {
            InputError::Env { key, value } => {
                assert_eq!(key, ENV_INITIAL_AMOUNT);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_partial_config_keeps_defaults() {
        let inputs: ScenarioInputs =
            serde_json::from_str(r#"{"one_time_purchase": 80000, "horizon_years": 20}"#).unwrap();
        assert_eq!(inputs.one_time_purchase, 80_000.0);
        assert_eq!(inputs.horizon().unwrap(), 240);
        assert_eq!(inputs.monthly_savings, 15_000.0);
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let result = read_json::<ScenarioInputs>(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
