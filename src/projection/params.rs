//! Parameters for a two-trajectory savings projection

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Default starting principal
pub const DEFAULT_INITIAL_AMOUNT: f64 = 500_000.0;

/// Default monthly contribution for the baseline plan
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 10_000.0;

/// Default annual growth rate of the baseline plan (8%)
pub const DEFAULT_BASELINE_ANNUAL_RATE: f64 = 0.08;

/// Default annual growth rate of the what-if alternative (12%)
pub const DEFAULT_ALTERNATIVE_ANNUAL_RATE: f64 = 0.12;

/// Default contribution multiplier of the what-if alternative ("save 50% more")
pub const DEFAULT_CONTRIBUTION_MULTIPLIER: f64 = 1.5;

/// Default horizon: 10 years
pub const DEFAULT_HORIZON_MONTHS: u32 = 120;

/// Inputs for a single projection run
///
/// Built by the caller from form state on demand and passed by value into
/// [`project`](super::project); the engine never reads ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParameters {
    /// Starting principal, shared by both trajectories
    pub initial_amount: f64,

    /// Amount added at the end of each month on the baseline trajectory
    pub monthly_contribution: f64,

    /// Fractional annual rate of the baseline (0.08 = 8%)
    pub baseline_annual_rate: f64,

    /// Fractional annual rate of the alternative
    pub alternative_annual_rate: f64,

    /// Scalar applied to `monthly_contribution` on the alternative trajectory
    pub alternative_contribution_multiplier: f64,

    /// Months to project; month 0 is always emitted
    pub horizon_months: u32,
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            initial_amount: DEFAULT_INITIAL_AMOUNT,
            monthly_contribution: DEFAULT_MONTHLY_CONTRIBUTION,
            baseline_annual_rate: DEFAULT_BASELINE_ANNUAL_RATE,
            alternative_annual_rate: DEFAULT_ALTERNATIVE_ANNUAL_RATE,
            alternative_contribution_multiplier: DEFAULT_CONTRIBUTION_MULTIPLIER,
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

impl ProjectionParameters {
    /// Monthly contribution on the alternative trajectory
    pub fn alternative_contribution(&self) -> f64 {
        self.monthly_contribution * self.alternative_contribution_multiplier
    }

    /// Check the constraints the engine enforces.
    ///
    /// Only the principal is checked here; rates and contributions are
    /// accepted as-is, including negative or zero contributions.
    pub fn validate(&self) -> Result<()> {
        // NaN fails this comparison too
        if !(self.initial_amount >= 0.0) {
            return Err(ProjectionError::invalid(
                "initial_amount",
                format!("must be a non-negative amount, got {}", self.initial_amount),
            ));
        }
        Ok(())
    }
}

/// Coerce a raw horizon (as typed into a form) into a month count.
///
/// Rejects negative, fractional and non-finite values rather than clamping.
pub fn horizon_from_months(raw: f64) -> Result<u32> {
    if !raw.is_finite() {
        return Err(ProjectionError::invalid(
            "horizon_months",
            format!("must be finite, got {}", raw),
        ));
    }
    if raw < 0.0 {
        return Err(ProjectionError::invalid(
            "horizon_months",
            format!("must not be negative, got {}", raw),
        ));
    }
    if raw.fract() != 0.0 {
        return Err(ProjectionError::invalid(
            "horizon_months",
            format!("must be a whole number of months, got {}", raw),
        ));
    }
    if raw > u32::MAX as f64 {
        return Err(ProjectionError::invalid(
            "horizon_months",
            format!("{} months does not fit the month counter", raw),
        ));
    }
    Ok(raw as u32)
}

/// Coerce a raw horizon given in years; the result must still be whole months.
pub fn horizon_from_years(raw_years: f64) -> Result<u32> {
    horizon_from_months(raw_years * 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_planner_chart() {
        let params = ProjectionParameters::default();
        assert_eq!(params.initial_amount, 500_000.0);
        assert_eq!(params.monthly_contribution, 10_000.0);
        assert_eq!(params.horizon_months, 120);
        assert_eq!(params.alternative_contribution(), 15_000.0);
    }

    #[test]
    fn test_negative_initial_amount_rejected() {
        let params = ProjectionParameters {
            initial_amount: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ProjectionError::InvalidParameter { name: "initial_amount", .. })
        ));
    }

    #[test]
    fn test_nan_initial_amount_rejected() {
        let params = ProjectionParameters {
            initial_amount: f64::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_negative_contribution_accepted() {
        let params = ProjectionParameters {
            monthly_contribution: -2_000.0,
            baseline_annual_rate: -0.5,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_horizon_negative_rejected() {
        assert!(matches!(
            horizon_from_months(-1.0),
            Err(ProjectionError::InvalidParameter { name: "horizon_months", .. })
        ));
    }

    #[test]
    fn test_horizon_fractional_rejected() {
        assert!(horizon_from_months(12.5).is_err());
        assert!(horizon_from_months(f64::INFINITY).is_err());
        assert!(horizon_from_months(f64::NAN).is_err());
    }

    #[test]
    fn test_horizon_from_years() {
        assert_eq!(horizon_from_years(10.0).unwrap(), 120);
        assert_eq!(horizon_from_years(0.5).unwrap(), 6);
        // 1/7 of a year is not a whole number of months
        assert!(horizon_from_years(1.0 / 7.0).is_err());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let params: ProjectionParameters =
            serde_json::from_str(r#"{"horizon_months": 24, "baseline_annual_rate": 0.05}"#).unwrap();
        assert_eq!(params.horizon_months, 24);
        assert_eq!(params.baseline_annual_rate, 0.05);
        assert_eq!(params.initial_amount, DEFAULT_INITIAL_AMOUNT);
    }
}
