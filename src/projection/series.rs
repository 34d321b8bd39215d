//! Output structures for projections

use serde::{Deserialize, Serialize};

use super::gain::{projected_gain, ProjectedGain};
use super::params::ProjectionParameters;
use super::state::round_to_unit;
use crate::error::{ProjectionError, Result};

/// Projected balances of both trajectories at one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: u32,
    pub baseline_value: i64,
    pub alternative_value: i64,
}

/// Complete projection: one point per month from 0 to the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Parameters the series was produced from
    pub parameters: ProjectionParameters,

    /// Points ordered by month, starting at 0
    pub points: Vec<ProjectionPoint>,

    /// Unrounded principal plus contributions on the baseline
    pub baseline_contributed: f64,

    /// Unrounded principal plus contributions on the alternative
    pub alternative_contributed: f64,
}

impl ProjectionSeries {
    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    /// Final point; a series always holds at least month 0
    pub fn last(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gain of the alternative over the baseline at the final month
    pub fn gain(&self) -> Result<ProjectedGain> {
        projected_gain(&self.points)
    }

    /// Get summary statistics
    pub fn summary(&self) -> Result<SeriesSummary> {
        let (month, final_baseline, final_alternative) = self
            .last()
            .map(|p| (p.month, p.baseline_value, p.alternative_value))
            .unwrap_or((0, 0, 0));
        let out_of_range = |what: &'static str| ProjectionError::OutOfRange { what, month };

        let baseline_contributed = round_to_unit(self.baseline_contributed)
            .ok_or_else(|| out_of_range("baseline contributions"))?;
        let alternative_contributed = round_to_unit(self.alternative_contributed)
            .ok_or_else(|| out_of_range("alternative contributions"))?;

        Ok(SeriesSummary {
            months: self.parameters.horizon_months,
            final_baseline,
            final_alternative,
            baseline_contributed,
            alternative_contributed,
            baseline_growth: final_baseline
                .checked_sub(baseline_contributed)
                .ok_or_else(|| out_of_range("baseline growth"))?,
            alternative_growth: final_alternative
                .checked_sub(alternative_contributed)
                .ok_or_else(|| out_of_range("alternative growth"))?,
        })
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub months: u32,
    pub final_baseline: i64,
    pub final_alternative: i64,
    pub baseline_contributed: i64,
    pub alternative_contributed: i64,
    pub baseline_growth: i64,
    pub alternative_growth: i64,
}
