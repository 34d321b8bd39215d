//! Core projection engine for monthly compounding with recurring contributions

use log::debug;

use super::params::ProjectionParameters;
use super::series::{ProjectionPoint, ProjectionSeries};
use super::state::{round_to_unit, TrajectoryState};
use crate::error::{ProjectionError, Result};

/// Projection engine for one set of parameters
pub struct ProjectionEngine {
    params: ProjectionParameters,
}

impl ProjectionEngine {
    /// Create a new engine, rejecting parameters outside the accepted domain
    pub fn new(params: ProjectionParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &ProjectionParameters {
        &self.params
    }

    /// Run the projection from month 0 to the horizon.
    ///
    /// Fails with [`ProjectionError::OutOfRange`] at the first month whose
    /// balance no longer fits whole units, so extreme rates never saturate.
    pub fn run(&self) -> Result<ProjectionSeries> {
        let params = &self.params;
        debug!(
            "projecting {} months from {} (baseline {:.4}, alternative {:.4}, multiplier {})",
            params.horizon_months,
            params.initial_amount,
            params.baseline_annual_rate,
            params.alternative_annual_rate,
            params.alternative_contribution_multiplier,
        );

        let mut baseline = TrajectoryState::new(
            params.initial_amount,
            params.baseline_annual_rate,
            params.monthly_contribution,
        );
        let mut alternative = TrajectoryState::new(
            params.initial_amount,
            params.alternative_annual_rate,
            params.alternative_contribution(),
        );

        let mut points = Vec::with_capacity(params.horizon_months as usize + 1);
        let opening = round_to_unit(params.initial_amount)
            .ok_or(ProjectionError::OutOfRange { what: "initial amount", month: 0 })?;
        points.push(ProjectionPoint {
            month: 0,
            baseline_value: opening,
            alternative_value: opening,
        });

        for month in 1..=params.horizon_months {
            baseline.advance_month();
            alternative.advance_month();

            // Rounding is per emitted value; the states keep full precision
            let baseline_value = baseline
                .rounded_balance()
                .ok_or(ProjectionError::OutOfRange { what: "baseline balance", month })?;
            let alternative_value = alternative
                .rounded_balance()
                .ok_or(ProjectionError::OutOfRange { what: "alternative balance", month })?;

            points.push(ProjectionPoint {
                month,
                baseline_value,
                alternative_value,
            });
        }

        Ok(ProjectionSeries {
            parameters: params.clone(),
            points,
            baseline_contributed: baseline.contributed,
            alternative_contributed: alternative.contributed,
        })
    }
}

/// Project both trajectories for the given parameters
pub fn project(params: &ProjectionParameters) -> Result<ProjectionSeries> {
    ProjectionEngine::new(params.clone())?.run()
}
