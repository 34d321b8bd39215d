//! Gain of the what-if alternative over the baseline plan

use serde::Serialize;

use super::series::ProjectionPoint;
use crate::error::{ProjectionError, Result};

/// Difference between the trajectories at the final month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedGain {
    /// Month the gain was measured at
    pub month: u32,

    /// Final baseline value the percentage is measured against
    pub baseline_value: i64,

    /// Alternative minus baseline
    pub delta: i64,
}

impl ProjectedGain {
    /// Delta as a percentage of the final baseline value.
    ///
    /// Fails with [`ProjectionError::DivisionUndefined`] when the baseline
    /// is zero; callers show the percentage as unavailable in that case.
    pub fn percentage(&self) -> Result<f64> {
        if self.baseline_value == 0 {
            return Err(ProjectionError::DivisionUndefined);
        }
        Ok(self.delta as f64 / self.baseline_value as f64 * 100.0)
    }

    /// Percentage, or `None` when it is unavailable
    pub fn percentage_opt(&self) -> Option<f64> {
        self.percentage().ok()
    }
}

/// Compute the gain from the final point of a projected sequence
pub fn projected_gain(points: &[ProjectionPoint]) -> Result<ProjectedGain> {
    let last = points.last().ok_or_else(|| {
        ProjectionError::invalid("points", "cannot compute a gain over an empty sequence")
    })?;

    let delta = last
        .alternative_value
        .checked_sub(last.baseline_value)
        .ok_or(ProjectionError::OutOfRange { what: "gain", month: last.month })?;

    Ok(ProjectedGain {
        month: last.month,
        baseline_value: last.baseline_value,
        delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(month: u32, baseline_value: i64, alternative_value: i64) -> ProjectionPoint {
        ProjectionPoint {
            month,
            baseline_value,
            alternative_value,
        }
    }

    #[test]
    fn test_gain_uses_final_point() {
        let points = [point(0, 100, 100), point(1, 200, 250)];
        let gain = projected_gain(&points).unwrap();
        assert_eq!(gain.month, 1);
        assert_eq!(gain.delta, 50);
        assert_relative_eq!(gain.percentage().unwrap(), 25.0);
    }

    #[test]
    fn test_negative_gain() {
        let gain = projected_gain(&[point(0, 400, 300)]).unwrap();
        assert_eq!(gain.delta, -100);
        assert_relative_eq!(gain.percentage().unwrap(), -25.0);
    }

    #[test]
    fn test_zero_baseline_percentage_unavailable() {
        let gain = projected_gain(&[point(0, 0, 0), point(1, 0, 1_500)]).unwrap();
        assert_eq!(gain.delta, 1_500);
        assert_eq!(gain.percentage(), Err(ProjectionError::DivisionUndefined));
        assert_eq!(gain.percentage_opt(), None);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(matches!(
            projected_gain(&[]),
            Err(ProjectionError::InvalidParameter { name: "points", .. })
        ));
    }

    #[test]
    fn test_gain_beyond_i64_rejected() {
        let points = [point(0, 1_000, 1_000), point(99, i64::MAX, i64::MIN)];
        assert_eq!(
            projected_gain(&points),
            Err(ProjectionError::OutOfRange { what: "gain", month: 99 })
        );
        assert!(projected_gain(&[point(3, i64::MIN, i64::MAX)]).is_err());
    }
}
