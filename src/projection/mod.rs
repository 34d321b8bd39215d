//! Projection engine for baseline and what-if savings trajectories

mod state;
mod params;
mod engine;
mod series;
mod gain;

pub use state::{round_to_unit, TrajectoryState};
pub use params::{
    horizon_from_months, horizon_from_years, ProjectionParameters,
    DEFAULT_ALTERNATIVE_ANNUAL_RATE, DEFAULT_BASELINE_ANNUAL_RATE, DEFAULT_CONTRIBUTION_MULTIPLIER,
    DEFAULT_HORIZON_MONTHS, DEFAULT_INITIAL_AMOUNT, DEFAULT_MONTHLY_CONTRIBUTION,
};
pub use engine::{project, ProjectionEngine};
pub use series::{ProjectionPoint, ProjectionSeries, SeriesSummary};
pub use gain::{projected_gain, ProjectedGain};
