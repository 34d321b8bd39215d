//! Savings Projection - compounding projections for a personal-finance planner
//!
//! This library provides:
//! - Baseline vs what-if projections under monthly compounding with contributions
//! - Gain of the what-if plan at the end of the horizon
//! - Coercion of planner form inputs and parallel scenario batches
//! - Household budget insights (surplus, debt-free horizon, emergency cover)
//! - Display helpers for currency and month labels

pub mod error;
pub mod projection;
pub mod scenario;
pub mod config;
pub mod overview;
pub mod format;

// Re-export commonly used types
pub use error::{InputError, ProjectionError};
pub use projection::{
    project, projected_gain, ProjectedGain, ProjectionEngine, ProjectionParameters,
    ProjectionPoint, ProjectionSeries, SeriesSummary,
};
pub use scenario::{run_batch, NamedScenario, ScenarioInputs, ScenarioOutcome, ScenarioRunner};
pub use overview::BudgetSnapshot;
