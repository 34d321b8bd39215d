//! Error types for projections and for the input/output edge

use thiserror::Error;

/// Errors raised by the projection engine and parameter coercion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// A parameter is outside the domain the engine accepts
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// Percentage gain requested against a zero baseline
    #[error("percentage gain is undefined when the final baseline value is zero")]
    DivisionUndefined,

    /// A value does not fit whole monetary units (non-finite or beyond `i64`)
    #[error("{what} at month {month} is outside the representable range")]
    OutOfRange {
        what: &'static str,
        month: u32,
    },
}

impl ProjectionError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading inputs or writing outputs
#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Environment override that does not parse as a number
    #[error("environment variable {key}={value:?} is not a number")]
    Env { key: String, value: String },

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Result alias for projection operations
pub type Result<T> = std::result::Result<T, ProjectionError>;
