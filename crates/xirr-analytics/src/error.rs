//! Error types for the analytics crate.

use thiserror::Error;
use xirr_core::CoreError;
use xirr_math::MathError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Hard failures of an analytics call.
///
/// Numerical non-convergence is not an error here; it is reported as a
/// missing rate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// The caller supplied data the calculation cannot start from.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A core domain value could not be built.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A numeric parameter was rejected.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
