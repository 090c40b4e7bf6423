//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
///
/// Values are carried as `f64` for reporting, whichever numeric type the
/// failing computation used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The derivative vanished at an iterate; Newton's step is undefined.
    #[error("Derivative is zero at x = {x}, iteration {iteration}. Try another guess.")]
    DerivativeZero {
        /// The iterate where the derivative is zero.
        x: f64,
        /// 1-based iteration number.
        iteration: u32,
    },

    /// Root-finding algorithm failed to converge.
    #[error("Exceeded max iterations limit of {iterations}.")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
    },

    /// The function or its derivative could not be evaluated.
    #[error("Function is not finite at x = {x}, iteration {iteration}")]
    NotFinite {
        /// The iterate where evaluation failed.
        x: f64,
        /// 1-based iteration number.
        iteration: u32,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32) -> Self {
        Self::ConvergenceFailed { iterations }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
