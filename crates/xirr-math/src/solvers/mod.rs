//! Root-finding algorithms.
//!
//! Only Newton-Raphson is provided. It takes the function and its
//! derivative as closures, so the caller decides what is being solved and
//! which numeric type it is solved in.
//!
//! | Parameter | Default | Meaning |
//! |-----------|---------|---------|
//! | `guess` | 0.1 | Starting iterate |
//! | `tolerance` | 1e-8 | Stop once the step size is at most this |
//! | `max_iterations` | 100 | Hard cap on Newton steps |
//!
//! Failures are reported through [`SolverOutcome`] rather than as errors,
//! because a failed solve is an expected result for many cash flows.
//!
//! # Example
//!
//! ```rust
//! use xirr_math::solvers::{newton_raphson, SolverConfig};
//!
//! let config = SolverConfig::new(0.5, 0.001, 10);
//! let outcome = newton_raphson(|x: f64| x * x - 3.0 * x + 1.0, |x: f64| 2.0 * x - 3.0, &config);
//!
//! let root = outcome.root().unwrap();
//! assert!((root - 0.381966).abs() < 1e-5);
//! ```

mod newton;

pub use newton::newton_raphson;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

use crate::error::{MathError, MathResult};
use crate::numeric::Real;

/// Default starting iterate.
pub const DEFAULT_GUESS: f64 = 0.1;

/// Default step-size tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default maximum iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for a Newton-Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T = f64> {
    /// Starting iterate.
    pub guess: T,
    /// Convergence threshold on `|x_{n+1} - x_n|`.
    pub tolerance: T,
    /// Maximum number of Newton steps.
    pub max_iterations: u32,
}

impl<T: Real> SolverConfig<T> {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(guess: T, tolerance: T, max_iterations: u32) -> Self {
        Self {
            guess,
            tolerance,
            max_iterations,
        }
    }

    /// Sets the starting iterate.
    #[must_use]
    pub fn with_guess(mut self, guess: T) -> Self {
        self.guess = guess;
        self
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns the guess with values at or below -1 replaced by 0.
    ///
    /// NPV discounts by `(1 + x)`, which must stay positive for fractional
    /// exponents to be real.
    #[must_use]
    pub fn clamped_guess(&self) -> T {
        let floor = T::ZERO.checked_sub(T::ONE).unwrap_or(T::ZERO);
        if self.guess <= floor {
            T::ZERO
        } else {
            self.guess
        }
    }

    /// Returns a copy with [`clamped_guess`](Self::clamped_guess) applied.
    #[must_use]
    pub fn clamped(self) -> Self {
        let guess = self.clamped_guess();
        self.with_guess(guess)
    }

    /// Checks that the tolerance is positive and at least one step is allowed.
    pub fn validate(&self) -> MathResult<()> {
        if self.tolerance <= T::ZERO {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for SolverConfig<f64> {
    fn default() -> Self {
        Self::new(DEFAULT_GUESS, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }
}

impl Default for SolverConfig<Decimal> {
    fn default() -> Self {
        Self::new(dec!(0.1), dec!(0.00000001), DEFAULT_MAX_ITERATIONS)
    }
}

/// How a Newton-Raphson solve ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolverOutcome<T = f64> {
    /// The step size dropped to the tolerance.
    Converged {
        /// The last iterate.
        root: T,
        /// Newton steps taken.
        iterations: u32,
    },
    /// The derivative was exactly zero, so no step could be taken.
    DerivativeZero {
        /// The iterate where the derivative vanished.
        x: T,
        /// 1-based iteration number.
        iteration: u32,
    },
    /// The iteration cap was reached before convergence.
    IterationLimitExceeded {
        /// The configured cap.
        limit: u32,
    },
    /// The function, its derivative, or the step could not be represented.
    NonFinite {
        /// The iterate where evaluation failed.
        x: T,
        /// 1-based iteration number.
        iteration: u32,
    },
}

impl<T: Real> SolverOutcome<T> {
    /// Returns the root if the solve converged.
    #[must_use]
    pub fn root(&self) -> Option<T> {
        match self {
            Self::Converged { root, .. } => Some(*root),
            _ => None,
        }
    }

    /// Returns true if the solve converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }

    /// Converts the outcome into a result, mapping failures to [`MathError`].
    pub fn into_result(self) -> MathResult<T> {
        match self {
            Self::Converged { root, .. } => Ok(root),
            Self::DerivativeZero { x, iteration } => Err(MathError::DerivativeZero {
                x: x.as_float(),
                iteration,
            }),
            Self::IterationLimitExceeded { limit } => Err(MathError::convergence_failed(limit)),
            Self::NonFinite { x, iteration } => Err(MathError::NotFinite {
                x: x.as_float(),
                iteration,
            }),
        }
    }
}

impl<T: Real> fmt::Display for SolverOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converged { root, iterations } => {
                write!(f, "Converged to {root} after {iterations} iterations.")
            }
            Self::DerivativeZero { x, iteration } => {
                write!(
                    f,
                    "Derivative is zero at x = {x}, iteration {iteration}. Try another guess."
                )
            }
            Self::IterationLimitExceeded { limit } => {
                write!(f, "Exceeded max iterations limit of {limit}.")
            }
            Self::NonFinite { x, iteration } => {
                write!(f, "Function is not finite at x = {x}, iteration {iteration}.")
            }
        }
    }
}
