//! IRR calculator over dated cash flows.

use rust_decimal::Decimal;
use std::fmt;

use xirr_core::Cashflow;
use xirr_math::solvers::{newton_raphson, SolverConfig, SolverOutcome};
use xirr_math::Real;

use super::normalize::NormalizedCashflow;
use super::npv::NpvFunctions;
use crate::error::AnalyticsResult;

/// IRR over `f64`.
pub type Irr = IrrCalculator<f64>;

/// IRR over 28-digit `Decimal`, for cross-checking the `f64` path.
pub type HighPrecisionIrr = IrrCalculator<Decimal>;

/// What an IRR solve produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IrrOutcome<T = f64> {
    /// An economically meaningful rate.
    Rate {
        /// Annualized rate as a fraction of 1.
        rate: T,
        /// Newton steps taken.
        iterations: u32,
    },
    /// The solver converged on a root at or below -1.
    RootOutOfDomain {
        /// The rejected root.
        root: T,
    },
    /// The solver did not converge.
    NotFound(SolverOutcome<T>),
}

impl<T: Real> IrrOutcome<T> {
    /// Returns the rate, if one was found.
    #[must_use]
    pub fn rate(&self) -> Option<T> {
        match self {
            Self::Rate { rate, .. } => Some(*rate),
            _ => None,
        }
    }
}

impl<T: Real> fmt::Display for IrrOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rate { rate, iterations } => {
                write!(f, "IRR {rate} found in {iterations} iterations.")
            }
            Self::RootOutOfDomain { root } => {
                write!(f, "Root {root} is at or below -1 and is not a rate.")
            }
            Self::NotFound(outcome) => write!(f, "{outcome}"),
        }
    }
}

/// Computes the internal rate of return of a cash flow.
///
/// The rate `x` solves `NPV(x) = 0` with Newton-Raphson, discounting with
/// Act/365 year fractions from the first entry.
///
/// # Example
///
/// ```rust
/// use xirr_analytics::irr::Irr;
/// use xirr_core::{Cashflow, Date};
/// use rust_decimal_macros::dec;
///
/// let cashflow = Cashflow::new()
///     .with(Date::from_ymd(2008, 2, 5).unwrap(), dec!(-2750))
///     .with(Date::from_ymd(2008, 7, 5).unwrap(), dec!(1000))
///     .with(Date::from_ymd(2009, 1, 5).unwrap(), dec!(2000));
///
/// let rate = Irr::new(0.1, 0.001, 50).compute(&cashflow).unwrap().unwrap();
/// assert!((rate - 0.124).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrCalculator<T = f64> {
    config: SolverConfig<T>,
}

impl<T: Real> IrrCalculator<T> {
    /// Creates a calculator with an explicit guess, tolerance and iteration cap.
    #[must_use]
    pub fn new(guess: T, tolerance: T, max_iterations: u32) -> Self {
        Self::with_config(SolverConfig::new(guess, tolerance, max_iterations))
    }

    /// Creates a calculator from a solver configuration.
    #[must_use]
    pub fn with_config(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Returns the solver configuration as supplied, before guess clamping.
    #[must_use]
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Solves for the IRR and reports how the solve ended.
    ///
    /// # Errors
    ///
    /// Fails only on malformed input: fewer than two entries, an amount
    /// `T` cannot hold, or a non-positive tolerance or zero iteration cap.
    pub fn solve(&self, cashflow: &Cashflow) -> AnalyticsResult<IrrOutcome<T>> {
        self.config.validate()?;
        let normalized = NormalizedCashflow::from_cashflow(cashflow)?;
        let functions = NpvFunctions::new(&normalized);

        let outcome = newton_raphson(
            |x| functions.npv_at(x),
            |x| functions.derivative_at(x),
            &self.config.clamped(),
        );

        Ok(match outcome {
            SolverOutcome::Converged { root, iterations } if root > T::from_int(-1) => {
                IrrOutcome::Rate {
                    rate: root,
                    iterations,
                }
            }
            SolverOutcome::Converged { root, .. } => IrrOutcome::RootOutOfDomain { root },
            other => IrrOutcome::NotFound(other),
        })
    }

    /// Computes the IRR, or `None` if no meaningful rate was found.
    ///
    /// Solver failures and out-of-domain roots are logged at warn level
    /// together with the cash flow.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn compute(&self, cashflow: &Cashflow) -> AnalyticsResult<Option<T>> {
        let outcome = self.solve(cashflow)?;
        match outcome {
            IrrOutcome::Rate { rate, iterations } => {
                log::debug!("IRR {rate} found in {iterations} iterations for {cashflow}");
            }
            IrrOutcome::RootOutOfDomain { .. } | IrrOutcome::NotFound(_) => {
                log::warn!("{outcome} Cashflow: {cashflow}");
            }
        }
        Ok(outcome.rate())
    }
}

impl Default for IrrCalculator<f64> {
    /// Spreadsheet `XIRR` defaults: guess 0.1, tolerance 1e-8, 100 iterations.
    fn default() -> Self {
        Self::with_config(SolverConfig::default())
    }
}

impl Default for IrrCalculator<Decimal> {
    fn default() -> Self {
        Self::with_config(SolverConfig::default())
    }
}

/// Computes the IRR of `cashflow` over `f64`.
///
/// Shorthand for `Irr::new(guess, tolerance, max_iterations).compute(cashflow)`.
pub fn xirr(
    cashflow: &Cashflow,
    guess: f64,
    tolerance: f64,
    max_iterations: u32,
) -> AnalyticsResult<Option<f64>> {
    Irr::new(guess, tolerance, max_iterations).compute(cashflow)
}
