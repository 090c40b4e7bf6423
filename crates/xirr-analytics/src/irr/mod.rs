//! Internal rate of return over irregular dated cash flows.
//!
//! The pipeline runs one way:
//!
//! 1. [`NormalizedCashflow`] turns dates into Act/365 offsets from the first
//!    entry.
//! 2. [`NpvFunctions`] evaluates the NPV and its analytic derivative.
//! 3. Newton-Raphson from `xirr_math` finds the root.
//! 4. [`IrrCalculator`] rejects roots at or below -1 and turns solver
//!    failures into a missing rate.
//!
//! [`Irr`] runs over `f64`. [`HighPrecisionIrr`] runs the same code over
//! `Decimal` and exists to validate the `f64` results, see [`precision`].

mod calculator;
mod normalize;
mod npv;
pub mod precision;

pub use calculator::{xirr, HighPrecisionIrr, Irr, IrrCalculator, IrrOutcome};
pub use normalize::{NormalizedCashflow, MIN_ENTRIES};
pub use npv::{npv_derivative, npv_function, NpvFunctions};
pub use precision::{compare, PrecisionReport};
