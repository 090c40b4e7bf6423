//! # XIRR Math
//!
//! Numerical building blocks for rate of return calculations.
//!
//! This crate provides:
//!
//! - **Numeric abstraction**: [`Real`], implemented for `f64` and
//!   `rust_decimal::Decimal`, so one algorithm serves both the fast binary
//!   floating point path and the high-precision decimal path
//! - **Solvers**: Newton-Raphson root finding over injected closures
//!
//! ## Design Philosophy
//!
//! - **Generic**: Works with `f64` and `Decimal` through the same code
//! - **No hidden state**: every solve is a pure function of its inputs
//! - **Explicit outcomes**: solver failures are values, not panics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod numeric;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::numeric::Real;
    pub use crate::solvers::{newton_raphson, SolverConfig, SolverOutcome};
}

pub use error::{MathError, MathResult};
pub use numeric::Real;
