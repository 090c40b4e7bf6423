//! Numeric abstraction shared by the floating point and decimal paths.
//!
//! [`Real`] is the capability set the solver and the NPV functions need:
//! checked arithmetic, fractional powers, comparison and a zero test.
//! Every checked operation returns `None` when the result cannot be
//! represented: a non-finite `f64`, or a `Decimal` overflow, division by
//! zero, or a fractional power of a non-positive base.
//!
//! # Example
//!
//! ```rust
//! use xirr_math::Real;
//! use rust_decimal_macros::dec;
//!
//! fn discount<T: Real>(amount: T, rate: T, years: T) -> Option<T> {
//!     let base = T::ONE.checked_add(rate)?;
//!     amount.checked_div(base.checked_power(years)?)
//! }
//!
//! assert!((discount(110.0, 0.1, 1.0).unwrap() - 100.0).abs() < 1e-12);
//! assert_eq!(discount(dec!(110), dec!(0.1), dec!(1)), Some(dec!(100)));
//! assert_eq!(discount(1.0, -2.0, 0.5), None);
//! ```

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};
use std::fmt;

/// A real number type the generic algorithms can be instantiated with.
pub trait Real: Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Larger than any error a solver can measure. Positive infinity for
    /// floats, the largest representable value for decimals.
    const UNBOUNDED: Self;

    /// Converts an integer.
    fn from_int(value: i64) -> Self;

    /// Converts a decimal amount, `None` if it cannot be represented.
    fn from_decimal(value: Decimal) -> Option<Self>;

    /// Converts a float, `None` if it is not finite or out of range.
    fn from_float(value: f64) -> Option<Self>;

    /// Nearest `f64`, for reporting.
    fn as_float(self) -> f64;

    /// `self + rhs`.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// `self / rhs`.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// `self` raised to a possibly fractional power.
    fn checked_power(self, exponent: Self) -> Option<Self>;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Exact zero test.
    fn is_zero(self) -> bool;
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const UNBOUNDED: Self = f64::INFINITY;

    fn from_int(value: i64) -> Self {
        value as f64
    }

    fn from_decimal(value: Decimal) -> Option<Self> {
        ToPrimitive::to_f64(&value).and_then(finite)
    }

    fn from_float(value: f64) -> Option<Self> {
        finite(value)
    }

    fn as_float(self) -> f64 {
        self
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        finite(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        finite(self - rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        finite(self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        finite(self / rhs)
    }

    fn checked_power(self, exponent: Self) -> Option<Self> {
        finite(self.powf(exponent))
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn is_zero(self) -> bool {
        self == 0.0
    }
}

/// 28 significant digits; every operation rounds to that precision.
impl Real for Decimal {
    const ZERO: Self = Decimal::ZERO;
    const ONE: Self = Decimal::ONE;
    const UNBOUNDED: Self = Decimal::MAX;

    fn from_int(value: i64) -> Self {
        Decimal::from(value)
    }

    fn from_decimal(value: Decimal) -> Option<Self> {
        Some(value)
    }

    fn from_float(value: f64) -> Option<Self> {
        <Decimal as FromPrimitive>::from_f64(value)
    }

    fn as_float(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Decimal::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Decimal::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Decimal::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Decimal::checked_div(self, rhs)
    }

    fn checked_power(self, exponent: Self) -> Option<Self> {
        if Decimal::is_zero(&exponent.fract()) {
            let n = ToPrimitive::to_i64(&exponent)?;
            return MathematicalOps::checked_powi(&self, n);
        }
        // ln-based power, real only for positive bases
        if self <= Decimal::ZERO {
            return None;
        }
        MathematicalOps::checked_powd(&self, exponent)
    }

    fn abs(self) -> Self {
        Decimal::abs(&self)
    }

    fn is_zero(self) -> bool {
        Decimal::is_zero(&self)
    }
}
