//! Net present value of a normalized cash flow and its analytic derivative.
//!
//! With `t_i = offset_i / 365`:
//!
//! ```text
//! NPV(x)  = a_0 + Σ_{i≥1} a_i / (1 + x)^t_i
//! NPV'(x) = Σ_{i≥1} -t_i · a_i · (1 + x)^(-1 - t_i)
//! ```
//!
//! Both are real only for `x > -1`. Below that they exist only where every
//! exponent is a whole number, and evaluate to `None` otherwise.

use xirr_math::Real;

use super::normalize::NormalizedCashflow;

/// NPV and derivative evaluators bound to one normalized cash flow.
#[derive(Debug, Clone, Copy)]
pub struct NpvFunctions<'a, T> {
    cashflow: &'a NormalizedCashflow<T>,
}

impl<'a, T: Real> NpvFunctions<'a, T> {
    /// Binds the evaluators to a normalized cash flow.
    #[must_use]
    pub fn new(cashflow: &'a NormalizedCashflow<T>) -> Self {
        Self { cashflow }
    }

    /// Net present value at rate `x`, discounted to the origin entry.
    #[must_use]
    pub fn npv_at(&self, x: T) -> Option<T> {
        let base = T::ONE.checked_add(x)?;
        let amounts = self.cashflow.amounts();
        let times = self.cashflow.times();

        let mut sum = amounts[0];
        for (&amount, &time) in amounts.iter().zip(times).skip(1) {
            let discounted = amount.checked_div(base.checked_power(time)?)?;
            sum = sum.checked_add(discounted)?;
        }
        Some(sum)
    }

    /// First derivative of [`npv_at`](Self::npv_at) with respect to `x`.
    #[must_use]
    pub fn derivative_at(&self, x: T) -> Option<T> {
        let base = T::ONE.checked_add(x)?;
        let amounts = self.cashflow.amounts();
        let times = self.cashflow.times();

        let mut sum = T::ZERO;
        for (&amount, &time) in amounts.iter().zip(times).skip(1) {
            let exponent = T::ZERO.checked_sub(T::ONE)?.checked_sub(time)?;
            let term = T::ZERO
                .checked_sub(time)?
                .checked_mul(amount)?
                .checked_mul(base.checked_power(exponent)?)?;
            sum = sum.checked_add(term)?;
        }
        Some(sum)
    }
}

/// Returns the NPV of `cashflow` as a function of the rate.
pub fn npv_function<T: Real>(cashflow: &NormalizedCashflow<T>) -> impl Fn(T) -> Option<T> + '_ {
    let functions = NpvFunctions::new(cashflow);
    move |x| functions.npv_at(x)
}

/// Returns the derivative of the NPV of `cashflow` as a function of the rate.
pub fn npv_derivative<T: Real>(
    cashflow: &NormalizedCashflow<T>,
) -> impl Fn(T) -> Option<T> + '_ {
    let functions = NpvFunctions::new(cashflow);
    move |x| functions.derivative_at(x)
}
