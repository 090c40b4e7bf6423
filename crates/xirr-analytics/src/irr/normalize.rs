//! Cash flow normalization relative to a time origin.

use xirr_core::daycounts::{Act365Fixed, DayCount};
use xirr_core::Cashflow;
use xirr_math::Real;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Minimum number of entries an IRR can be computed from.
pub const MIN_ENTRIES: usize = 2;

/// A cash flow reduced to day offsets and numeric amounts.
///
/// Offsets count calendar days from the first entry, so `offsets()[0]` is
/// always 0 and the others may be negative. `times()` holds the same offsets
/// as Act/365 year fractions in the target numeric type.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCashflow<T = f64> {
    offsets: Vec<i64>,
    times: Vec<T>,
    amounts: Vec<T>,
}

impl<T: Real> NormalizedCashflow<T> {
    /// Normalizes a cash flow against its first entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the cash flow has fewer than two entries
    /// or an amount cannot be represented in `T`.
    pub fn from_cashflow(cashflow: &Cashflow) -> AnalyticsResult<Self> {
        if cashflow.len() < MIN_ENTRIES {
            return Err(AnalyticsError::invalid_input(format!(
                "cash flow needs at least {MIN_ENTRIES} entries, got {}",
                cashflow.len()
            )));
        }

        let dc = Act365Fixed;
        let basis = T::from_int(dc.year_basis());
        let origin = cashflow.entries()[0].date();

        let mut offsets = Vec::with_capacity(cashflow.len());
        let mut times = Vec::with_capacity(cashflow.len());
        let mut amounts = Vec::with_capacity(cashflow.len());

        for entry in cashflow {
            let days = dc.day_count(origin, entry.date());
            let time = T::from_int(days).checked_div(basis).ok_or_else(|| {
                AnalyticsError::invalid_input(format!("day offset {days} is out of range"))
            })?;
            let amount = T::from_decimal(entry.amount()).ok_or_else(|| {
                AnalyticsError::invalid_input(format!(
                    "amount {} is not representable",
                    entry.amount()
                ))
            })?;

            offsets.push(days);
            times.push(time);
            amounts.push(amount);
        }

        Ok(Self {
            offsets,
            times,
            amounts,
        })
    }

    /// Day offsets from the origin entry.
    #[must_use]
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }

    /// Offsets as year fractions.
    #[must_use]
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Signed amounts.
    #[must_use]
    pub fn amounts(&self) -> &[T] {
        &self.amounts
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Always false for a successfully normalized cash flow.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}
