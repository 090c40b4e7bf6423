//! Dated cash flow entries and cash flow sequences.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// A single dated amount.
///
/// The sign encodes direction: outflows (purchases, commissions, taxes)
/// are negative, inflows (coupons, amortization, redemption) positive.
/// Amounts carry no currency; a cash flow is assumed to be in one currency.
///
/// # Example
///
/// ```rust
/// use xirr_core::types::{CashflowEntry, Date};
/// use rust_decimal_macros::dec;
///
/// let entry = CashflowEntry::new(Date::from_ymd(2008, 2, 5).unwrap(), dec!(-2750));
/// assert!(entry.is_outflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CashflowEntry {
    date: Date,
    amount: Decimal,
}

impl CashflowEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(date: Date, amount: Decimal) -> Self {
        Self { date, amount }
    }

    /// Parses an entry from a date and a decimal amount string.
    pub fn parse(date: &str, amount: &str) -> CoreResult<Self> {
        let date = Date::parse(date)?;
        let amount = Decimal::from_str(amount.trim()).map_err(|_| {
            CoreError::invalid_cashflow(format!("amount is not a number: {amount}"))
        })?;
        Ok(Self::new(date, amount))
    }

    /// Returns the settlement date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if money leaves the holder.
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns true if money reaches the holder.
    #[must_use]
    pub fn is_inflow(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }
}

impl fmt::Display for CashflowEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.amount, self.date)
    }
}

/// An ordered sequence of cash flow entries.
///
/// Order is whatever the caller supplied; entries are never sorted.
/// The first entry only serves as the time origin when the sequence is
/// normalized, it is not assumed to be the earliest date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cashflow {
    entries: Vec<CashflowEntry>,
}

impl Cashflow {
    /// Creates an empty cash flow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cash flow from entries, keeping their order.
    #[must_use]
    pub fn from_entries(entries: Vec<CashflowEntry>) -> Self {
        Self { entries }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: CashflowEntry) {
        self.entries.push(entry);
    }

    /// Appends an entry, builder style.
    #[must_use]
    pub fn with(mut self, date: Date, amount: Decimal) -> Self {
        self.push(CashflowEntry::new(date, amount));
        self
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in caller order.
    #[must_use]
    pub fn entries(&self) -> &[CashflowEntry] {
        &self.entries
    }

    /// Returns the entry used as the time origin (index 0).
    #[must_use]
    pub fn origin(&self) -> Option<&CashflowEntry> {
        self.entries.first()
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, CashflowEntry> {
        self.entries.iter()
    }

    /// Returns the undiscounted sum of all amounts.
    #[must_use]
    pub fn net_amount(&self) -> Decimal {
        self.entries.iter().map(CashflowEntry::amount).sum()
    }

    /// Returns a copy with the entry at `index` moved to the front.
    ///
    /// The remaining entries keep their relative order. Useful to pick a
    /// different time origin.
    #[must_use]
    pub fn with_origin(&self, index: usize) -> Self {
        if index >= self.entries.len() {
            return self.clone();
        }
        let mut entries = Vec::with_capacity(self.entries.len());
        entries.push(self.entries[index]);
        entries.extend(
            self.entries
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, e)| *e),
        );
        Self { entries }
    }
}

impl fmt::Display for Cashflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "]")
    }
}

impl FromIterator<CashflowEntry> for Cashflow {
    fn from_iter<I: IntoIterator<Item = CashflowEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<CashflowEntry> for Cashflow {
    fn extend<I: IntoIterator<Item = CashflowEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Cashflow {
    type Item = CashflowEntry;
    type IntoIter = std::vec::IntoIter<CashflowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cashflow {
    type Item = &'a CashflowEntry;
    type IntoIter = std::slice::Iter<'a, CashflowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<CashflowEntry>> for Cashflow {
    fn from(entries: Vec<CashflowEntry>) -> Self {
        Self::from_entries(entries)
    }
}
