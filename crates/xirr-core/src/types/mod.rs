//! Domain types for dated cash flows.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`CashflowEntry`]: Signed amount settling on a date
//! - [`Cashflow`]: Ordered sequence of entries, as supplied by the caller

mod cashflow;
mod date;

pub use cashflow::{Cashflow, CashflowEntry};
pub use date::Date;
