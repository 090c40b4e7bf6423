//! Day count conventions.
//!
//! A day count convention turns two dates into a number of days and a
//! year fraction. Rate calculations over irregular cash flows use
//! [`Act365Fixed`]: actual calendar days over a fixed 365-day year, as
//! spreadsheet `XIRR` does.
//!
//! # Usage
//!
//! ```rust
//! use xirr_core::daycounts::{Act365Fixed, DayCount};
//! use xirr_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 365);
//! assert_eq!(dc.year_fraction(start, end), dec!(1));
//! ```

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;
use rust_decimal::Decimal;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Returns the number of days in the year basis.
    fn year_basis(&self) -> i64;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` precedes `start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
