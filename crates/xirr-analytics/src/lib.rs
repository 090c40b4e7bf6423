//! # XIRR Analytics
//!
//! Internal rate of return over irregular dated cash flows, and the bond
//! yield calculations built on it.
//!
//! - **IRR**: [`irr::Irr`] over `f64`, [`irr::HighPrecisionIrr`] over
//!   `Decimal`, with the same algorithm and outcome interpretation
//! - **Precision check**: [`irr::precision::compare`] runs both side by side
//! - **Bonds**: [`bonds::BondPosition`] turns a trade, its coupons,
//!   amortization, offers and taxes into a cash flow
//!
//! ## Failure policy
//!
//! Malformed input (fewer than two entries, bad parameters) is an
//! [`AnalyticsError`]. A solve that does not converge, or converges on a
//! root at or below -1, is `Ok(None)` and is logged through the `log`
//! facade.
//!
//! ## Usage
//!
//! ```rust
//! use xirr_analytics::prelude::*;
//! use xirr_core::{Cashflow, Date};
//! use rust_decimal_macros::dec;
//!
//! let cashflow = Cashflow::new()
//!     .with(Date::from_ymd(2008, 1, 1).unwrap(), dec!(-10000))
//!     .with(Date::from_ymd(2008, 3, 1).unwrap(), dec!(2750))
//!     .with(Date::from_ymd(2008, 10, 30).unwrap(), dec!(4250))
//!     .with(Date::from_ymd(2009, 2, 15).unwrap(), dec!(3250))
//!     .with(Date::from_ymd(2009, 4, 1).unwrap(), dec!(2750));
//!
//! let rate = Irr::default().compute(&cashflow).unwrap().unwrap();
//! assert!((rate - 0.373362535).abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bonds;
pub mod error;
pub mod irr;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bonds::{BondEvent, BondPosition};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::irr::{
        compare, xirr, HighPrecisionIrr, Irr, IrrCalculator, IrrOutcome, PrecisionReport,
    };
}
