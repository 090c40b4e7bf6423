//! # XIRR
//!
//! Internal rate of return for irregular, dated cash flows, and bond
//! yield-to-maturity built on it.
//!
//! This crate re-exports the public API of the workspace:
//!
//! - [`xirr_core`]: dates, cash flow entries, the Act/365 day count
//! - [`xirr_math`]: the [`Real`](xirr_math::Real) numeric abstraction and
//!   Newton-Raphson
//! - [`xirr_analytics`]: IRR calculators, the precision cross-check, bond
//!   positions
//!
//! ```rust
//! use xirr::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let cashflow = Cashflow::new()
//!     .with(Date::parse("2008-02-05").unwrap(), dec!(-2750))
//!     .with(Date::parse("2008-07-05").unwrap(), dec!(1000))
//!     .with(Date::parse("2009-01-05").unwrap(), dec!(2000));
//!
//! let rate = xirr(&cashflow, 0.1, 0.001, 50).unwrap();
//! assert!(rate.is_some_and(|r| (r - 0.124).abs() < 0.001));
//! ```

#![warn(missing_docs)]

pub use xirr_analytics;
pub use xirr_core;
pub use xirr_math;

pub use xirr_analytics::{AnalyticsError, AnalyticsResult};

/// Everything needed for typical use.
pub mod prelude {
    pub use xirr_analytics::prelude::*;
    pub use xirr_core::prelude::*;
    pub use xirr_math::prelude::*;
}
