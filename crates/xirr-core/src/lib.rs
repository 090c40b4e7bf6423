//! # XIRR Core
//!
//! Core types for dated cash flow analytics.
//!
//! This crate provides the building blocks shared by the solver and the
//! analytics crates:
//!
//! - **Types**: [`Date`], [`CashflowEntry`] and [`Cashflow`]
//! - **Day Count Conventions**: Actual/365 Fixed, the convention used to turn
//!   calendar day offsets into year fractions
//!
//! ## Example
//!
//! ```rust
//! use xirr_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let cashflow: Cashflow = vec![
//!     CashflowEntry::new(Date::from_ymd(2008, 2, 5).unwrap(), dec!(-2750)),
//!     CashflowEntry::new(Date::from_ymd(2008, 7, 5).unwrap(), dec!(1000)),
//!     CashflowEntry::new(Date::from_ymd(2009, 1, 5).unwrap(), dec!(2000)),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(cashflow.len(), 3);
//! assert_eq!(cashflow.net_amount(), dec!(250));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Cashflow, CashflowEntry, Date};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Cashflow, CashflowEntry, Date};
