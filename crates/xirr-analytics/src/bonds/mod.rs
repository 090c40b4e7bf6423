//! Bond cash flow construction.
//!
//! A [`BondPosition`] describes one purchase and the payments that follow
//! it. Its cash flow feeds the IRR calculator to give a yield to maturity,
//! or to offer, net of commissions and taxes.

mod position;

pub use position::{BondEvent, BondPosition};
