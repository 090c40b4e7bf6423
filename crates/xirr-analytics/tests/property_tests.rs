//! Property-based tests for IRR invariants.
//!
//! - The rate does not depend on which entry is the time origin, for every
//!   origin from which Newton finds a root (another origin may start the
//!   solve out of the domain and end with no rate)
//! - Guesses at or below -1 behave like a guess of 0
//! - A reported rate is always above -1
//! - Scaling every amount leaves the rate unchanged

use proptest::prelude::*;
use rust_decimal::Decimal;

use xirr_analytics::irr::{Irr, IrrOutcome, NormalizedCashflow};
use xirr_core::{Cashflow, CashflowEntry, Date};

// =============================================================================
// GENERATORS
// =============================================================================

fn origin() -> Date {
    Date::from_ymd(2020, 1, 1).unwrap()
}

fn build(entries: &[(i64, i64)]) -> Cashflow {
    entries
        .iter()
        .map(|&(days, amount)| CashflowEntry::new(origin() + days, Decimal::from(amount)))
        .collect()
}

/// A purchase of 1000 followed by inflows worth more than 1000 at 10%.
fn investment() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((180i64..1000, 500i64..800), 3..6).prop_map(|inflows| {
        let mut entries = vec![(0, -1000)];
        entries.extend(inflows);
        entries
    })
}

/// Any mix of signs and dates, including unsorted ones.
fn arbitrary_cashflow() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-1000i64..2000, -5000i64..5000), 2..8)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_origin_invariance(entries in investment()) {
        let cashflow = build(&entries);
        let irr = Irr::default();

        let base = irr.compute(&cashflow).unwrap();
        prop_assert!(base.is_some());
        let base = base.unwrap();
        prop_assert!(base > 0.1);

        // Origins whose solve ends without a root are not compared.
        for index in 1..cashflow.len() {
            if let Some(rate) = irr.compute(&cashflow.with_origin(index)).unwrap() {
                prop_assert!((rate - base).abs() < 1e-6, "origin {}: {} vs {}", index, rate, base);
            }
        }
    }

    #[test]
    fn prop_guess_clamped(entries in arbitrary_cashflow(), guess in -100.0f64..=-1.0) {
        let cashflow = build(&entries);
        let clamped = Irr::new(guess, 1e-8, 100).solve(&cashflow).unwrap();
        let zero = Irr::new(0.0, 1e-8, 100).solve(&cashflow).unwrap();
        prop_assert_eq!(clamped, zero);
    }

    #[test]
    fn prop_rate_above_minus_one(entries in arbitrary_cashflow(), guess in -0.99f64..5.0) {
        let cashflow = build(&entries);
        match Irr::new(guess, 1e-8, 100).solve(&cashflow).unwrap() {
            IrrOutcome::Rate { rate, .. } => prop_assert!(rate > -1.0),
            IrrOutcome::RootOutOfDomain { root } => prop_assert!(root <= -1.0),
            IrrOutcome::NotFound(outcome) => prop_assert!(!outcome.is_converged()),
        }
    }

    #[test]
    fn prop_scale_invariance(entries in investment(), factor in 1i64..1000) {
        let scaled: Vec<(i64, i64)> = entries.iter().map(|&(d, a)| (d, a * factor)).collect();

        let rate = Irr::default().compute(&build(&entries)).unwrap().unwrap();
        let scaled_rate = Irr::default().compute(&build(&scaled)).unwrap().unwrap();
        prop_assert!((rate - scaled_rate).abs() < 1e-9);
    }

    #[test]
    fn prop_normalized_offsets(entries in arbitrary_cashflow()) {
        let cashflow = build(&entries);
        let normalized = NormalizedCashflow::<f64>::from_cashflow(&cashflow).unwrap();

        prop_assert_eq!(normalized.len(), entries.len());
        prop_assert_eq!(normalized.offsets()[0], 0);
        for (offset, &(days, _)) in normalized.offsets().iter().zip(&entries) {
            prop_assert_eq!(*offset, days - entries[0].0);
        }
        for (value, &(_, amount)) in normalized.amounts().iter().zip(&entries) {
            prop_assert_eq!(*value, amount as f64);
        }
    }
}
