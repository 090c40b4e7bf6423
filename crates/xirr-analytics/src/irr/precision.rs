//! Cross-check of the `f64` IRR against the 28-digit decimal IRR.
//!
//! Both paths run the same algorithm on the same cash flow. The report
//! shows how far apart the two rates are and how close each one brings
//! the decimal NPV to zero.

use rust_decimal::Decimal;
use serde::Serialize;

use xirr_core::Cashflow;
use xirr_math::solvers::SolverConfig;
use xirr_math::Real;

use super::calculator::{HighPrecisionIrr, Irr};
use super::normalize::NormalizedCashflow;
use super::npv::NpvFunctions;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Side-by-side result of the two numeric paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecisionReport {
    /// Rate found over `f64`.
    pub float_rate: Option<f64>,
    /// Rate found over `Decimal`.
    pub decimal_rate: Option<Decimal>,
    /// `|float_rate - decimal_rate|`, when both exist.
    pub difference: Option<f64>,
    /// Decimal NPV at the `f64` rate.
    pub float_residual: Option<Decimal>,
    /// Decimal NPV at the decimal rate.
    pub decimal_residual: Option<Decimal>,
}

impl PrecisionReport {
    /// True if both paths found a rate and they differ by at most `epsilon`.
    #[must_use]
    pub fn agrees_within(&self, epsilon: f64) -> bool {
        self.difference.is_some_and(|d| d <= epsilon)
    }

    /// True if exactly one path found a rate.
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        self.float_rate.is_some() != self.decimal_rate.is_some()
    }
}

/// Runs both IRR paths with the same parameters.
///
/// # Errors
///
/// Fails on malformed input, or if `guess` or `tolerance` cannot be
/// represented as a `Decimal`.
pub fn compare(
    cashflow: &Cashflow,
    guess: f64,
    tolerance: f64,
    max_iterations: u32,
) -> AnalyticsResult<PrecisionReport> {
    let decimal_config = SolverConfig::new(
        to_decimal(guess, "guess")?,
        to_decimal(tolerance, "tolerance")?,
        max_iterations,
    );

    let float_rate = Irr::new(guess, tolerance, max_iterations).compute(cashflow)?;
    let decimal_rate = HighPrecisionIrr::with_config(decimal_config).compute(cashflow)?;

    let normalized = NormalizedCashflow::<Decimal>::from_cashflow(cashflow)?;
    let functions = NpvFunctions::new(&normalized);

    let float_residual = float_rate
        .and_then(<Decimal as Real>::from_float)
        .and_then(|x| functions.npv_at(x));
    let decimal_residual = decimal_rate.and_then(|x| functions.npv_at(x));

    let difference = match (float_rate, decimal_rate) {
        (Some(f), Some(d)) => Some((f - d.as_float()).abs()),
        _ => None,
    };

    Ok(PrecisionReport {
        float_rate,
        decimal_rate,
        difference,
        float_residual,
        decimal_residual,
    })
}

fn to_decimal(value: f64, name: &str) -> AnalyticsResult<Decimal> {
    <Decimal as Real>::from_float(value)
        .ok_or_else(|| AnalyticsError::invalid_input(format!("{name} {value} is not a decimal")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use xirr_core::Date;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_paths_agree() {
        let cf = Cashflow::new()
            .with(date("2008-01-01"), dec!(-10000))
            .with(date("2008-03-01"), dec!(2750))
            .with(date("2008-10-30"), dec!(4250))
            .with(date("2009-02-15"), dec!(3250))
            .with(date("2009-04-01"), dec!(2750));

        let report = compare(&cf, 0.1, 1e-8, 100).unwrap();

        assert_relative_eq!(report.float_rate.unwrap(), 0.373362535, epsilon = 1e-8);
        assert!(report.agrees_within(1e-12));
        assert!(!report.is_mismatch());
        assert!(report.decimal_residual.unwrap().abs() < dec!(0.0001));
        assert!(report.float_residual.unwrap().abs() < dec!(0.0001));
    }

    #[test]
    fn test_no_rate_on_either_path() {
        let cf = Cashflow::new()
            .with(date("2020-01-01"), dec!(100))
            .with(date("2021-01-01"), dec!(100));

        let report = compare(&cf, 0.1, 1e-8, 100).unwrap();
        assert_eq!(report.float_rate, None);
        assert_eq!(report.decimal_rate, None);
        assert_eq!(report.difference, None);
        assert!(!report.agrees_within(1.0));
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        let cf = Cashflow::new()
            .with(date("2020-01-01"), dec!(-100))
            .with(date("2021-01-01"), dec!(110));

        assert!(matches!(
            compare(&cf, f64::NAN, 1e-8, 100),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }
}
