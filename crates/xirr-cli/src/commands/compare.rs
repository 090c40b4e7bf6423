//! Compare command implementation.
//!
//! Solves a cash flow over both `f64` and decimal arithmetic and shows how
//! far apart the results are.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use xirr_analytics::irr::compare;

use crate::cli::{OutputFormat, SolverArgs};
use crate::commands::config::Settings;
use crate::commands::load_cashflow;
use crate::output::{format_rate, print_header, print_output, print_record, print_warning, KeyValue};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// CSV file with `date,amount` rows
    pub file: PathBuf,

    /// strftime format of the date column. Defaults to the configured `date_format`.
    #[arg(short, long)]
    pub date_format: Option<String>,

    #[command(flatten)]
    pub solver: SolverArgs,
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let date_format = args.date_format.as_deref().unwrap_or(&settings.date_format);
    let cashflow = load_cashflow(&args.file, date_format)?;
    let (guess, tolerance, max_iterations) = settings.solver(&args.solver)?;

    let report = compare(&cashflow, guess, tolerance, max_iterations)?;
    if report.is_mismatch() {
        tracing::warn!(?report, "Only one arithmetic found a rate");
    }

    let optional = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    match format {
        OutputFormat::Table => {
            print_header("Precision Comparison");
            let rows = vec![
                KeyValue::new("f64 rate", format_rate(report.float_rate, settings.precision)),
                KeyValue::new(
                    "Decimal rate",
                    optional(report.decimal_rate.map(|r| r.to_string())),
                ),
                KeyValue::new("Difference", optional(report.difference.map(|d| format!("{:e}", d)))),
                KeyValue::new(
                    "NPV at f64 rate",
                    optional(report.float_residual.map(|r| r.to_string())),
                ),
                KeyValue::new(
                    "NPV at decimal rate",
                    optional(report.decimal_residual.map(|r| r.to_string())),
                ),
            ];
            print_output(&rows, format)?;
            if report.is_mismatch() {
                print_warning("Only one arithmetic found a rate.");
            }
        }
        OutputFormat::Json | OutputFormat::Csv => print_record(&report, format)?,
        OutputFormat::Minimal => println!(
            "{} {}",
            format_rate(report.float_rate, settings.precision),
            optional(report.decimal_rate.map(|r| r.to_string()))
        ),
    }

    Ok(())
}
