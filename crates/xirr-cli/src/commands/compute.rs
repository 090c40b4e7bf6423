//! Compute command implementation.
//!
//! Solves for the IRR of a cash flow read from a CSV file.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;

use xirr_analytics::irr::{HighPrecisionIrr, Irr, IrrOutcome};
use xirr_core::Cashflow;
use xirr_math::Real;

use crate::cli::{OutputFormat, SolverArgs};
use crate::commands::config::Settings;
use crate::commands::load_cashflow;
use crate::output::{
    format_percent, format_rate, print_header, print_output, print_record, print_warning, KeyValue,
};

/// Arguments for the compute command.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// CSV file with `date,amount` rows; the first row is the time origin
    pub file: PathBuf,

    /// strftime format of the date column. Defaults to the configured `date_format`.
    #[arg(short, long)]
    pub date_format: Option<String>,

    /// Solve in 28-digit decimal arithmetic instead of f64
    #[arg(short, long)]
    pub precise: bool,

    #[command(flatten)]
    pub solver: SolverArgs,
}

/// Result of a compute run.
#[derive(Debug, Serialize)]
struct ComputeResult {
    entries: usize,
    net_amount: Decimal,
    rate: Option<f64>,
    iterations: Option<u32>,
    status: String,
    precise: bool,
}

impl ComputeResult {
    fn from_outcome<T: Real>(cashflow: &Cashflow, outcome: &IrrOutcome<T>, precise: bool) -> Self {
        let iterations = match outcome {
            IrrOutcome::Rate { iterations, .. } => Some(*iterations),
            _ => None,
        };
        Self {
            entries: cashflow.len(),
            net_amount: cashflow.net_amount(),
            rate: outcome.rate().map(|r| r.as_float()),
            iterations,
            status: outcome.to_string(),
            precise,
        }
    }
}

/// Execute the compute command.
pub fn execute(args: ComputeArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let date_format = args.date_format.as_deref().unwrap_or(&settings.date_format);
    let cashflow = load_cashflow(&args.file, date_format)?;
    let (guess, tolerance, max_iterations) = settings.solver(&args.solver)?;

    let result = if args.precise {
        let irr = HighPrecisionIrr::new(
            to_decimal(guess, "guess")?,
            to_decimal(tolerance, "tolerance")?,
            max_iterations,
        );
        let outcome = irr.solve(&cashflow)?;
        ComputeResult::from_outcome(&cashflow, &outcome, true)
    } else {
        let outcome = Irr::new(guess, tolerance, max_iterations).solve(&cashflow)?;
        ComputeResult::from_outcome(&cashflow, &outcome, false)
    };

    if result.rate.is_none() {
        tracing::warn!(file = %args.file.display(), status = %result.status, "No rate found");
    }

    output_result(&result, format, settings.precision)
}

fn to_decimal(value: f64, name: &str) -> Result<Decimal> {
    <Decimal as Real>::from_float(value)
        .ok_or_else(|| anyhow::anyhow!("Invalid {}: {} is not representable as a decimal", name, value))
}

fn output_result(result: &ComputeResult, format: OutputFormat, precision: usize) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_header("Internal Rate of Return");
            let rows = vec![
                KeyValue::new("Entries", result.entries.to_string()),
                KeyValue::new("Net amount", result.net_amount.to_string()),
                KeyValue::new("Rate", format_rate(result.rate, precision)),
                KeyValue::new("Rate %", format_percent(result.rate, precision)),
                KeyValue::new(
                    "Iterations",
                    result
                        .iterations
                        .map_or_else(|| "-".to_string(), |i| i.to_string()),
                ),
                KeyValue::new(
                    "Arithmetic",
                    if result.precise { "decimal" } else { "f64" },
                ),
            ];
            print_output(&rows, format)?;
            if result.rate.is_none() {
                print_warning(&result.status);
            }
        }
        OutputFormat::Json | OutputFormat::Csv => print_record(result, format)?,
        OutputFormat::Minimal => println!("{}", format_rate(result.rate, precision)),
    }
    Ok(())
}
