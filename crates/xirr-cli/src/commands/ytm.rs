//! YTM command implementation.
//!
//! Builds the cash flow of a bond position described in TOML and solves
//! for its yield.

use anyhow::{Context, Result};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use xirr_analytics::bonds::BondPosition;
use xirr_analytics::irr::Irr;

use crate::cli::{OutputFormat, SolverArgs};
use crate::commands::config::Settings;
use crate::output::{
    format_percent, format_rate, print_header, print_output, print_record, print_warning, KeyValue,
};

/// Arguments for the ytm command.
#[derive(Args, Debug)]
pub struct YtmArgs {
    /// TOML file describing the position and its events
    pub file: PathBuf,

    /// Show the generated cash flow
    #[arg(long)]
    pub show_cashflow: bool,

    #[command(flatten)]
    pub solver: SolverArgs,
}

/// Cash flow row for display.
#[derive(Debug, Serialize, Tabled)]
struct CashflowRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Debug, Serialize)]
struct YtmResult {
    name: Option<String>,
    quantity: u32,
    entries: usize,
    net_amount: Decimal,
    ytm: Option<f64>,
}

/// Execute the ytm command.
pub fn execute(args: YtmArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let position: BondPosition = toml::from_str(&text)
        .with_context(|| format!("Invalid bond position in {}", args.file.display()))?;

    let (guess, tolerance, max_iterations) = settings.solver(&args.solver)?;
    let cashflow = position.cashflow()?;
    let ytm = Irr::new(guess, tolerance, max_iterations).compute(&cashflow)?;

    let result = YtmResult {
        name: position.name().map(str::to_string),
        quantity: position.quantity(),
        entries: cashflow.len(),
        net_amount: cashflow.net_amount(),
        ytm,
    };

    match format {
        OutputFormat::Table => {
            print_header(&format!(
                "Yield to Maturity: {}",
                result.name.as_deref().unwrap_or("bond position")
            ));
            let rows = vec![
                KeyValue::new("Quantity", result.quantity.to_string()),
                KeyValue::new("Purchase date", position.purchase_date().to_string()),
                KeyValue::new("Entries", result.entries.to_string()),
                KeyValue::new("Net amount", result.net_amount.to_string()),
                KeyValue::new("YTM", format_rate(ytm, settings.precision)),
                KeyValue::new("YTM %", format_percent(ytm, settings.precision)),
            ];
            print_output(&rows, format)?;
            if ytm.is_none() {
                print_warning("No yield found for this cash flow. Try another --guess.");
            }
        }
        OutputFormat::Json | OutputFormat::Csv => print_record(&result, format)?,
        OutputFormat::Minimal => println!("{}", format_rate(ytm, settings.precision)),
    }

    if args.show_cashflow {
        let rows: Vec<CashflowRow> = cashflow
            .iter()
            .map(|entry| CashflowRow {
                date: entry.date().to_string(),
                amount: entry.amount().round_dp(2).to_string(),
            })
            .collect();

        if format == OutputFormat::Table {
            print_header("Cash Flow");
        }
        print_output(&rows, format)?;
    }

    Ok(())
}
