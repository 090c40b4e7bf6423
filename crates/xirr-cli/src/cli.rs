//! CLI argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands::{CompareArgs, ComputeArgs, ConfigArgs, YtmArgs};

/// XIRR - internal rate of return for dated cash flows
#[derive(Parser)]
#[command(name = "xirr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format. Defaults to the configured `default_format`.
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log solver details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the IRR of a cash flow CSV file (columns: date,amount)
    Compute(ComputeArgs),

    /// Compute the yield to maturity of a bond position TOML file
    Ytm(YtmArgs),

    /// Compare the floating point and high-precision IRR of a cash flow
    Compare(CompareArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Newton-Raphson parameters; unset values come from the configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SolverArgs {
    /// Initial guess for the rate (0.1 = 10%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub guess: Option<f64>,

    /// Convergence tolerance on successive iterates
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Maximum Newton-Raphson iterations
    #[arg(short = 'n', long)]
    pub max_iterations: Option<u32>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
