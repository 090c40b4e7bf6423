//! XIRR CLI - Command-line interface for cash flow IRR and bond yields.
//!
//! # Usage
//!
//! ```bash
//! # IRR of a date,amount CSV file
//! xirr compute flows.csv
//!
//! # Same, in decimal arithmetic with a custom guess
//! xirr compute flows.csv --precise --guess 0.05
//!
//! # Yield to maturity of a bond position
//! xirr ytm position.toml --show-cashflow
//!
//! # f64 against decimal
//! xirr compare flows.csv --format json
//!
//! # Persist solver defaults
//! xirr config set tolerance 1e-10
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides the level chosen by
//! `--quiet` and `--verbose`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::config::Settings;

fn init_logging(cli: &Cli) {
    let default = if cli.quiet {
        "error"
    } else if cli.verbose {
        "warn,xirr=debug,xirr_analytics=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(cli.verbose),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    // Config commands manage the file themselves and must work even when
    // it holds bad values.
    if let Commands::Config(args) = cli.command {
        return commands::config::execute(args, cli.format.unwrap_or_default());
    }

    let settings = Settings::load()?;
    if !settings.use_colors {
        colored::control::set_override(false);
    }
    let format = cli.format.unwrap_or(settings.format);
    tracing::debug!(?format, ?settings, "Loaded settings");

    match cli.command {
        Commands::Compute(args) => commands::compute::execute(args, format, &settings)?,
        Commands::Ytm(args) => commands::ytm::execute(args, format, &settings)?,
        Commands::Compare(args) => commands::compare::execute(args, format, &settings)?,
        Commands::Config(_) => {}
    }

    Ok(())
}
