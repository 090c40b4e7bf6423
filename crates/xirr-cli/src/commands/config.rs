//! Config command implementation.
//!
//! Manages persistent CLI settings stored as JSON in the user's config
//! directory. `XIRR_CONFIG_DIR` overrides the directory.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::cli::{OutputFormat, SolverArgs};
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_info, print_success, print_warning, KeyValue};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "XIRR_CONFIG_DIR";

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Initial guess for the solver
    Guess,
    /// Solver tolerance
    Tolerance,
    /// Solver iteration cap
    MaxIterations,
    /// Date format of cash flow files
    DateFormat,
    /// Precision for rate output
    DecimalPrecision,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Some(Self::DefaultFormat),
            "guess" => Some(Self::Guess),
            "tolerance" => Some(Self::Tolerance),
            "max_iterations" | "iterations" => Some(Self::MaxIterations),
            "date_format" => Some(Self::DateFormat),
            "decimal_precision" | "precision" => Some(Self::DecimalPrecision),
            "use_colors" | "colors" => Some(Self::UseColors),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::Guess => "guess",
            Self::Tolerance => "tolerance",
            Self::MaxIterations => "max_iterations",
            Self::DateFormat => "date_format",
            Self::DecimalPrecision => "decimal_precision",
            Self::UseColors => "use_colors",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::Guess => "Initial rate guess, values at or below -1 start from 0",
            Self::Tolerance => "Convergence tolerance on successive iterates (> 0)",
            Self::MaxIterations => "Maximum Newton-Raphson iterations (>= 1)",
            Self::DateFormat => "strftime format of cash flow dates",
            Self::DecimalPrecision => "Number of decimal places for rates (2-12)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::Guess => "0.1",
            Self::Tolerance => "1e-8",
            Self::MaxIterations => "100",
            Self::DateFormat => "%Y-%m-%d",
            Self::DecimalPrecision => "6",
            Self::UseColors => "true",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::Guess,
            Self::Tolerance,
            Self::MaxIterations,
            Self::DateFormat,
            Self::DecimalPrecision,
            Self::UseColors,
        ]
    }
}

/// Simple config storage.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl Config {
    fn load() -> Result<Self> {
        let path = config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    fn save(&self) -> Result<()> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    fn value(&self, key: ConfigKey) -> &str {
        self.values
            .get(key.as_str())
            .map_or(key.default_value(), String::as_str)
    }

    fn set(&mut self, key: ConfigKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

/// Effective settings: the config file over built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub format: OutputFormat,
    pub guess: f64,
    pub tolerance: f64,
    pub max_iterations: u32,
    pub date_format: String,
    pub precision: usize,
    pub use_colors: bool,
}

impl Settings {
    /// Loads settings from the config file.
    pub fn load() -> Result<Self> {
        let config = Config::load()?;
        for key in ConfigKey::all() {
            validate_config_value(*key, config.value(*key))?;
        }

        Ok(Self {
            format: parse_format(config.value(ConfigKey::DefaultFormat))?,
            guess: config.value(ConfigKey::Guess).parse()?,
            tolerance: config.value(ConfigKey::Tolerance).parse()?,
            max_iterations: config.value(ConfigKey::MaxIterations).parse()?,
            date_format: config.value(ConfigKey::DateFormat).to_string(),
            precision: config.value(ConfigKey::DecimalPrecision).parse()?,
            use_colors: parse_bool(config.value(ConfigKey::UseColors)),
        })
    }

    /// Solver parameters with command-line overrides applied.
    pub fn solver(&self, args: &SolverArgs) -> CliResult<(f64, f64, u32)> {
        let guess = args.guess.unwrap_or(self.guess);
        let tolerance = args.tolerance.unwrap_or(self.tolerance);
        let max_iterations = args.max_iterations.unwrap_or(self.max_iterations);

        if !guess.is_finite() {
            return Err(CliError::InvalidParameter {
                name: "guess",
                value: guess.to_string(),
                hint: "Must be a finite number.",
            });
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(CliError::InvalidParameter {
                name: "tolerance",
                value: tolerance.to_string(),
                hint: "Must be positive.",
            });
        }
        if max_iterations == 0 {
            return Err(CliError::InvalidParameter {
                name: "max-iterations",
                value: max_iterations.to_string(),
                hint: "Must be at least 1.",
            });
        }
        Ok((guess, tolerance, max_iterations))
    }
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(value, true).map_err(|e| anyhow::anyhow!("Invalid format: {}", e))
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Get the config file path.
fn config_path() -> CliResult<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir).join("config.json"));
    }
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
    Ok(home.join("xirr").join("config.json"))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(format),
        ConfigCommand::Get(get_args) => execute_get(get_args, format),
        ConfigCommand::Set(set_args) => execute_set(set_args),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args),
        ConfigCommand::Path => execute_path(),
    }
}

fn lookup(key: &str) -> Result<ConfigKey> {
    ConfigKey::parse(key).ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))
}

/// Show current configuration.
fn execute_show(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| KeyValue::new(key.as_str(), config.value(*key)))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: HashMap<&str, &str> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), config.value(*key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}={}", key.as_str(), config.value(*key));
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let key = lookup(&args.key)?;
    let value = config.value(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs) -> Result<()> {
    let key = lookup(&args.key)?;
    validate_config_value(key, &args.value)?;

    let mut config = Config::load()?;
    config.set(key, args.value.clone());
    config.save()?;

    print_success(&format!("Set {} = {}", key.as_str(), args.value));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| {
            KeyValue::new(
                key.as_str(),
                format!("{} (default: {})", key.description(), key.default_value()),
            )
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Available Configuration Keys");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs) -> Result<()> {
    let mut config = Config::load()?;

    if args.all {
        config.clear();
        config.save()?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = lookup(&key_str)?;
        config.remove(key);
        config.save()?;
        print_success(&format!(
            "Reset {} to default ({})",
            key.as_str(),
            key.default_value()
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path() -> Result<()> {
    let path = config_path()?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Validate a configuration value.
fn validate_config_value(key: ConfigKey, value: &str) -> Result<()> {
    match key {
        ConfigKey::DefaultFormat => {
            parse_format(value)?;
        }
        ConfigKey::Guess => {
            let guess: f64 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid guess: {}. Must be a number.", value))?;
            if !guess.is_finite() {
                return Err(anyhow::anyhow!("Invalid guess: {}. Must be finite.", value));
            }
        }
        ConfigKey::Tolerance => {
            let tolerance: f64 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid tolerance: {}. Must be a number.", value))?;
            if !(tolerance.is_finite() && tolerance > 0.0) {
                return Err(anyhow::anyhow!(
                    "Invalid tolerance: {}. Must be positive.",
                    value
                ));
            }
        }
        ConfigKey::MaxIterations => {
            let iterations: u32 = value.parse().map_err(|_| {
                anyhow::anyhow!("Invalid max_iterations: {}. Must be a whole number.", value)
            })?;
            if iterations == 0 {
                return Err(anyhow::anyhow!(
                    "Invalid max_iterations: {}. Must be at least 1.",
                    value
                ));
            }
        }
        ConfigKey::DateFormat => {
            if !value.contains('%') {
                return Err(anyhow::anyhow!(
                    "Invalid date format: {}. Use strftime fields such as %Y-%m-%d.",
                    value
                ));
            }
        }
        ConfigKey::DecimalPrecision => {
            let precision: u32 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid precision: {}. Must be a number.", value))?;
            if !(2..=12).contains(&precision) {
                return Err(anyhow::anyhow!(
                    "Invalid precision: {}. Must be between 2 and 12.",
                    precision
                ));
            }
        }
        ConfigKey::UseColors => {
            if !["true", "false", "1", "0", "yes", "no"].contains(&value.to_lowercase().as_str()) {
                return Err(anyhow::anyhow!(
                    "Invalid boolean: {}. Use true or false.",
                    value
                ));
            }
        }
    }
    Ok(())
}
