//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A cash flow file row could not be read.
    #[error("Invalid row {line}: {reason}")]
    InvalidRow {
        /// 1-based line number, header included.
        line: u64,
        /// What was wrong with the row.
        reason: String,
    },

    /// A solver parameter was rejected.
    #[error("Invalid {name}: {value}. {hint}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: String,
        /// How to fix it.
        hint: &'static str,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
