//! CLI command implementations.

pub mod compare;
pub mod compute;
pub mod config;
pub mod ytm;

pub use compare::CompareArgs;
pub use compute::ComputeArgs;
pub use config::ConfigArgs;
pub use ytm::YtmArgs;

use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use xirr_core::{Cashflow, CashflowEntry, Date};

use crate::error::{CliError, CliResult};

/// Reads a `date,amount` CSV file into a cash flow.
///
/// Rows keep their file order; the first row is the time origin.
pub fn load_cashflow(path: &Path, date_format: &str) -> CliResult<Cashflow> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(true)
        .from_reader(file);

    let mut cashflow = Cashflow::new();
    for (index, record) in reader.records().enumerate() {
        // Header is line 1.
        let line = index as u64 + 2;
        let record = record.map_err(|e| CliError::InvalidRow {
            line,
            reason: e.to_string(),
        })?;

        let (Some(date), Some(amount)) = (record.get(0), record.get(1)) else {
            return Err(CliError::InvalidRow {
                line,
                reason: "expected two columns: date,amount".to_string(),
            });
        };

        let date = Date::parse_with_format(date, date_format).map_err(|e| CliError::InvalidRow {
            line,
            reason: e.to_string(),
        })?;
        let amount = Decimal::from_str(amount).map_err(|e| CliError::InvalidRow {
            line,
            reason: format!("invalid amount '{}': {}", amount, e),
        })?;

        cashflow.push(CashflowEntry::new(date, amount));
    }

    tracing::debug!(entries = cashflow.len(), path = %path.display(), "Loaded cash flow");
    Ok(cashflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_cashflow() {
        let file = write_csv("date,amount\n2019-06-01, -1000\n2020-05-31, 1124.5\n");
        let cashflow = load_cashflow(file.path(), "%Y-%m-%d").unwrap();

        assert_eq!(cashflow.len(), 2);
        assert_eq!(cashflow.entries()[1].amount(), Decimal::from_str("1124.5").unwrap());
    }

    #[test]
    fn test_custom_date_format() {
        let file = write_csv("date,amount\n01.06.2019,-1000\n31.05.2020,1100\n");
        let cashflow = load_cashflow(file.path(), "%d.%m.%Y").unwrap();

        assert_eq!(cashflow.entries()[0].date(), Date::from_ymd(2019, 6, 1).unwrap());
    }

    #[test]
    fn test_bad_row_reports_line() {
        let file = write_csv("date,amount\n2019-06-01,-1000\n2020-05-31,lots\n");
        let err = load_cashflow(file.path(), "%Y-%m-%d").unwrap_err();

        match err {
            CliError::InvalidRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_cashflow(Path::new("/nonexistent/flows.csv"), "%Y-%m-%d").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
