//! End-to-end tests of the `xirr` binary.
//!
//! Every command runs with `XIRR_CONFIG_DIR` pointing at a fresh temporary
//! directory so the user's configuration is never read or written.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const EXCEL_FLOWS: &str = "\
date,amount
2008-01-01,-10000
2008-03-01,2750
2008-10-30,4250
2009-02-15,3250
2009-04-01,2750
";

const BOND_POSITION: &str = r#"
name = "RU000A0ZZZU3"
purchase_date = "2019-04-05"
quantity = 500
nominal = 1000
price = 96.24
accrued = 30.14
broker_commission = 0.0003776
exchange_commission = 0.0001
tax_rate = 0.13

[[events]]
kind = "coupon"
date = "2019-06-26"
amount = 54.85

[[events]]
kind = "coupon"
date = "2019-12-25"
amount = 54.85

[[events]]
kind = "coupon"
date = "2020-06-24"
amount = 54.85

[[events]]
kind = "coupon"
date = "2020-12-23"
amount = 54.85

[[events]]
kind = "coupon"
date = "2021-06-23"
amount = 54.85

[[events]]
kind = "coupon"
date = "2021-12-22"
amount = 54.85

[[events]]
kind = "maturity"
date = "2021-12-22"

[[events]]
kind = "discount_tax"
date = "2022-01-01"
"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn xirr(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("xirr"));
        cmd.env("XIRR_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG");
        cmd
    }
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// =============================================================================
// COMPUTE
// =============================================================================

#[test]
fn compute_minimal_prints_rate() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", EXCEL_FLOWS);

    ws.xirr()
        .args(["-f", "minimal", "compute", path_arg(&flows)])
        .assert()
        .success()
        .stdout("0.373363\n");
}

#[test]
fn compute_table_shows_percentage() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", EXCEL_FLOWS);

    ws.xirr()
        .args(["compute", path_arg(&flows)])
        .assert()
        .success()
        .stdout(predicate::str::contains("37.3363%"))
        .stdout(predicate::str::contains("Entries"));
}

#[test]
fn compute_precise_agrees() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", EXCEL_FLOWS);

    ws.xirr()
        .args(["-f", "minimal", "compute", "--precise", path_arg(&flows)])
        .assert()
        .success()
        .stdout("0.373363\n");
}

#[test]
fn compute_json_reports_iterations() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", EXCEL_FLOWS);

    ws.xirr()
        .args(["--format", "json", "compute", path_arg(&flows)])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rate\": 0.37336"))
        .stdout(predicate::str::contains("\"iterations\""));
}

#[test]
fn compute_custom_date_format() {
    let ws = Workspace::new();
    let flows = ws.file(
        "flows.csv",
        "date,amount\n01.01.2008,-10000\n01.03.2008,2750\n30.10.2008,4250\n15.02.2009,3250\n01.04.2009,2750\n",
    );

    ws.xirr()
        .args(["-f", "minimal", "compute", "--date-format", "%d.%m.%Y", path_arg(&flows)])
        .assert()
        .success()
        .stdout("0.373363\n");
}

#[test]
fn compute_negative_guess_is_accepted() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", EXCEL_FLOWS);

    ws.xirr()
        .args(["-f", "minimal", "compute", "--guess", "-1.5", path_arg(&flows)])
        .assert()
        .success()
        .stdout("0.373363\n");
}

#[test]
fn compute_out_of_domain_root_prints_none() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", "date,amount\n2019-06-01,-1000\n2020-05-31,500\n2021-05-31,500\n");

    ws.xirr()
        .args(["-f", "minimal", "compute", "--guess", "1.0", path_arg(&flows)])
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn compute_single_entry_fails() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", "date,amount\n2019-06-01,-1000\n");

    ws.xirr()
        .args(["compute", path_arg(&flows)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 entries"));
}

#[test]
fn compute_bad_row_reports_line() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", "date,amount\n2019-06-01,-1000\n2020-13-01,1100\n");

    ws.xirr()
        .args(["compute", path_arg(&flows)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid row 3"));
}

#[test]
fn compute_rejects_zero_tolerance() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", EXCEL_FLOWS);

    ws.xirr()
        .args(["compute", "--tolerance", "0", path_arg(&flows)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tolerance"));
}

// =============================================================================
// YTM AND COMPARE
// =============================================================================

#[test]
fn ytm_of_bond_position() {
    let ws = Workspace::new();
    let position = ws.file("position.toml", BOND_POSITION);

    ws.xirr()
        .args(["-f", "minimal", "ytm", path_arg(&position)])
        .assert()
        .success()
        .stdout("0.128692\n");
}

#[test]
fn ytm_shows_cashflow() {
    let ws = Workspace::new();
    let position = ws.file("position.toml", BOND_POSITION);

    ws.xirr()
        .args(["ytm", "--show-cashflow", path_arg(&position)])
        .assert()
        .success()
        .stdout(predicate::str::contains("RU000A0ZZZU3"))
        .stdout(predicate::str::contains("Cash Flow"))
        .stdout(predicate::str::contains("2022-01-01"));
}

#[test]
fn ytm_rejects_malformed_toml() {
    let ws = Workspace::new();
    let position = ws.file("position.toml", "quantity = \"many\"\n");

    ws.xirr()
        .args(["ytm", path_arg(&position)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bond position"));
}

#[test]
fn compare_json_has_both_rates() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", EXCEL_FLOWS);

    ws.xirr()
        .args(["-f", "json", "compare", path_arg(&flows)])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"float_rate\""))
        .stdout(predicate::str::contains("\"decimal_rate\""));
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn config_set_then_get() {
    let ws = Workspace::new();

    ws.xirr()
        .args(["config", "set", "tolerance", "1e-10"])
        .assert()
        .success();

    ws.xirr()
        .args(["-f", "minimal", "config", "get", "tolerance"])
        .assert()
        .success()
        .stdout("1e-10\n");
}

#[test]
fn config_rejects_invalid_value() {
    let ws = Workspace::new();

    ws.xirr()
        .args(["config", "set", "max_iterations", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must be at least 1"));
}

#[test]
fn config_default_format_applies() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", EXCEL_FLOWS);

    ws.xirr()
        .args(["config", "set", "default_format", "minimal"])
        .assert()
        .success();

    ws.xirr()
        .args(["compute", path_arg(&flows)])
        .assert()
        .success()
        .stdout("0.373363\n");
}

#[test]
fn config_precision_applies() {
    let ws = Workspace::new();
    let flows = ws.file("flows.csv", EXCEL_FLOWS);

    ws.xirr()
        .args(["config", "set", "precision", "4"])
        .assert()
        .success();

    ws.xirr()
        .args(["-f", "minimal", "compute", path_arg(&flows)])
        .assert()
        .success()
        .stdout("0.3734\n");
}

#[test]
fn config_reset_restores_default() {
    let ws = Workspace::new();

    ws.xirr()
        .args(["config", "set", "guess", "-0.5"])
        .assert()
        .success();
    ws.xirr()
        .args(["config", "reset", "guess"])
        .assert()
        .success();

    ws.xirr()
        .args(["-f", "minimal", "config", "get", "guess"])
        .assert()
        .success()
        .stdout("0.1\n");
}
