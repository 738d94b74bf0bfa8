use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

use carbonlog::ledger::{sqlite::SqliteLedger, EmissionLedger};

fn carbonlog(env_db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_carbonlog"))
        .args(args)
        .env("CARBONLOG_DB_PATH", env_db)
        .env_remove("RUST_LOG")
        .output()
        .expect("run carbonlog")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn log_prints_rounded_emission_and_persists() {
    let tmp = TempDir::new().expect("tmp");
    let db = tmp.path().join("cli.db");

    let out = carbonlog(&db, &["log", "transport", "Car", "100"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out).trim_end(), "Emission: 21.00 kg CO₂");

    let out = carbonlog(&db, &["totals"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "Total Emissions by Category:\nTransport: 21.00 kg CO₂\n"
    );
}

#[test]
fn unknown_activity_exits_with_two_and_writes_nothing() {
    let tmp = TempDir::new().expect("tmp");
    let db = tmp.path().join("cli.db");

    let out = carbonlog(&db, &["log", "transport", "Bicycle", "5"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("Invalid category or activity selected."));

    let ledger = SqliteLedger::open(&db).expect("open");
    assert!(ledger.records().expect("records").is_empty());
}

#[test]
fn invalid_amount_exits_with_two() {
    let tmp = TempDir::new().expect("tmp");
    let db = tmp.path().join("cli.db");

    for amount in ["ten", "-3"] {
        let out = carbonlog(&db, &["log", "transport", "Car", amount]);
        assert_eq!(out.status.code(), Some(2), "amount {amount}");
        assert!(stderr(&out).starts_with("Input Error:"));
    }
    assert!(!db.exists());
}

#[test]
fn unopenable_database_exits_with_one() {
    let tmp = TempDir::new().expect("tmp");
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").expect("write blocker");
    let db = blocker.join("ledger.db");
    let db_arg = db.to_str().expect("utf8 path");

    let out = carbonlog(&tmp.path().join("env.db"), &["--db", db_arg, "log", "food", "Beef", "2"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("error:"));
}

#[test]
fn db_flag_overrides_environment_path() {
    let tmp = TempDir::new().expect("tmp");
    let env_db = tmp.path().join("env.db");
    let flag_db = tmp.path().join("flag.db");
    let flag_arg = flag_db.to_str().expect("utf8 path");

    let out = carbonlog(&env_db, &["--db", flag_arg, "log", "food", "Beef", "2"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert!(!env_db.exists());

    let ledger = SqliteLedger::open(&flag_db).expect("open");
    let records = ledger.records().expect("records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].emission, 54.0);

    let out = carbonlog(&env_db, &["totals"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out).trim_end(), "No data available.");
}

#[test]
fn factors_lists_without_touching_the_database() {
    let tmp = TempDir::new().expect("tmp");
    let db = tmp.path().join("cli.db");

    let out = carbonlog(&db, &["factors"]);
    assert_eq!(stdout(&out), "transport\nelectricity\nfood\n");

    let out = carbonlog(&db, &["factors", "electricity"]);
    assert_eq!(stdout(&out), "Electricity: 0.475 kg CO₂/unit\n");

    let out = carbonlog(&db, &["factors", "water"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(!db.exists());
}
