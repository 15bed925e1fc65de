//! Command-line tests for the csf binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `csf` with its config directory pointed at an empty temp dir.
fn csf(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("csf").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn fields_lists_catalog() {
    let home = TempDir::new().unwrap();
    csf(home.path())
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("16 fields"))
        .stdout(predicate::str::contains("CURP"))
        .stdout(predicate::str::contains("Fecha y lugar de emisión"));
}

#[test]
fn batch_fails_on_empty_folder() {
    let home = TempDir::new().unwrap();
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("notes.txt"), "hola").unwrap();

    csf(home.path())
        .arg("batch")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No PDF files found"));
}

#[test]
fn batch_reports_unreadable_files_and_still_exports() {
    let home = TempDir::new().unwrap();
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(input.path().join("broken.pdf"), "definitely not a pdf").unwrap();

    let output = out.path().join("result");
    csf(home.path())
        .arg("batch")
        .arg(input.path())
        .args(["--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 extracted, 0 not fiscal, 1 failed"))
        .stdout(predicate::str::contains("broken.pdf"));

    let csv = fs::read_to_string(out.path().join("result.csv")).unwrap();
    assert_eq!(csv.lines().count(), 1);
    assert!(csv.starts_with("Archivo,"));
}

#[test]
fn batch_strict_escalates_failures() {
    let home = TempDir::new().unwrap();
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(input.path().join("broken.pdf"), "definitely not a pdf").unwrap();

    csf(home.path())
        .arg("batch")
        .arg(input.path())
        .args(["--format", "json", "--strict", "--output"])
        .arg(out.path().join("result.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 files could not be read"));

    // The export is written before escalating
    let json = fs::read_to_string(out.path().join("result.json")).unwrap();
    assert_eq!(json, "[]");
}

#[test]
fn process_missing_file_fails() {
    let home = TempDir::new().unwrap();
    csf(home.path())
        .args(["process", "/no/such/constancia.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn process_unreadable_file_fails_with_reason() {
    let home = TempDir::new().unwrap();
    let input = TempDir::new().unwrap();
    let path = input.path().join("broken.pdf");
    fs::write(&path, "definitely not a pdf").unwrap();

    csf(home.path())
        .arg("process")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("text extraction failed"));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();

    csf(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(home.path().join("csf").join("config.json").exists());

    csf(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sheet_name\": \"Constancias\""));

    csf(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn explicit_config_sets_default_format() {
    let home = TempDir::new().unwrap();
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(input.path().join("broken.pdf"), "definitely not a pdf").unwrap();

    let config = home.path().join("custom.json");
    fs::write(&config, r#"{"export": {"format": "csv"}}"#).unwrap();

    csf(home.path())
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(input.path())
        .arg("--output")
        .arg(out.path().join("table"))
        .assert()
        .success();

    assert!(out.path().join("table.csv").exists());
}
