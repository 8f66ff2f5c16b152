use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_missing_catalog_file_fails_at_startup() {
    let mut cmd = Command::new(cargo_bin!("tascoscao"));
    cmd.args(["--port", "0", "--catalog", "does-not-exist.json"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_catalog_with_negative_price_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"taza": {{"blanco": -5}}}}"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("tascoscao"));
    cmd.args(["--port", "0", "--catalog"]).arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("negative price"));
}

#[test]
fn test_out_of_range_tax_rate_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("tascoscao"));
    cmd.args(["--port", "0", "--tax-rate", "1.5"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("tax rate must be between 0 and 1"));
}

#[test]
fn test_fractional_tax_percentage_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("tascoscao"));
    cmd.args(["--port", "0", "--tax-rate", "0.215"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("whole percentage"));
}

#[test]
fn test_invalid_port_is_a_usage_error() {
    let mut cmd = Command::new(cargo_bin!("tascoscao"));
    cmd.args(["--port", "not-a-port"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_help_lists_options() {
    let mut cmd = Command::new(cargo_bin!("tascoscao"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--catalog"))
        .stdout(predicate::str::contains("--free-shipping-threshold"));
}
