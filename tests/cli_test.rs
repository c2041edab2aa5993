use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_default_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("purchase-order"));
    cmd.arg("Carlos Ruiz").arg("Tablet");

    cmd.assert()
        .success()
        .stdout("Carlos Ruiz ordenó 1 unidad(es) de Tablet con envío Estándar.\n");

    Ok(())
}

#[test]
fn test_cli_fully_configured_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("purchase-order"));
    cmd.args([
        "Lucía Gómez",
        "Smartphone",
        "--quantity",
        "2",
        "--shipping",
        "Express",
        "--gift-wrap",
        "--notes",
        "Entregar en horario de oficina",
    ]);

    cmd.assert().success().stdout(
        "Lucía Gómez ordenó 2 unidad(es) de Smartphone con envío Express y envoltura de regalo. Nota: Entregar en horario de oficina\n",
    );

    Ok(())
}

#[test]
fn test_cli_gift_wrap_without_notes() {
    let mut cmd = Command::new(cargo_bin!("purchase-order"));
    cmd.args(["Pedro", "Monitor", "--gift-wrap"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("envoltura de regalo."))
        .stdout(predicate::str::contains("Nota:").not());
}

#[test]
fn test_cli_empty_customer_fails() {
    let mut cmd = Command::new(cargo_bin!("purchase-order"));
    cmd.args(["", "Monitor"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid required field: customer_name"));
}

#[test]
fn test_cli_empty_product_fails() {
    let mut cmd = Command::new(cargo_bin!("purchase-order"));
    cmd.args(["Pedro", "", "--gift-wrap"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid required field: product"));
}

#[test]
fn test_cli_missing_product_is_usage_error() {
    let mut cmd = Command::new(cargo_bin!("purchase-order"));
    cmd.arg("Pedro");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_debug_logging_goes_to_stderr() {
    let mut cmd = Command::new(cargo_bin!("purchase-order"));
    cmd.args(["Pedro", "Monitor"]).env("RUST_LOG", "debug");

    cmd.assert()
        .success()
        .stdout("Pedro ordenó 1 unidad(es) de Monitor con envío Estándar.\n")
        .stderr(predicate::str::contains("Order built"));
}
