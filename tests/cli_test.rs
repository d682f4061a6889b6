use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_summary_and_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payoff"));
    cmd.args([
        "--principal",
        "$10,000.00",
        "--rate",
        "12%",
        "--extra",
        "$100.00",
        "--years",
        "2",
        "--lang",
        "en",
        "--start",
        "2024-04-01",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 years, 8 months (20 months in total)"))
        .stdout(predicate::str::contains("$1,049.58"))
        .stdout(predicate::str::contains("$248.05"))
        .stdout(predicate::str::contains("$1,297.63"))
        .stdout(predicate::str::contains("2025-11-01"))
        .stdout(predicate::str::contains("Monthly Payment Details"))
        .stdout(predicate::str::contains("Remaining Principal"));

    Ok(())
}

#[test]
fn test_cli_csv() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payoff"));
    cmd.args([
        "--principal",
        "1200",
        "--rate",
        "0%",
        "--payment",
        "100",
        "--extra",
        "20",
        "--years",
        "1",
        "--format",
        "csv",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Mes,Pago Mensual Total,Pago Intereses,Pago Principal,Principal Restante\n",
        ))
        .stdout(predicate::str::contains("10,$120.00,$0.00,$120.00,$0.00"));

    Ok(())
}

#[test]
fn test_cli_quiet_spanish() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payoff"));
    cmd.args(["--principal", "10000", "--rate", "12", "--years", "2", "--quiet"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 años, 0 meses (24 meses en total)"))
        .stdout(predicate::str::contains("Detalles de Pagos Mensuales").not());

    Ok(())
}

#[test]
fn test_cli_payment_too_low() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payoff"));
    cmd.args([
        "--principal",
        "$50,000.00",
        "--rate",
        "18%",
        "--payment",
        "$700.00",
        "--years",
        "5",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("too low to cover monthly interest"));

    Ok(())
}

#[test]
fn test_cli_bad_number() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payoff"));
    cmd.args(["--principal", "lots", "--years", "1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("principal: 'lots' is not a valid number"));

    Ok(())
}

#[test]
fn test_cli_missing_term() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payoff"));
    cmd.args(["--principal", "1000"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("term must be at least one month"));

    Ok(())
}

#[test]
fn test_cli_term_too_long() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payoff"));
    cmd.args(["--principal", "1000", "--years", "999999999"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("term of 999999999 years and 0 months is too long"));

    Ok(())
}
