use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn daily_limit(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("daily-limit").unwrap();
    cmd.env("DAILY_LIMIT_CONFIG", config_dir.path().join("config.json"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cash_remaining() {
    let dir = TempDir::new().unwrap();
    daily_limit(&dir)
        .args([
            "cash",
            "--limit",
            "1000",
            "--today",
            "15.03.2024",
            "-r",
            "300:lunch",
            "-r",
            "400:dinner:15.03.2024",
        ])
        .assert()
        .success()
        .stdout("На сегодня осталось 300.00 руб\nЗа неделю: 700\n");
}

#[test]
fn test_cash_debt_in_euro() {
    let dir = TempDir::new().unwrap();
    daily_limit(&dir)
        .args([
            "cash", "-l", "1000", "-c", "eur", "--today", "15.03.2024", "-r", "1300:party",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Денег нет, держись: твой долг - 3.37 Euro",
        ));
}

#[test]
fn test_unknown_currency_fails() {
    let dir = TempDir::new().unwrap();
    daily_limit(&dir)
        .args(["cash", "--currency", "gbp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown currency: gbp"));
}

#[test]
fn test_invalid_record_date_fails() {
    let dir = TempDir::new().unwrap();
    daily_limit(&dir)
        .args(["calories", "-r", "100:apple:31.02.2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date '31.02.2024'"));
}

#[test]
fn test_calories_from_csv_with_dump() {
    let dir = TempDir::new().unwrap();
    let mut csv = NamedTempFile::new().unwrap();
    writeln!(csv, "amount,comment,date").unwrap();
    writeln!(csv, "600,breakfast,15.03.2024").unwrap();
    writeln!(csv, "900,old,01.03.2024").unwrap();

    daily_limit(&dir)
        .args(["calories", "--limit", "1000", "--today", "15.03.2024", "--show", "--csv"])
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Содержимое калькулятора:\n"))
        .stdout(predicate::str::contains("2024-03-01 old"))
        .stdout(predicate::str::contains("не более 400 кКал"))
        .stdout(predicate::str::ends_with("За неделю: 600\n"));
}

#[test]
fn test_config_uses_settings_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "usd_rate": 100, "cash_limit": 500 }"#,
    )
    .unwrap();

    daily_limit(&dir)
        .args(["cash", "-c", "usd", "--today", "15.03.2024", "-r", "300:books"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("На сегодня осталось 2.00 USD"));
}

#[test]
fn test_config_init_writes_file() {
    let dir = TempDir::new().unwrap();
    daily_limit(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD rate:       73.31"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn test_negative_record_and_limit() {
    let dir = TempDir::new().unwrap();
    daily_limit(&dir)
        .args([
            "calories", "-l", "1000", "--today", "15.03.2024", "-r", "-200:refund",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("не более 1200 кКал"));

    daily_limit(&dir)
        .args(["cash", "--limit", "-100", "--today", "15.03.2024"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Денег нет, держись: твой долг - 100.00 руб",
        ));
}
