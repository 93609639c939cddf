//! Integration tests for upcoming and period commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::payday_cmd;

#[test]
fn test_upcoming_lists_pay_dates() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .current_dir(temp.path())
        .arg("upcoming")
        .arg("--from")
        .arg("01-01-2025")
        .arg("-n")
        .arg("4")
        .arg("--pay-day")
        .arg("15")
        .arg("--direction")
        .arg("previous")
        .assert()
        .success()
        .stdout(concat!(
            "Wed 15-01-2025  in 14 days\n",
            "Fri 14-02-2025  in 44 days\n",
            "Fri 14-03-2025  in 72 days\n",
            "Tue 15-04-2025  in 104 days\n",
        ));
}

#[test]
fn test_upcoming_starts_today_on_pay_day() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .current_dir(temp.path())
        .arg("upcoming")
        .arg("--from")
        .arg("2025-07-25")
        .arg("--count")
        .arg("1")
        .arg("--pay-day")
        .arg("25")
        .assert()
        .success()
        .stdout("Fri 25-07-2025  today\n");
}

#[test]
fn test_upcoming_uses_stored_settings() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--mode")
        .arg("first")
        .assert()
        .success();

    // 1 June 2025 is a Sunday
    payday_cmd()
        .current_dir(temp.path())
        .arg("upcoming")
        .arg("--from")
        .arg("15-05-2025")
        .arg("-n")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon 02-06-2025"))
        .stdout(predicate::str::contains("Tue 01-07-2025"));
}

#[test]
fn test_upcoming_count_out_of_range() {
    for count in ["1201", "18446744073709551615"] {
        payday_cmd()
            .arg("upcoming")
            .arg("-n")
            .arg(count)
            .arg("--pay-day")
            .arg("25")
            .arg("--from")
            .arg("2025-07-15")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains(count))
            .stderr(predicate::str::contains("panicked").not());
    }
}

#[test]
fn test_upcoming_largest_count() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .current_dir(temp.path())
        .arg("upcoming")
        .arg("-n")
        .arg("1200")
        .arg("--pay-day")
        .arg("25")
        .arg("--from")
        .arg("2025-07-15")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Fri 25-07-2025  in 10 days\n"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 1200));
}

#[test]
fn test_upcoming_invalid_from() {
    payday_cmd()
        .arg("upcoming")
        .arg("--from")
        .arg("someday")
        .arg("--pay-day")
        .arg("25")
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_period() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .current_dir(temp.path())
        .arg("period")
        .arg("01-01-2025")
        .arg("--pay-day")
        .arg("15")
        .arg("-d")
        .arg("previous")
        .assert()
        .success()
        .stdout(concat!(
            "Period: Fri 13-12-2024 to Wed 15-01-2025\n",
            "Day 20 of 33\n",
            "in 14 days\n",
        ));
}

#[test]
fn test_period_without_settings_fails() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .current_dir(temp.path())
        .arg("period")
        .assert()
        .failure()
        .code(2);
}
