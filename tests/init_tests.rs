//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::payday_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized payday settings"));

    let config_path = temp.path().join(".payday/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("mode = \"last\""));
    assert!(content.contains("pay_day = 31"));
    assert!(content.contains("direction = \"next\""));
    assert!(content.contains("today_tag = \"auto on $secondary\""));
    assert!(content.contains("pay_day_tag = \"auto on $primary\""));
}

#[test]
fn test_init_with_specific_day() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--mode")
        .arg("specific")
        .arg("--day")
        .arg("25")
        .arg("--direction")
        .arg("previous")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".payday/config.toml")).unwrap();
    assert!(content.contains("mode = \"specific\""));
    assert!(content.contains("pay_day = 25"));
    assert!(content.contains("direction = \"previous\""));
}

#[test]
fn test_init_day_implies_specific() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--day")
        .arg("15")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".payday/config.toml")).unwrap();
    assert!(content.contains("mode = \"specific\""));
    assert!(content.contains("pay_day = 15"));
}

#[test]
fn test_init_accepts_pay_day_flag() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--pay-day")
        .arg("25")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".payday/config.toml")).unwrap();
    assert!(content.contains("mode = \"specific\""));
    assert!(content.contains("pay_day = 25"));
}

#[test]
fn test_init_pay_day_with_fixed_mode_fails() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--mode")
        .arg("last")
        .arg("--pay-day")
        .arg("25")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--day only applies to --mode specific"));

    assert!(!temp.path().join(".payday").exists());
}

#[test]
fn test_init_day_and_pay_day_together_fails() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--day")
        .arg("25")
        .arg("--pay-day")
        .arg("25")
        .assert()
        .failure()
        .stderr(predicate::str::contains("either --day or --pay-day"));

    assert!(!temp.path().join(".payday").exists());
}

#[test]
fn test_init_first_mode() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--mode")
        .arg("first")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".payday/config.toml")).unwrap();
    assert!(content.contains("mode = \"first\""));
    assert!(content.contains("pay_day = 1"));
}

#[test]
fn test_init_specific_without_day_fails() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--mode")
        .arg("specific")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--day 25"));

    assert!(!temp.path().join(".payday").exists());
}

#[test]
fn test_init_invalid_day_fails() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--day")
        .arg("40")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("between 1 and 31"));
}

#[test]
fn test_init_invalid_mode_fails() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--mode")
        .arg("weekly")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid modes: first, last, specific"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    payday_cmd().arg("init").arg(temp.path()).assert().success();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_get_pay_day() {
    let temp = TempDir::new().unwrap();

    payday_cmd().arg("init").arg(temp.path()).assert().success();

    payday_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("pay_day")
        .assert()
        .success()
        .stdout("31\n");
}

#[test]
fn test_config_set_pay_day() {
    let temp = TempDir::new().unwrap();

    payday_cmd().arg("init").arg(temp.path()).assert().success();

    payday_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("pay_day")
        .arg("25")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set pay_day = 25"));

    payday_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("mode")
        .assert()
        .success()
        .stdout("specific\n");
}

#[test]
fn test_config_set_mode_last_pins_day() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--day")
        .arg("25")
        .assert()
        .success();

    payday_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("mode")
        .arg("last")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".payday/config.toml")).unwrap();
    assert!(content.contains("pay_day = 31"));
}

#[test]
fn test_config_set_invalid_pay_day() {
    let temp = TempDir::new().unwrap();

    payday_cmd().arg("init").arg(temp.path()).assert().success();

    payday_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("pay_day")
        .arg("32")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_config_set_invalid_direction() {
    let temp = TempDir::new().unwrap();

    payday_cmd().arg("init").arg(temp.path()).assert().success();

    payday_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("direction")
        .arg("sideways")
        .assert()
        .failure()
        .stderr(predicate::str::contains("payday config direction previous"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    payday_cmd().arg("init").arg(temp.path()).assert().success();

    payday_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("mode = last"))
        .stdout(predicate::str::contains("pay_day = 31"))
        .stdout(predicate::str::contains("direction = next"))
        .stdout(predicate::str::contains("today_tag = auto on $secondary"))
        .stdout(predicate::str::contains("pay_day_tag = auto on $primary"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();

    payday_cmd().arg("init").arg(temp.path()).assert().success();

    payday_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("editor")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_from_subdirectory() {
    let temp = TempDir::new().unwrap();

    payday_cmd().arg("init").arg(temp.path()).assert().success();

    let subdir = temp.path().join("statements");
    fs::create_dir(&subdir).unwrap();

    payday_cmd()
        .current_dir(&subdir)
        .arg("config")
        .arg("direction")
        .assert()
        .success()
        .stdout("next\n");
}

#[test]
fn test_config_uses_payday_root() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    payday_cmd().arg("init").arg(temp.path()).assert().success();

    payday_cmd()
        .current_dir(elsewhere.path())
        .env("PAYDAY_ROOT", temp.path())
        .arg("config")
        .arg("mode")
        .assert()
        .success()
        .stdout("last\n");
}

#[test]
fn test_config_outside_payday_directory() {
    let temp = TempDir::new().unwrap();

    payday_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("mode")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("payday init"));
}
