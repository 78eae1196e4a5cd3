//! Tests for `flowctl profile set`.

use crate::common::flowctl_cmd;
use crate::profile::setup_temp_profiles;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_set_writes_values_to_default_profile() {
    let (_temp_dir, path) = setup_temp_profiles();

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "set", "FLOWCTL_LOG_LEVEL=DEBUG", "A=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Set variable 'FLOWCTL_LOG_LEVEL' to 'DEBUG'",
        ))
        .stdout(predicate::str::contains("Set variable 'A' to '1'"))
        .stdout(predicate::str::contains("Updated profile 'default'"));

    let content = fs::read_to_string(&path).unwrap();
    let doc: toml::Table = toml::from_str(&content).unwrap();
    assert_eq!(doc["default"]["FLOWCTL_LOG_LEVEL"].as_str(), Some("DEBUG"));
    assert_eq!(doc["default"]["A"].as_str(), Some("1"));
}

#[test]
fn test_set_targets_the_selected_profile() {
    let (_temp_dir, path) = setup_temp_profiles();

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "create", "work"])
        .assert()
        .success();

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["-p", "work", "profile", "set", "A=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated profile 'work'"));

    let content = fs::read_to_string(&path).unwrap();
    let doc: toml::Table = toml::from_str(&content).unwrap();
    assert_eq!(doc["work"]["A"].as_str(), Some("1"));
    assert!(doc["default"].as_table().unwrap().is_empty());
}

#[test]
fn test_set_malformed_token_applies_nothing() {
    let (_temp_dir, path) = setup_temp_profiles();

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "set", "A=1", "BAD_TOKEN"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains(
            "Failed to parse argument 'BAD_TOKEN'. Use the format 'VAR=VAL'.",
        ));

    // nothing was saved, not even the valid A=1
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_set_warns_when_variable_also_set_in_environment() {
    let (_temp_dir, path) = setup_temp_profiles();

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .env("FLOWCTL_LOG_LEVEL", "WARNING")
        .args(["profile", "set", "FLOWCTL_LOG_LEVEL=DEBUG"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "'FLOWCTL_LOG_LEVEL' is also set by an environment variable",
        ))
        .stdout(predicate::str::contains(
            "flowctl profile unset FLOWCTL_LOG_LEVEL",
        ));
}

#[test]
fn test_set_without_environment_override_does_not_warn() {
    let (_temp_dir, path) = setup_temp_profiles();

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "set", "FLOWCTL_LOG_LEVEL=DEBUG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("also set by an environment variable").not());
}
