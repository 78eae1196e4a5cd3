//! Tests for `flowctl profile unset`.

use crate::common::flowctl_cmd;
use crate::profile::{setup_temp_profiles, write_profiles};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_unset_removes_settings() {
    let (_temp_dir, path) = setup_temp_profiles();
    write_profiles(&path, "[default]\nA = \"1\"\nB = \"2\"\nC = \"3\"\n");

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "unset", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unset variable 'A'"))
        .stdout(predicate::str::contains("Unset variable 'C'"))
        .stdout(predicate::str::contains("Updated profile 'default'"));

    let content = fs::read_to_string(&path).unwrap();
    let doc: toml::Table = toml::from_str(&content).unwrap();
    let default = doc["default"].as_table().unwrap();
    assert_eq!(default.len(), 1);
    assert_eq!(default["B"].as_str(), Some("2"));
}

#[test]
fn test_unset_missing_key_removes_nothing() {
    let (_temp_dir, path) = setup_temp_profiles();
    write_profiles(&path, "[default]\nA = \"1\"\nB = \"2\"\n");

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "unset", "A", "MISSING"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains(
            "Variable 'MISSING' not found in profile 'default'.",
        ));

    // strict validate-before-mutate: A is still present
    let content = fs::read_to_string(&path).unwrap();
    let doc: toml::Table = toml::from_str(&content).unwrap();
    assert_eq!(doc["default"].as_table().unwrap().len(), 2);
}
