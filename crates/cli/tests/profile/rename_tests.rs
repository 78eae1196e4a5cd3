//! Tests for `flowctl profile rename`.

use crate::common::flowctl_cmd;
use crate::profile::{setup_temp_profiles, write_profiles};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_rename_moves_settings_to_new_name() {
    let (_temp_dir, path) = setup_temp_profiles();
    write_profiles(&path, "[default]\n\n[work]\nA = \"1\"\n");

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "rename", "work", "job"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed profile 'work' to 'job'."));

    let content = fs::read_to_string(&path).unwrap();
    let doc: toml::Table = toml::from_str(&content).unwrap();
    assert!(!doc.contains_key("work"));
    assert_eq!(doc["job"]["A"].as_str(), Some("1"));
}

#[test]
fn test_rename_to_existing_name_fails() {
    let (_temp_dir, path) = setup_temp_profiles();
    write_profiles(&path, "[default]\n\n[work]\n\n[job]\n");

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "rename", "work", "job"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("Profile 'job' already exists."));
}

#[test]
fn test_rename_missing_profile_fails() {
    let (_temp_dir, path) = setup_temp_profiles();

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "rename", "nope", "other"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Profile 'nope' not found."));
}

#[test]
fn test_rename_default_away_is_permitted() {
    let (_temp_dir, path) = setup_temp_profiles();
    write_profiles(&path, "[default]\nA = \"1\"\n");

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "rename", "default", "main"])
        .assert()
        .success();

    // rename does not re-create "default"; only rm resets it
    let content = fs::read_to_string(&path).unwrap();
    let doc: toml::Table = toml::from_str(&content).unwrap();
    assert!(!doc.contains_key("default"));
    assert_eq!(doc["main"]["A"].as_str(), Some("1"));
}
