//! Tests for `flowctl profile ls`.

use crate::common::flowctl_cmd;
use crate::profile::{setup_temp_profiles, write_profiles};
use predicates::prelude::*;

#[test]
fn test_ls_marks_the_active_profile() {
    let (_temp_dir, path) = setup_temp_profiles();
    write_profiles(&path, "[default]\n\n[work]\n\n[job]\n");

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "ls"])
        .assert()
        .success()
        .stdout(predicate::eq("* default\nwork\njob\n"));
}

#[test]
fn test_ls_respects_profile_env_var() {
    let (_temp_dir, path) = setup_temp_profiles();
    write_profiles(&path, "[default]\n\n[work]\n");

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .env("FLOWCTL_PROFILE", "work")
        .args(["profile", "ls"])
        .assert()
        .success()
        .stdout(predicate::eq("default\n* work\n"));
}

#[test]
fn test_ls_blank_profile_env_var_falls_back_to_default() {
    let (_temp_dir, path) = setup_temp_profiles();
    write_profiles(&path, "[default]\n\n[work]\n");

    // empty and whitespace-only values are treated as unset
    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .env("FLOWCTL_PROFILE", "")
        .args(["profile", "ls"])
        .assert()
        .success()
        .stdout(predicate::eq("* default\nwork\n"));

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .env("FLOWCTL_PROFILE", "   ")
        .args(["profile", "ls"])
        .assert()
        .success()
        .stdout(predicate::eq("* default\nwork\n"));
}

#[test]
fn test_ls_first_run_shows_only_default() {
    let (_temp_dir, path) = setup_temp_profiles();

    flowctl_cmd()
        .env("FLOWCTL_PROFILES_PATH", &path)
        .args(["profile", "ls"])
        .assert()
        .success()
        .stdout(predicate::eq("* default\n"));
}
