//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::cfn_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    cfn_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized .cfn-yaml-tags.toml"));

    let content = fs::read_to_string(temp.path().join(".cfn-yaml-tags.toml")).unwrap();
    assert!(content.contains("safe = false"));
    assert!(content.contains("mark_safe = true"));
    assert!(content.contains("compact = false"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    cfn_cmd().arg("init").arg(temp.path()).assert().success();

    cfn_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_get() {
    let temp = TempDir::new().unwrap();
    cfn_cmd().arg("init").arg(temp.path()).assert().success();

    cfn_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("mark_safe")
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_config_set_and_list() {
    let temp = TempDir::new().unwrap();
    cfn_cmd().arg("init").arg(temp.path()).assert().success();

    cfn_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("safe")
        .arg("true")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set safe = true"));

    cfn_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("safe = true"))
        .stdout(predicate::str::contains("mark_safe = true"))
        .stdout(predicate::str::contains("compact = false"));
}

#[test]
fn test_config_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    cfn_cmd().arg("init").arg(temp.path()).assert().success();
    let nested = temp.path().join("stacks").join("network");
    fs::create_dir_all(&nested).unwrap();

    cfn_cmd()
        .current_dir(&nested)
        .arg("config")
        .arg("compact")
        .arg("on")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".cfn-yaml-tags.toml")).unwrap();
    assert!(content.contains("compact = true"));
}

#[test]
fn test_config_invalid_key() {
    let temp = TempDir::new().unwrap();
    cfn_cmd().arg("init").arg(temp.path()).assert().success();

    cfn_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("editor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("cfn-yaml-tags config safe true"));
}

#[test]
fn test_config_invalid_value() {
    let temp = TempDir::new().unwrap();
    cfn_cmd().arg("init").arg(temp.path()).assert().success();

    cfn_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("safe")
        .arg("maybe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected true or false"));
}

#[test]
fn test_config_without_file() {
    let temp = TempDir::new().unwrap();

    cfn_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration found"))
        .stderr(predicate::str::contains("cfn-yaml-tags init"));
}

#[test]
fn test_config_follows_env_file() {
    let temp = TempDir::new().unwrap();
    cfn_cmd().arg("init").arg(temp.path()).assert().success();
    let custom = temp.path().join("custom.toml");
    fs::write(&custom, "compact = false\n").unwrap();

    cfn_cmd()
        .current_dir(temp.path())
        .env("CFN_YAML_TAGS_CONFIG", &custom)
        .arg("config")
        .arg("compact")
        .arg("true")
        .assert()
        .success();

    let content = fs::read_to_string(&custom).unwrap();
    assert!(content.contains("compact = true"));
    let local = fs::read_to_string(temp.path().join(".cfn-yaml-tags.toml")).unwrap();
    assert!(local.contains("compact = false"));

    // json reads the same file the config command wrote
    let template = temp.path().join("stack.yaml");
    fs::write(&template, "A: !Ref B\n").unwrap();
    cfn_cmd()
        .current_dir(temp.path())
        .env("CFN_YAML_TAGS_CONFIG", &custom)
        .arg("json")
        .arg(&template)
        .assert()
        .success()
        .stdout("{\"A\":{\"Ref\":\"B\"}}\n");
}

#[test]
fn test_config_unknown_key_with_value() {
    let temp = TempDir::new().unwrap();
    cfn_cmd().arg("init").arg(temp.path()).assert().success();

    cfn_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("editor")
        .arg("maybe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
