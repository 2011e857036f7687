//! Integration tests for init, config, languages and doctor commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_library, snipbox_cmd};

#[test]
fn test_init_creates_layout() {
    let temp = TempDir::new().unwrap();

    snipbox_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized snipbox library"));

    assert!(temp.path().join(".snipbox").is_dir());
    let config = fs::read_to_string(temp.path().join(".snipbox/config.toml")).unwrap();
    assert!(config.contains("default_language = \"other\""));

    let store = fs::read_to_string(temp.path().join(".snipbox/snippets.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&store).unwrap();
    assert_eq!(value["snippets"], serde_json::json!([]));
}

#[test]
fn test_init_with_default_language() {
    let temp = TempDir::new().unwrap();

    snipbox_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--language")
        .arg("Rust")
        .assert()
        .success();

    let config = fs::read_to_string(temp.path().join(".snipbox/config.toml")).unwrap();
    assert!(config.contains("default_language = \"rust\""));
}

#[test]
fn test_init_unknown_language_fails() {
    let temp = TempDir::new().unwrap();

    snipbox_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--language")
        .arg("cobol")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown language"));

    assert!(!temp.path().join(".snipbox").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_library(temp.path());
    snipbox_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_commands_outside_library_fail() {
    let temp = TempDir::new().unwrap();

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("snipbox init"));
}

#[test]
fn test_snipbox_root_env() {
    let library = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_library(library.path());

    snipbox_cmd()
        .current_dir(elsewhere.path())
        .env("SNIPBOX_ROOT", library.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No snippets found"));
}

#[test]
fn test_discovery_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    snipbox_cmd()
        .current_dir(&nested)
        .arg("list")
        .assert()
        .success();
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());

    snipbox_cmd()
        .current_dir(temp.path())
        .args(["config", "default_language", "go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set default_language = go"));

    snipbox_cmd()
        .current_dir(temp.path())
        .args(["config", "default_language"])
        .assert()
        .success()
        .stdout("go\n");
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());

    snipbox_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_language = other"))
        .stdout(predicate::str::contains("editor = "))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());

    snipbox_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2020-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_languages_lists_labels() {
    snipbox_cmd()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("csharp      C#"))
        .stdout(predicate::str::contains("yaml        YAML"));
}

#[test]
fn test_doctor_healthy_and_corrupt() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 snippets"))
        .stdout(predicate::str::contains("OK"));

    fs::write(temp.path().join(".snipbox/snippets.json"), "{ broken").unwrap();

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("doctor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}
