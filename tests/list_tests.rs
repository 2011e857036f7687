//! Integration tests for the list command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::{add_snippet, init_library, snipbox_cmd};

/// Write a collection with fixed timestamps straight into the store
fn seed(root: &Path) {
    let document = serde_json::json!({
        "snippets": [
            {
                "id": "py-1", "title": "Foo Bar", "code": "print(1)", "language": "python",
                "description": "", "tags": ["networking"],
                "createdAt": "2025-01-10T00:00:00.000Z", "updatedAt": "2025-01-10T00:00:00.000Z"
            },
            {
                "id": "go-1", "title": "Sockets", "code": "net.Listen()", "language": "go",
                "description": "TCP listener", "tags": [],
                "createdAt": "2025-01-12T00:00:00.000Z", "updatedAt": "2025-01-12T00:00:00.000Z"
            },
            {
                "id": "css-1", "title": "Grid", "code": "display: grid;", "language": "css",
                "description": "", "tags": ["layout"],
                "createdAt": "2025-01-11T00:00:00.000Z", "updatedAt": "2025-01-11T00:00:00.000Z"
            }
        ]
    });
    fs::write(
        root.join(".snipbox/snippets.json"),
        serde_json::to_string(&document).unwrap(),
    )
    .unwrap();
}

fn listed_ids(root: &Path, args: &[&str]) -> Vec<String> {
    let output = snipbox_cmd()
        .current_dir(root)
        .arg("list")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .filter(|line| *line != "No snippets found")
        .map(|line| line.split_whitespace().next().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_empty_library() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No snippets found\n");
}

#[test]
fn test_list_sorted_newest_first() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());
    seed(temp.path());

    assert_eq!(listed_ids(temp.path(), &[]), vec!["go-1", "css-1", "py-1"]);
}

#[test]
fn test_list_shows_labels_dates_and_tags() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());
    seed(temp.path());

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("py-1  2025-01-10  Python"))
        .stdout(predicate::str::contains("#networking"))
        .stdout(predicate::str::contains("CSS"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());
    seed(temp.path());

    assert_eq!(listed_ids(temp.path(), &["--search", "bar"]), vec!["py-1"]);
    assert_eq!(listed_ids(temp.path(), &["-s", "NETWORK"]), vec!["py-1"]);
    assert_eq!(listed_ids(temp.path(), &["-s", "tcp"]), vec!["go-1"]);
    assert!(listed_ids(temp.path(), &["-s", "zzz"]).is_empty());
}

#[test]
fn test_list_language_filter() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());
    seed(temp.path());

    assert_eq!(listed_ids(temp.path(), &["--language", "go"]), vec!["go-1"]);
    assert_eq!(listed_ids(temp.path(), &["-l", "Python"]), vec!["py-1"]);
    assert_eq!(listed_ids(temp.path(), &["-l", "all"]).len(), 3);
    assert_eq!(listed_ids(temp.path(), &["-l", "All"]).len(), 3);
    assert_eq!(listed_ids(temp.path(), &["-l", "ALL"]).len(), 3);
    assert!(listed_ids(temp.path(), &["-l", "rust"]).is_empty());
}

#[test]
fn test_list_search_takes_priority_over_language() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());
    seed(temp.path());

    assert_eq!(
        listed_ids(temp.path(), &["--search", "grid", "--language", "go"]),
        vec!["css-1"]
    );
}

#[test]
fn test_list_limit() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());
    seed(temp.path());

    assert_eq!(listed_ids(temp.path(), &["-n", "2"]), vec!["go-1", "css-1"]);
}

#[test]
fn test_list_recent_caps_at_six() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());
    for i in 0..8 {
        add_snippet(temp.path(), &["--title", &format!("Snippet {}", i)]);
    }

    assert_eq!(listed_ids(temp.path(), &[]).len(), 8);
    assert_eq!(listed_ids(temp.path(), &["--recent"]).len(), 6);
}

#[test]
fn test_list_corrupt_store_is_empty() {
    let temp = TempDir::new().unwrap();
    init_library(temp.path());
    fs::write(temp.path().join(".snipbox/snippets.json"), "not json at all").unwrap();

    snipbox_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No snippets found\n")
        .stderr(predicate::str::contains("failed to load snippets"));
}
