// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use serde_json::{json, Value};
pub use tempfile::TempDir;

/// The `fb` binary, acting as `alice` unless `--as` says otherwise.
pub fn fb() -> Command {
    let mut cmd = cargo_bin_cmd!("fb");
    cmd.env("FLOWBOARD_USER", "alice");
    cmd.env_remove("FLOWBOARD_LOG");
    cmd
}

/// Helper to create an initialized temp directory owned by `alice`
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    fb().arg("init")
        .arg("--owner")
        .arg("alice")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Run `fb` in the board and return stdout, asserting success.
pub fn run(temp: &TempDir, args: &[&str]) -> String {
    let output = fb()
        .args(args)
        .current_dir(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8_lossy(&output).into_owned()
}

/// Run `fb` in the board and parse stdout as JSON, asserting success.
pub fn run_json(temp: &TempDir, args: &[&str]) -> Value {
    serde_json::from_str(&run(temp, args)).unwrap()
}

/// Extract the id from a `Created ... <id>: <name>` line.
fn created_id(stdout: &str) -> i64 {
    stdout
        .split_whitespace()
        .find_map(|word| word.strip_suffix(':').and_then(|n| n.parse().ok()))
        .unwrap()
}

/// Helper to open an issue and return its id
pub fn create_issue(temp: &TempDir, title: &str) -> i64 {
    run_json(temp, &["new", title, "-o", "json"])["id"]
        .as_i64()
        .unwrap()
}

/// Helper to open a pull request and return its id
pub fn create_pull(temp: &TempDir, title: &str) -> i64 {
    run_json(temp, &["new", title, "--pull", "-o", "json"])["id"]
        .as_i64()
        .unwrap()
}

pub fn create_label(temp: &TempDir, name: &str) -> i64 {
    created_id(&run(temp, &["label", "new", name]))
}

/// A project with `To Do`, `In Progress` and `Done` columns.
pub struct Board {
    pub project: i64,
    pub todo: i64,
    pub doing: i64,
    pub done: i64,
}

impl Board {
    pub fn id(&self) -> String {
        self.project.to_string()
    }
}

pub fn create_board(temp: &TempDir, title: &str) -> Board {
    let project = created_id(&run(temp, &["project", "new", title]));
    let p = project.to_string();
    let column = |name: &str| created_id(&run(temp, &["project", "column", "add", &p, name]));
    Board {
        project,
        todo: column("To Do"),
        doing: column("In Progress"),
        done: column("Done"),
    }
}

/// Save a workflow through the admin surface and return its id.
pub fn save_workflow(temp: &TempDir, project: i64, body: Value) -> i64 {
    let body = run_json(
        temp,
        &["workflow", "save", &project.to_string(), "--json", &body.to_string()],
    );
    body["workflow"]["id"].as_i64().unwrap()
}

/// Issue details as JSON.
pub fn show(temp: &TempDir, id: i64) -> Value {
    run_json(temp, &["show", &id.to_string(), "-o", "json"])
}

/// Column id an issue sits in on a board, if any.
pub fn column_of(temp: &TempDir, id: i64, project: i64) -> Option<i64> {
    show(temp, id)["boards"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["project_id"] == json!(project))
        .and_then(|b| b["column_id"].as_i64())
}

/// Names of the labels on an issue.
pub fn label_names(temp: &TempDir, id: i64) -> Vec<String> {
    show(temp, id)["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap().to_string())
        .collect()
}
