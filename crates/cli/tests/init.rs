// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn creates_work_dir() {
    let temp = TempDir::new().unwrap();

    fb().arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized board"))
        .stdout(predicate::str::contains("Owner: alice"));

    assert!(temp.path().join(".flowboard").exists());
    assert!(temp.path().join(".flowboard/config.toml").exists());
    assert!(temp.path().join(".flowboard/board.db").exists());
}

#[test]
fn explicit_owner_is_written_to_config() {
    let temp = TempDir::new().unwrap();
    fb().args(["init", "--owner", "bob"])
        .current_dir(temp.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(temp.path().join(".flowboard/config.toml")).unwrap();
    assert!(config.contains("owner = \"bob\""));
}

#[test]
fn fails_if_already_initialized() {
    let temp = init_temp();

    fb().arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn init_at_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested");
    std::fs::create_dir(&target).unwrap();

    fb().args(["init", "--path", target.to_str().unwrap()])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(target.join(".flowboard/board.db").exists());
}

#[test]
fn commands_fail_before_init() {
    let temp = TempDir::new().unwrap();
    fb().arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("fb init"));
}

#[test]
fn commands_find_board_from_subdirectory() {
    let temp = init_temp();
    let sub = temp.path().join("src/deep");
    std::fs::create_dir_all(&sub).unwrap();

    fb().args(["new", "From below"])
        .current_dir(&sub)
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened issue #1: From below"));
}
