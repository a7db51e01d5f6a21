// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `fb workflow` JSON contract.

#![allow(clippy::unwrap_used)]

mod common;
use common::*;
use std::io::Write;

fn add_collaborators(temp: &TempDir) {
    let path = temp.path().join(".flowboard/config.toml");
    let mut file = std::fs::OpenOptions::new().append(true).open(path).unwrap();
    writeln!(file, "\n[collaborators]\nbob = \"read\"\ncarol = \"write\"").unwrap();
}

/// Run `fb workflow ...` expecting failure; returns the JSON failure body.
fn fail(temp: &TempDir, args: &[&str]) -> Value {
    let output = fb()
        .arg("workflow")
        .args(args)
        .current_dir(temp.path())
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn save_returns_workflow_view() {
    let temp = init_temp();
    let b = create_board(&temp, "Sprint");

    let body = run_json(
        &temp,
        &[
            "workflow",
            "save",
            &b.id(),
            "--json",
            &json!({
                "event_id": "item_opened",
                "filters": { "issue_type": "pull_request" },
                "actions": { "column": b.doing.to_string() },
            })
            .to_string(),
        ],
    );

    assert_eq!(body["success"], json!(true));
    let wf = &body["workflow"];
    assert_eq!(wf["event_id"], json!(wf["id"].as_i64().unwrap().to_string()));
    assert_eq!(wf["display_name"], json!("Item opened (Pull requests only)"));
    assert_eq!(wf["filter_summary"], json!(" (Pull requests only)"));
    assert_eq!(
        wf["filters"],
        json!([{ "type": "issue_type", "value": "pull_request" }])
    );
    assert_eq!(
        wf["actions"],
        json!([{ "type": "column", "value": b.doing.to_string() }])
    );
    assert_eq!(wf["enabled"], json!(true));
}

#[test]
fn save_reads_body_from_stdin() {
    let temp = init_temp();
    let b = create_board(&temp, "Sprint");

    fb().args(["workflow", "save", &b.id(), "--json", "-"])
        .write_stdin(json!({ "event_id": "item_closed" }).to_string())
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"));
}

#[test]
fn save_updates_existing_workflow() {
    let temp = init_temp();
    let b = create_board(&temp, "Sprint");
    let wf = save_workflow(&temp, b.project, json!({ "event_id": "item_closed" }));

    let updated = save_workflow(
        &temp,
        b.project,
        json!({
            "event_id": wf.to_string(),
            "actions": { "closeIssue": true },
        }),
    );
    assert_eq!(updated, wf);

    let list = run_json(&temp, &["workflow", "list", &b.id()]);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(
        list[0]["actions"],
        json!([{ "type": "issue_state", "value": "close" }])
    );
}

#[test]
fn events_listing_shape() {
    let temp = init_temp();
    let b = create_board(&temp, "Sprint");
    let wf = save_workflow(&temp, b.project, json!({ "event_id": "item_column_changed" }));

    let events = run_json(&temp, &["workflow", "events", &b.id()]);
    let rows = events.as_array().unwrap();
    assert_eq!(rows.len(), 9);

    assert_eq!(rows[0]["event_id"], json!("item_opened"));
    assert_eq!(rows[0]["id"], json!(0));
    assert_eq!(rows[0]["isConfigured"], json!(false));

    let changed = rows
        .iter()
        .find(|r| r["workflow_event"] == json!("item_column_changed"))
        .unwrap();
    assert_eq!(changed["id"], json!(wf));
    assert_eq!(changed["isConfigured"], json!(true));
    assert_eq!(
        changed["capabilities"]["available_filters"],
        json!(["issue_type", "labels", "target_column"])
    );

    let removed = rows
        .iter()
        .find(|r| r["workflow_event"] == json!("item_removed_from_project"))
        .unwrap();
    assert_eq!(
        removed["capabilities"]["available_actions"],
        json!(["add_labels", "remove_labels"])
    );
}

#[test]
fn columns_and_labels_listings() {
    let temp = init_temp();
    let b = create_board(&temp, "Sprint");
    let bug = create_label(&temp, "bug");

    let columns = run_json(&temp, &["workflow", "columns", &b.id()]);
    assert_eq!(columns[0], json!({ "id": b.todo, "title": "To Do" }));

    let labels = run_json(&temp, &["workflow", "labels", &b.id()]);
    assert_eq!(labels, json!([{ "id": bug, "name": "bug", "color": "ededed" }]));
}

#[test]
fn status_and_delete() {
    let temp = init_temp();
    let b = create_board(&temp, "Sprint");
    let wf = save_workflow(&temp, b.project, json!({ "event_id": "item_closed" })).to_string();

    let status = run_json(
        &temp,
        &["workflow", "status", &b.id(), &wf, "--enabled", "false"],
    );
    assert_eq!(status, json!({ "success": true, "enabled": false }));

    let deleted = run_json(&temp, &["workflow", "delete", &b.id(), &wf]);
    assert_eq!(deleted, json!({ "success": true }));

    let body = fail(&temp, &["delete", &b.id(), &wf]);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["status"], json!(404));
}

#[test]
fn bad_requests_report_400() {
    let temp = init_temp();
    let b = create_board(&temp, "Sprint");

    for body in [
        json!({ "event_id": "" }),
        json!({ "event_id": "item_deleted" }),
        json!({ "event_id": "item_removed_from_project", "actions": { "column": b.done.to_string() } }),
        json!({ "event_id": "item_closed", "filters": { "target_column": b.done.to_string() } }),
        json!({ "event_id": "item_closed", "actions": { "column": "done" } }),
    ] {
        let out = fail(&temp, &["save", &b.id(), "--json", &body.to_string()]);
        assert_eq!(out["status"], json!(400), "{}", body);
    }

    let out = fail(&temp, &["save", &b.id(), "--json", "{oops"]);
    assert_eq!(out["status"], json!(400));
}

#[test]
fn column_from_another_project_is_rejected() {
    let temp = init_temp();
    let sprint = create_board(&temp, "Sprint");
    let roadmap = create_board(&temp, "Roadmap");

    let body = json!({
        "event_id": "item_closed",
        "actions": { "column": roadmap.done.to_string() },
    });
    let out = fail(&temp, &["save", &sprint.id(), "--json", &body.to_string()]);
    assert_eq!(out["status"], json!(400));
}

#[test]
fn missing_project_is_404() {
    let temp = init_temp();
    let out = fail(&temp, &["events", "42"]);
    assert_eq!(out["status"], json!(404));
}

#[test]
fn access_levels() {
    let temp = init_temp();
    add_collaborators(&temp);
    let b = create_board(&temp, "Sprint");

    let denied = |user: &str| -> Value {
        let output = fb()
            .args(["workflow", "list", &b.id(), "--as", user])
            .current_dir(temp.path())
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&output).unwrap()
    };
    assert_eq!(denied("bob")["status"], json!(403));
    assert_eq!(denied("mallory")["status"], json!(404));

    fb().args(["workflow", "list", &b.id(), "--as", "carol"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn env_user_is_the_actor() {
    let temp = init_temp();
    add_collaborators(&temp);
    let b = create_board(&temp, "Sprint");

    fb().args(["workflow", "list", &b.id()])
        .env("FLOWBOARD_USER", "bob")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bob"));
}
