// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::access::Access;
use crate::issue::IssueKind;
use crate::project::NewColumn;
use yare::parameterized;

fn map(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

fn form(event_id: &str, filters: Value, actions: Value) -> WorkflowsPostForm {
    WorkflowsPostForm {
        event_id: event_id.to_string(),
        filters: map(filters),
        actions: map(actions),
    }
}

struct Fixture {
    db: Database,
    policy: AccessPolicy,
    project: i64,
    done: i64,
    bug: i64,
}

fn fixture() -> Fixture {
    let db = Database::open_in_memory().unwrap();
    let project = db.create_project("Board", None).unwrap().id;
    db.add_column(project, &NewColumn::new("To Do")).unwrap();
    let done = db.add_column(project, &NewColumn::new("Done")).unwrap().id;
    let bug = db.create_label("bug", "ee0701", None).unwrap().id;
    let policy = AccessPolicy::new("owner").with_collaborator("reader", Access::Read);
    Fixture {
        db,
        policy,
        project,
        done,
        bug,
    }
}

impl Fixture {
    fn admin(&self) -> Admin<'_> {
        Admin::new(&self.db, &self.policy, "owner")
    }
}

// Form conversion

#[test]
fn filters_from_form_in_fixed_order() {
    let filters = convert_form_to_filters(&map(json!({
        "labels": ["3", 4],
        "issue_type": "issue",
    })))
    .unwrap();
    assert_eq!(
        filters,
        vec![
            WorkflowFilter::IssueType(IssueKind::Issue),
            WorkflowFilter::Labels(3),
            WorkflowFilter::Labels(4),
        ]
    );
}

#[test]
fn empty_filter_values_are_dropped() {
    let filters = convert_form_to_filters(&map(json!({
        "issue_type": "",
        "labels": [],
        "unknown": "x",
    })))
    .unwrap();
    assert!(filters.is_empty());
}

#[test]
fn label_lists_skip_blank_and_non_scalar_entries() {
    let actions = convert_form_to_actions(&map(json!({
        "add_labels": [" 2 ", "", null, {"id": 9}, 3],
    })))
    .unwrap();
    assert_eq!(
        actions,
        vec![WorkflowAction::AddLabels(2), WorkflowAction::AddLabels(3)]
    );
}

#[test]
fn filters_reject_bad_values() {
    let err = convert_form_to_filters(&map(json!({ "labels": ["abc"] }))).unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[test]
fn actions_from_form_in_fixed_order() {
    let actions = convert_form_to_actions(&map(json!({
        "issue_state": "close",
        "remove_labels": ["5"],
        "add_labels": ["2", "3"],
        "column": "7",
    })))
    .unwrap();
    assert_eq!(
        actions,
        vec![
            WorkflowAction::Column(7),
            WorkflowAction::AddLabels(2),
            WorkflowAction::AddLabels(3),
            WorkflowAction::RemoveLabels(5),
            WorkflowAction::IssueState(IssueState::Close),
        ]
    );
}

#[parameterized(
    empty = { json!({ "column": "" }) },
    zero = { json!({ "column": "0" }) },
    negative = { json!({ "column": -1 }) },
)]
fn non_positive_column_is_dropped(actions: Value) {
    assert!(convert_form_to_actions(&map(actions)).unwrap().is_empty());
}

#[test]
fn non_numeric_column_is_rejected() {
    let err = convert_form_to_actions(&map(json!({ "column": "done" }))).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { field: "column", .. }));
}

#[test]
fn legacy_close_flag_means_close() {
    let actions = convert_form_to_actions(&map(json!({ "closeIssue": true }))).unwrap();
    assert_eq!(actions, vec![WorkflowAction::IssueState(IssueState::Close)]);
}

#[test]
fn explicit_issue_state_wins_over_close_flag() {
    let actions = convert_form_to_actions(&map(json!({
        "closeIssue": true,
        "issue_state": "reopen",
    })))
    .unwrap();
    assert_eq!(actions, vec![WorkflowAction::IssueState(IssueState::Reopen)]);
}

// Admin calls

#[test]
fn save_creates_then_updates() {
    let f = fixture();
    let created = f
        .admin()
        .save(
            f.project,
            &form(
                "item_opened",
                json!({ "issue_type": "pull_request" }),
                json!({ "column": f.done.to_string() }),
            ),
        )
        .unwrap();
    assert!(created.success);
    let wf = &created.workflow;
    assert_eq!(wf.event_id, wf.id.to_string());
    assert_eq!(wf.display_name, "Item opened (Pull requests only)");
    assert_eq!(wf.filter_summary, " (Pull requests only)");
    assert!(wf.enabled);

    let updated = f
        .admin()
        .save(
            f.project,
            &form(
                &wf.id.to_string(),
                json!({}),
                json!({ "add_labels": [f.bug.to_string()] }),
            ),
        )
        .unwrap();
    assert_eq!(updated.workflow.id, wf.id);
    assert!(updated.workflow.filters.is_empty());
    assert_eq!(
        updated.workflow.actions,
        vec![WorkflowAction::AddLabels(f.bug)]
    );
    assert_eq!(f.db.find_workflows_by_project_id(f.project).unwrap().len(), 1);
}

#[test]
fn save_response_shape() {
    let f = fixture();
    let resp = f
        .admin()
        .save(
            f.project,
            &form("item_closed", json!({}), json!({ "column": f.done })),
        )
        .unwrap();
    let body = serde_json::to_value(&resp).unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["workflow"]["actions"],
        json!([{ "type": "column", "value": f.done.to_string() }])
    );
    assert_eq!(body["workflow"]["filter_summary"], json!(""));
}

#[test]
fn save_requires_event_id() {
    let f = fixture();
    let err = f
        .admin()
        .save(f.project, &form("", json!({}), json!({})))
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[test]
fn save_rejects_unknown_event() {
    let f = fixture();
    let err = f
        .admin()
        .save(f.project, &form("item_deleted", json!({}), json!({})))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidWorkflowEvent(_)));
}

#[test]
fn save_rejects_unsupported_action() {
    let f = fixture();
    let err = f
        .admin()
        .save(
            f.project,
            &form("item_removed_from_project", json!({}), json!({ "column": f.done })),
        )
        .unwrap_err();
    assert!(matches!(err, Error::Unsupported { kind: "action", .. }));
}

#[test]
fn save_cannot_update_another_projects_workflow() {
    let f = fixture();
    let other = f.db.create_project("Other", None).unwrap().id;
    let wf = f
        .db
        .create_workflow(other, WorkflowEvent::ItemClosed, &[], &[])
        .unwrap();
    let err = f
        .admin()
        .save(f.project, &form(&wf.id.to_string(), json!({}), json!({})))
        .unwrap_err();
    assert!(err.is_not_exist());
}

#[test]
fn events_lists_placeholders_and_configured() {
    let f = fixture();
    let wf = f
        .db
        .create_workflow(f.project, WorkflowEvent::ItemClosed, &[], &[])
        .unwrap();

    let events = f.admin().events(f.project).unwrap();
    assert_eq!(events.len(), WorkflowEvent::ALL.len());

    let opened = &events[0];
    assert_eq!(opened.id, 0);
    assert_eq!(opened.event_id, "item_opened");
    assert!(!opened.is_configured);
    assert!(opened.enabled);

    let closed = events
        .iter()
        .find(|c| c.workflow_event == "item_closed")
        .unwrap();
    assert_eq!(closed.id, wf.id);
    assert_eq!(closed.event_id, wf.id.to_string());
    assert!(closed.is_configured);

    let body = serde_json::to_value(closed).unwrap();
    assert_eq!(body["isConfigured"], json!(true));
    assert!(body["capabilities"]["available_filters"].is_array());
}

#[test]
fn events_lists_every_workflow_of_an_event() {
    let f = fixture();
    for _ in 0..2 {
        f.db
            .create_workflow(f.project, WorkflowEvent::ItemOpened, &[], &[])
            .unwrap();
    }
    let events = f.admin().events(f.project).unwrap();
    let opened = events
        .iter()
        .filter(|c| c.workflow_event == "item_opened")
        .count();
    assert_eq!(opened, 2);
    assert_eq!(events.len(), WorkflowEvent::ALL.len() + 1);
}

#[test]
fn columns_and_labels_listings() {
    let f = fixture();
    let columns = serde_json::to_value(f.admin().columns(f.project).unwrap()).unwrap();
    assert_eq!(columns[1], json!({ "id": f.done, "title": "Done" }));

    let labels = serde_json::to_value(f.admin().labels(f.project).unwrap()).unwrap();
    assert_eq!(
        labels,
        json!([{ "id": f.bug, "name": "bug", "color": "ee0701" }])
    );
}

#[parameterized(
    enable = { "true", true },
    disable = { "false", false },
    garbage = { "yes", false },
)]
fn set_status_returns_new_state(input: &str, expected: bool) {
    let f = fixture();
    let wf = f
        .db
        .create_workflow(f.project, WorkflowEvent::ItemClosed, &[], &[])
        .unwrap();
    let resp = f.admin().set_status(f.project, wf.id, input).unwrap();
    assert!(resp.success);
    assert_eq!(resp.enabled, expected);
    assert_eq!(f.db.get_workflow(wf.id).unwrap().enabled, expected);
}

#[test]
fn delete_twice_reports_missing() {
    let f = fixture();
    let wf = f
        .db
        .create_workflow(f.project, WorkflowEvent::ItemClosed, &[], &[])
        .unwrap();
    let resp = f.admin().delete(f.project, wf.id).unwrap();
    assert_eq!(serde_json::to_value(resp).unwrap(), json!({ "success": true }));

    let err = f.admin().delete(f.project, wf.id).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn missing_project_is_not_found() {
    let f = fixture();
    let err = f.admin().list(999).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn reader_cannot_manage_workflows() {
    let f = fixture();
    let admin = Admin::new(&f.db, &f.policy, "reader");
    let err = admin
        .save(f.project, &form("item_opened", json!({}), json!({})))
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert!(f.db.find_workflows_by_project_id(f.project).unwrap().is_empty());
}

#[test]
fn stranger_sees_not_found() {
    let f = fixture();
    let admin = Admin::new(&f.db, &f.policy, "mallory");
    assert_eq!(admin.events(f.project).unwrap_err().status_code(), 404);
}

#[test]
fn failure_body_shape() {
    let body = failure_body(&Error::WorkflowNotFound(9));
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["status"], json!(404));
    assert!(body["error"].as_str().unwrap().contains('9'));
}
