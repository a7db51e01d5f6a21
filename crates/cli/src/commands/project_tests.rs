// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::cli::OutputFormat;
use crate::commands::testing::{TestContext, ACTOR};
use fb_core::{WorkflowAction, WorkflowEvent, WorkflowFilter};

fn text() -> OutputArgs {
    OutputArgs {
        output: OutputFormat::Text,
    }
}

fn json() -> OutputArgs {
    OutputArgs {
        output: OutputFormat::Json,
    }
}

#[test]
fn test_create_project() {
    let ctx = TestContext::new();
    let id = create_impl(&ctx.db, "Roadmap", Some("Q3 plans")).unwrap();
    let project = ctx.db.get_project(id).unwrap();
    assert_eq!(project.title, "Roadmap");
    assert_eq!(project.description.as_deref(), Some("Q3 plans"));
}

#[test]
fn test_add_column_with_color_and_default() {
    let ctx = TestContext::new();
    let project = create_impl(&ctx.db, "Roadmap", None).unwrap();
    add_column_impl(&ctx.db, project, "Backlog", false, None).unwrap();
    let triage = add_column_impl(&ctx.db, project, "Triage", true, Some("#FF0000")).unwrap();

    let column = ctx.db.get_column(triage).unwrap();
    assert!(column.is_default);
    assert_eq!(column.color.as_deref(), Some("ff0000"));
    assert_eq!(ctx.db.landing_column(project).unwrap(), Some(triage));
}

#[test]
fn test_add_column_rejects_bad_color() {
    let ctx = TestContext::new();
    let project = create_impl(&ctx.db, "Roadmap", None).unwrap();
    assert!(add_column_impl(&ctx.db, project, "Backlog", false, Some("blue")).is_err());
}

#[test]
fn test_add_lands_in_first_column() {
    let ctx = TestContext::new();
    let board = ctx.create_board("Sprint");
    let a = ctx.create_issue("A");
    let b = ctx.create_issue("B");

    add_impl(&ctx.db, &ctx.config, ACTOR, board.project, &[a, b], None).unwrap();

    for id in [a, b] {
        let placement = ctx.db.get_project_issue(board.project, id).unwrap().unwrap();
        assert_eq!(placement.column_id, board.todo);
    }
}

#[test]
fn test_add_into_explicit_column() {
    let ctx = TestContext::new();
    let board = ctx.create_board("Sprint");
    let id = ctx.create_issue("A");

    add_impl(&ctx.db, &ctx.config, ACTOR, board.project, &[id], Some(board.doing)).unwrap();

    let placement = ctx.db.get_project_issue(board.project, id).unwrap().unwrap();
    assert_eq!(placement.column_id, board.doing);
}

#[test]
fn test_add_fires_workflow() {
    let ctx = TestContext::new();
    let board = ctx.create_board("Sprint");
    let triage = ctx.create_label("triage");
    ctx.db
        .create_workflow(
            board.project,
            WorkflowEvent::ItemAddedToProject,
            &[],
            &[WorkflowAction::AddLabels(triage)],
        )
        .unwrap();
    let id = ctx.create_issue("A");

    add_impl(&ctx.db, &ctx.config, ACTOR, board.project, &[id], None).unwrap();

    assert_eq!(ctx.db.get_issue_label_ids(id).unwrap(), vec![triage]);
}

#[test]
fn test_add_stops_at_first_missing_issue() {
    let ctx = TestContext::new();
    let board = ctx.create_board("Sprint");
    let id = ctx.create_issue("A");

    let err = add_impl(&ctx.db, &ctx.config, ACTOR, board.project, &[id, 999], None).unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert!(ctx.db.get_project_issue(board.project, id).unwrap().is_some());
}

#[test]
fn test_move_fires_column_workflow_with_target_filter() {
    let ctx = TestContext::new();
    let board = ctx.create_board("Sprint");
    ctx.db
        .create_workflow(
            board.project,
            WorkflowEvent::ItemColumnChanged,
            &[WorkflowFilter::TargetColumn(board.done)],
            &[WorkflowAction::IssueState(fb_core::IssueState::Close)],
        )
        .unwrap();
    let id = ctx.create_issue("A");
    add_impl(&ctx.db, &ctx.config, ACTOR, board.project, &[id], None).unwrap();

    move_impl(&ctx.db, &ctx.config, ACTOR, board.project, board.doing, &[id]).unwrap();
    assert!(!ctx.db.get_issue(id).unwrap().is_closed);

    move_impl(&ctx.db, &ctx.config, ACTOR, board.project, board.done, &[id]).unwrap();
    assert!(ctx.db.get_issue(id).unwrap().is_closed);
}

#[test]
fn test_move_requires_placement() {
    let ctx = TestContext::new();
    let board = ctx.create_board("Sprint");
    let id = ctx.create_issue("A");
    assert!(move_impl(&ctx.db, &ctx.config, ACTOR, board.project, board.done, &[id]).is_err());
}

#[test]
fn test_remove_from_every_board() {
    let ctx = TestContext::new();
    let sprint = ctx.create_board("Sprint");
    let roadmap = ctx.create_board("Roadmap");
    let id = ctx.create_issue("A");
    add_impl(&ctx.db, &ctx.config, ACTOR, sprint.project, &[id], None).unwrap();
    add_impl(&ctx.db, &ctx.config, ACTOR, roadmap.project, &[id], None).unwrap();

    remove_impl(&ctx.db, &ctx.config, ACTOR, &[id], None).unwrap();

    assert!(ctx.db.get_issue_project_ids(id).unwrap().is_empty());
}

#[test]
fn test_remove_from_one_board() {
    let ctx = TestContext::new();
    let sprint = ctx.create_board("Sprint");
    let roadmap = ctx.create_board("Roadmap");
    let id = ctx.create_issue("A");
    add_impl(&ctx.db, &ctx.config, ACTOR, sprint.project, &[id], None).unwrap();
    add_impl(&ctx.db, &ctx.config, ACTOR, roadmap.project, &[id], None).unwrap();

    remove_impl(&ctx.db, &ctx.config, ACTOR, &[id], Some(sprint.project)).unwrap();

    assert_eq!(ctx.db.get_issue_project_ids(id).unwrap(), vec![roadmap.project]);
}

#[test]
fn test_remove_not_on_board_is_ok() {
    let ctx = TestContext::new();
    let board = ctx.create_board("Sprint");
    let id = ctx.create_issue("A");
    remove_impl(&ctx.db, &ctx.config, ACTOR, &[id], Some(board.project)).unwrap();
}

#[test]
fn test_columns_text() {
    let ctx = TestContext::new();
    let board = ctx.create_board("Sprint");
    let id = ctx.create_issue("Fix login");
    add_impl(&ctx.db, &ctx.config, ACTOR, board.project, &[id], Some(board.doing)).unwrap();

    let out = columns_impl(&ctx.db, board.project, text()).unwrap();
    assert!(out.starts_with(&format!("Sprint ({})", board.project)));
    assert!(out.contains(&format!("In Progress ({})\n  - #{} Fix login", board.doing, id)));
    assert!(!out.contains("(no column)"));
}

#[test]
fn test_columns_json_lists_unassigned() {
    let ctx = TestContext::new();
    let project = create_impl(&ctx.db, "Empty", None).unwrap();
    let id = ctx.create_issue("Floating");
    add_impl(&ctx.db, &ctx.config, ACTOR, project, &[id], None).unwrap();

    let out = columns_impl(&ctx.db, project, json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["columns"], serde_json::json!([]));
    assert_eq!(value["unassigned"][0]["id"], id);
    assert_eq!(value["unassigned"][0]["kind"], "issue");
}

#[test]
fn test_deleted_column_moves_issues_to_landing_column() {
    let ctx = TestContext::new();
    let board = ctx.create_board("Sprint");
    let id = ctx.create_issue("A");
    add_impl(&ctx.db, &ctx.config, ACTOR, board.project, &[id], Some(board.doing)).unwrap();

    let moved = delete_column_impl(&ctx.db, &ctx.config, ACTOR, board.doing).unwrap();

    assert_eq!(moved, vec![id]);
    let placement = ctx.db.get_project_issue(board.project, id).unwrap().unwrap();
    assert_eq!(placement.column_id, board.todo);
    let last = ctx.db.get_events(id).unwrap().pop().unwrap();
    assert_eq!(last.action, fb_core::Action::ColumnMoved);
    assert_eq!(last.old_value.as_deref(), Some("In Progress"));
    assert_eq!(last.new_value.as_deref(), Some("To Do"));
}

#[test]
fn test_delete_missing_column_is_not_found() {
    let ctx = TestContext::new();
    let err = delete_column_impl(&ctx.db, &ctx.config, ACTOR, 42).unwrap_err();
    assert_eq!(err.status_code(), 404);
}
