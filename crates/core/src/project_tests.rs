// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    no_column = { 0, None },
    in_column = { 5, Some(5) },
)]
fn project_issue_column(column_id: i64, expected: Option<i64>) {
    let placement = ProjectIssue {
        project_id: 1,
        issue_id: 2,
        column_id,
        sorting: 0,
    };
    assert_eq!(placement.column(), expected);
}

#[test]
fn new_column_defaults() {
    let column = NewColumn::new("Backlog");
    assert_eq!(column.title, "Backlog");
    assert!(!column.is_default);
    assert!(NewColumn::new("Todo").default_column().is_default);
}

#[test]
fn column_serializes_without_empty_color() {
    let column = Column {
        id: 3,
        project_id: 1,
        title: "Done".into(),
        color: None,
        sorting: 2,
        is_default: false,
    };
    let json = serde_json::to_value(&column).unwrap();
    assert!(json.get("color").is_none());
    assert_eq!(json["title"], "Done");
}
