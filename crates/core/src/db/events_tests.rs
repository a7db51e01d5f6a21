// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::{Action, IssueKind};

#[test]
fn log_and_read_timeline() {
    let db = Database::open_in_memory().unwrap();
    let issue = db.insert_issue(IssueKind::Issue, "Task", None).unwrap();

    db.log_event(&Event::new(issue.id, Action::Opened, "alice"))
        .unwrap();
    db.log_event(
        &Event::new(issue.id, Action::Labeled, "alice")
            .with_values(None, Some("bug".into()))
            .via_workflow(3),
    )
    .unwrap();

    let events = db.get_events(issue.id).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, Action::Opened);
    assert_eq!(events[0].workflow_id, None);
    assert_eq!(events[1].action, Action::Labeled);
    assert_eq!(events[1].new_value.as_deref(), Some("bug"));
    assert_eq!(events[1].workflow_id, Some(3));
    assert_eq!(events[1].actor, "alice");
}

#[test]
fn timeline_of_unknown_issue_is_empty() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get_events(99).unwrap().is_empty());
}
