// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! These are separate from the core types to allow schema-specific
//! annotations and to keep schemars out of the core crate.
//!
//! [`IssueJson`] is the issue summary used by `list` and `project columns`.
//! The `events` module exists purely for deriving a JSON Schema for the
//! workflow admin listing, which is printed from the core type directly.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

pub mod board;
pub mod events;
pub mod list;
pub mod show;

/// JSON representation of an issue summary.
#[derive(JsonSchema, Serialize)]
pub struct IssueJson {
    /// Database identifier.
    pub id: i64,
    /// Repository-local number.
    pub index: i64,
    /// Issue or pull request.
    pub kind: IssueKind,
    pub title: String,
    pub is_closed: bool,
    /// Only ever true for pull requests.
    pub has_merged: bool,
    /// Names of the labels attached to the issue.
    pub labels: Vec<String>,
}

impl IssueJson {
    pub fn new(issue: &fb_core::Issue, labels: &[fb_core::Label]) -> Self {
        IssueJson {
            id: issue.id,
            index: issue.index,
            kind: issue.kind.into(),
            title: issue.title.clone(),
            is_closed: issue.is_closed,
            has_merged: issue.has_merged,
            labels: labels.iter().map(|l| l.name.clone()).collect(),
        }
    }
}

/// Issue or pull request.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Issue,
    PullRequest,
}

impl From<fb_core::IssueKind> for IssueKind {
    fn from(value: fb_core::IssueKind) -> Self {
        match value {
            fb_core::IssueKind::Issue => IssueKind::Issue,
            fb_core::IssueKind::PullRequest => IssueKind::PullRequest,
        }
    }
}

/// A repository label.
#[derive(JsonSchema, Serialize)]
pub struct LabelJson {
    pub id: i64,
    pub name: String,
    /// Six lowercase hex digits, no '#'.
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&fb_core::Label> for LabelJson {
    fn from(label: &fb_core::Label) -> Self {
        LabelJson {
            id: label.id,
            name: label.name.clone(),
            color: label.color.clone(),
            description: label.description.clone(),
        }
    }
}

/// Types of change recorded on an issue's timeline.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Opened,
    Closed,
    Reopened,
    Labeled,
    Unlabeled,
    ProjectAdded,
    ProjectRemoved,
    ColumnMoved,
    ReviewApproved,
    ReviewChangesRequested,
    ReviewCommented,
    Merged,
}

impl From<fb_core::Action> for Action {
    fn from(value: fb_core::Action) -> Self {
        match value {
            fb_core::Action::Opened => Action::Opened,
            fb_core::Action::Closed => Action::Closed,
            fb_core::Action::Reopened => Action::Reopened,
            fb_core::Action::Labeled => Action::Labeled,
            fb_core::Action::Unlabeled => Action::Unlabeled,
            fb_core::Action::ProjectAdded => Action::ProjectAdded,
            fb_core::Action::ProjectRemoved => Action::ProjectRemoved,
            fb_core::Action::ColumnMoved => Action::ColumnMoved,
            fb_core::Action::ReviewApproved => Action::ReviewApproved,
            fb_core::Action::ReviewChangesRequested => Action::ReviewChangesRequested,
            fb_core::Action::ReviewCommented => Action::ReviewCommented,
            fb_core::Action::Merged => Action::Merged,
        }
    }
}

/// A timeline entry.
#[derive(JsonSchema, Serialize)]
pub struct EventJson {
    pub id: i64,
    pub action: Action,
    /// Who made the change. Workflow changes carry the user whose action
    /// triggered the workflow.
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    /// Set when a workflow made the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<&fb_core::Event> for EventJson {
    fn from(event: &fb_core::Event) -> Self {
        EventJson {
            id: event.id,
            action: event.action.into(),
            actor: event.actor.clone(),
            old_value: event.old_value.clone(),
            new_value: event.new_value.clone(),
            workflow_id: event.workflow_id,
            created_at: event.created_at,
        }
    }
}
