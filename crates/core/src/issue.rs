// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the flowboard tracker.
//!
//! This module contains the repository-level data types: Issue, IssueKind,
//! Label, ReviewKind, and the timeline Action/Event pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Whether an item is a plain issue or a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Issue,
    PullRequest,
}

impl IssueKind {
    /// Returns the string representation used in storage and workflow filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Issue => "issue",
            IssueKind::PullRequest => "pull_request",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "issue" => Ok(IssueKind::Issue),
            "pull_request" | "pull" | "pr" => Ok(IssueKind::PullRequest),
            _ => Err(Error::InvalidIssueKind(s.to_string())),
        }
    }
}

/// An issue or pull request in the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Database-assigned identifier.
    pub id: i64,
    /// Repository-scoped display number (`#N`).
    pub index: i64,
    pub kind: IssueKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub is_closed: bool,
    /// Only ever true for pull requests.
    pub has_merged: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<DateTime<Utc>>,
}

impl Issue {
    pub fn is_pull(&self) -> bool {
        self.kind == IssueKind::PullRequest
    }
}

/// Input for opening a new issue or pull request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIssue {
    pub kind: IssueKind,
    pub title: String,
    pub content: Option<String>,
    /// Attach to this project at creation time (no added-to-project event).
    pub project_id: Option<i64>,
    pub label_ids: Vec<i64>,
}

impl NewIssue {
    pub fn new(kind: IssueKind, title: impl Into<String>) -> Self {
        NewIssue {
            kind,
            title: title.into(),
            content: None,
            project_id: None,
            label_ids: Vec::new(),
        }
    }

    /// Sets the project to attach to on creation (builder pattern).
    pub fn with_project(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Sets the initial labels (builder pattern).
    pub fn with_labels(mut self, label_ids: Vec<i64>) -> Self {
        self.label_ids = label_ids;
        self
    }

    /// Sets the body text (builder pattern).
    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }
}

/// A repository label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: i64,
    pub name: String,
    /// Six hex digits without the leading `#`.
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Normalize and validate a label color (`#ee0701` or `ee0701`).
pub fn normalize_color(color: &str) -> Result<String> {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(hex.to_lowercase())
    } else {
        Err(Error::InvalidValue {
            field: "color",
            value: color.to_string(),
        })
    }
}

/// Verdict of a pull request review submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewKind {
    Approve,
    /// Request changes.
    Reject,
    Comment,
}

impl ReviewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewKind::Approve => "approve",
            ReviewKind::Reject => "reject",
            ReviewKind::Comment => "comment",
        }
    }
}

impl FromStr for ReviewKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "approve" | "approved" => Ok(ReviewKind::Approve),
            "reject" | "request_changes" | "request-changes" => Ok(ReviewKind::Reject),
            "comment" => Ok(ReviewKind::Comment),
            _ => Err(Error::InvalidReview(s.to_string())),
        }
    }
}

/// Types of actions that can be recorded on an issue's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Opened,
    Closed,
    Reopened,
    Labeled,
    Unlabeled,
    /// Explicitly attached to a project.
    ProjectAdded,
    ProjectRemoved,
    ColumnMoved,
    ReviewApproved,
    ReviewChangesRequested,
    ReviewCommented,
    Merged,
}

impl Action {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Opened => "opened",
            Action::Closed => "closed",
            Action::Reopened => "reopened",
            Action::Labeled => "labeled",
            Action::Unlabeled => "unlabeled",
            Action::ProjectAdded => "project_added",
            Action::ProjectRemoved => "project_removed",
            Action::ColumnMoved => "column_moved",
            Action::ReviewApproved => "review_approved",
            Action::ReviewChangesRequested => "review_changes_requested",
            Action::ReviewCommented => "review_commented",
            Action::Merged => "merged",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "opened" => Ok(Action::Opened),
            "closed" => Ok(Action::Closed),
            "reopened" => Ok(Action::Reopened),
            "labeled" => Ok(Action::Labeled),
            "unlabeled" => Ok(Action::Unlabeled),
            "project_added" => Ok(Action::ProjectAdded),
            "project_removed" => Ok(Action::ProjectRemoved),
            "column_moved" => Ok(Action::ColumnMoved),
            "review_approved" => Ok(Action::ReviewApproved),
            "review_changes_requested" => Ok(Action::ReviewChangesRequested),
            "review_commented" => Ok(Action::ReviewCommented),
            "merged" => Ok(Action::Merged),
            _ => Err(Error::InvalidAction(s.to_string())),
        }
    }
}

/// A timeline entry recording a change to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Database-assigned identifier.
    pub id: i64,
    pub issue_id: i64,
    pub action: Action,
    /// Who made the change. Workflow changes are attributed to the user
    /// whose mutation triggered the workflow.
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    /// Set when the change was made by a workflow action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Creates a new event with the current timestamp.
    pub fn new(issue_id: i64, action: Action, actor: &str) -> Self {
        Event {
            id: 0, // Will be set by database
            issue_id,
            action,
            actor: actor.to_string(),
            old_value: None,
            new_value: None,
            workflow_id: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the old and new values for this event (builder pattern).
    pub fn with_values(mut self, old: Option<String>, new: Option<String>) -> Self {
        self.old_value = old;
        self.new_value = new;
        self
    }

    /// Marks the event as produced by a workflow (builder pattern).
    pub fn via_workflow(mut self, workflow_id: i64) -> Self {
        self.workflow_id = Some(workflow_id);
        self
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
