// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for fb-core operations.

use thiserror::Error;

/// All possible errors that can occur in fb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(i64),

    #[error("label not found: {0}")]
    LabelNotFound(i64),

    #[error("project not found: {0}")]
    ProjectNotFound(i64),

    #[error("column not found: {0}")]
    ColumnNotFound(i64),

    #[error("workflow not found: {0}")]
    WorkflowNotFound(i64),

    #[error("issue {issue} is not on project {project}\n  hint: add it first with 'fb project add {project} {issue}'")]
    NotOnProject { issue: i64, project: i64 },

    #[error("column {column} does not belong to project {project}")]
    ForeignColumn { column: i64, project: i64 },

    #[error("permission denied: '{user}' needs write access to {operation}")]
    Forbidden { user: String, operation: String },

    #[error("invalid workflow event: '{0}'\n  hint: valid events are: item_opened, item_closed, item_reopened, item_added_to_project, item_removed_from_project, item_column_changed, code_review_approved, code_changes_requested, pull_request_merged")]
    InvalidWorkflowEvent(String),

    #[error("invalid filter type: '{0}'\n  hint: valid types are: issue_type, labels, target_column")]
    InvalidFilterType(String),

    #[error("invalid action type: '{0}'\n  hint: valid types are: column, add_labels, remove_labels, issue_state")]
    InvalidActionType(String),

    #[error("invalid {field} value: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("{kind} '{name}' is not available for {event} workflows")]
    Unsupported {
        kind: &'static str,
        name: String,
        event: String,
    },

    #[error("invalid issue kind: '{0}'\n  hint: valid kinds are: issue, pull_request")]
    InvalidIssueKind(String),

    #[error("invalid timeline action: '{0}'")]
    InvalidAction(String),

    #[error("invalid access level: '{0}'\n  hint: valid levels are: none, read, write, admin")]
    InvalidAccess(String),

    #[error("invalid review verdict: '{0}'\n  hint: valid verdicts are: approve, reject, comment")]
    InvalidReview(String),

    #[error("issue {0} is not a pull request")]
    NotAPullRequest(i64),

    #[error("pull request {0} is already merged")]
    AlreadyMerged(i64),

    #[error("pull request {0} is closed")]
    PullRequestClosed(i64),

    #[error("label '{0}' already exists")]
    DuplicateLabel(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Returns true for lookup misses (the `ErrNotExist` family).
    pub fn is_not_exist(&self) -> bool {
        matches!(
            self,
            Error::IssueNotFound(_)
                | Error::LabelNotFound(_)
                | Error::ProjectNotFound(_)
                | Error::ColumnNotFound(_)
                | Error::WorkflowNotFound(_)
        )
    }

    /// HTTP-equivalent status code for the admin surface.
    pub fn status_code(&self) -> u16 {
        match self {
            e if e.is_not_exist() => 404,
            Error::Forbidden { .. } => 403,
            Error::Database(_) | Error::Io(_) | Error::CorruptedData(_) => 500,
            _ => 400,
        }
    }
}

/// A specialized Result type for fb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
