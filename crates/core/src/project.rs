// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project board types: projects, their columns, and issue placement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A kanban-style project board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_closed: bool,
    pub created_at: DateTime<Utc>,
}

/// An ordered lane on a project board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Position within the project, unique per project.
    pub sorting: i64,
    /// Issues added without an explicit column land here.
    pub is_default: bool,
}

/// Placement of one issue on one project.
///
/// A `column_id` of 0 means the issue is on the board but in no column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIssue {
    pub project_id: i64,
    pub issue_id: i64,
    pub column_id: i64,
    pub sorting: i64,
}

impl ProjectIssue {
    /// Returns the column id, or `None` when the issue sits in no column.
    pub fn column(&self) -> Option<i64> {
        (self.column_id > 0).then_some(self.column_id)
    }
}

/// Cards moved out of a deleted column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RehomedCards {
    /// The column that was deleted.
    pub column: Column,
    /// Column the cards landed in; 0 when the project has no columns left.
    pub target: i64,
    pub issue_ids: Vec<i64>,
}

/// Input for adding a column to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewColumn {
    pub title: String,
    pub color: Option<String>,
    pub is_default: bool,
}

impl NewColumn {
    pub fn new(title: impl Into<String>) -> Self {
        NewColumn {
            title: title.into(),
            color: None,
            is_default: false,
        }
    }

    /// Marks the column as the project's default (builder pattern).
    pub fn default_column(mut self) -> Self {
        self.is_default = true;
        self
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
