// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `fb show` JSON output.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

use super::{EventJson, IssueKind, LabelJson};

/// Full issue details including labels, board placements and timeline.
#[derive(JsonSchema, Serialize)]
pub struct IssueDetails {
    pub id: i64,
    pub index: i64,
    pub kind: IssueKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub is_closed: bool,
    pub has_merged: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<DateTime<Utc>>,
    pub labels: Vec<LabelJson>,
    /// Boards the issue is on.
    pub boards: Vec<Placement>,
    /// Timeline, oldest first.
    pub events: Vec<EventJson>,
}

/// Where an issue sits on one project board.
#[derive(JsonSchema, Serialize)]
pub struct Placement {
    pub project_id: i64,
    pub project: String,
    /// Absent when the issue is on the board without a column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}
