// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `fb project columns` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use super::IssueJson;

/// A project board with its columns in order.
#[derive(JsonSchema, Serialize)]
pub struct BoardJson {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub columns: Vec<ColumnJson>,
    /// Issues on the board without a column.
    pub unassigned: Vec<IssueJson>,
}

#[derive(JsonSchema, Serialize)]
pub struct ColumnJson {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// New issues land here.
    pub is_default: bool,
    pub issues: Vec<IssueJson>,
}
