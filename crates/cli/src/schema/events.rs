// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `fb workflow events` output.

// These types exist only for schema generation
#![allow(dead_code)]

use schemars::JsonSchema;
use serde::Serialize;

/// One row of the events listing: a configured workflow, or a placeholder
/// (`id` 0, `event_id` set to the event name) for creating one.
#[derive(JsonSchema, Serialize)]
pub struct WorkflowConfigJson {
    pub id: i64,
    /// Workflow id as a string, or the event name for placeholders.
    pub event_id: String,
    pub display_name: String,
    pub base_event_type: WorkflowEvent,
    pub workflow_event: WorkflowEvent,
    pub capabilities: Capabilities,
    pub filters: Vec<Entry>,
    pub actions: Vec<Entry>,
    /// `" (Issues only)"`, `" (Pull requests only)"` or empty.
    pub filter_summary: String,
    pub enabled: bool,
    #[serde(rename = "isConfigured")]
    pub is_configured: bool,
}

/// Events that trigger workflows.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowEvent {
    ItemOpened,
    ItemAddedToProject,
    ItemRemovedFromProject,
    ItemColumnChanged,
    ItemClosed,
    ItemReopened,
    CodeReviewApproved,
    CodeChangesRequested,
    PullRequestMerged,
}

#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    IssueType,
    Labels,
    TargetColumn,
}

#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Column,
    AddLabels,
    RemoveLabels,
    IssueState,
}

/// Filter and action types an event supports.
#[derive(JsonSchema, Serialize)]
pub struct Capabilities {
    pub available_filters: Vec<FilterType>,
    pub available_actions: Vec<ActionType>,
}

/// A stored filter or action.
#[derive(JsonSchema, Serialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}
