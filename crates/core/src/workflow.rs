// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow automation rules attached to a project.
//!
//! A [`Workflow`] pairs a triggering [`WorkflowEvent`] with a conjunctive list
//! of [`WorkflowFilter`]s and an ordered list of [`WorkflowAction`]s.
//!
//! Filters and actions are stored and exchanged as `{"type": ..., "value": ...}`
//! objects with string values. They are parsed into typed variants on the
//! way in, so an unparseable value is rejected when the workflow is saved
//! rather than at dispatch time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::IssueKind;

/// Lifecycle trigger of a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowEvent {
    ItemOpened,
    ItemClosed,
    ItemReopened,
    ItemAddedToProject,
    ItemRemovedFromProject,
    ItemColumnChanged,
    CodeReviewApproved,
    CodeChangesRequested,
    PullRequestMerged,
}

impl WorkflowEvent {
    /// All events in the order the workflow editor lists them.
    pub const ALL: [WorkflowEvent; 9] = [
        WorkflowEvent::ItemOpened,
        WorkflowEvent::ItemAddedToProject,
        WorkflowEvent::ItemRemovedFromProject,
        WorkflowEvent::ItemColumnChanged,
        WorkflowEvent::ItemClosed,
        WorkflowEvent::ItemReopened,
        WorkflowEvent::CodeReviewApproved,
        WorkflowEvent::CodeChangesRequested,
        WorkflowEvent::PullRequestMerged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowEvent::ItemOpened => "item_opened",
            WorkflowEvent::ItemClosed => "item_closed",
            WorkflowEvent::ItemReopened => "item_reopened",
            WorkflowEvent::ItemAddedToProject => "item_added_to_project",
            WorkflowEvent::ItemRemovedFromProject => "item_removed_from_project",
            WorkflowEvent::ItemColumnChanged => "item_column_changed",
            WorkflowEvent::CodeReviewApproved => "code_review_approved",
            WorkflowEvent::CodeChangesRequested => "code_changes_requested",
            WorkflowEvent::PullRequestMerged => "pull_request_merged",
        }
    }

    /// Human-readable name shown in workflow listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkflowEvent::ItemOpened => "Item opened",
            WorkflowEvent::ItemClosed => "Item closed",
            WorkflowEvent::ItemReopened => "Item reopened",
            WorkflowEvent::ItemAddedToProject => "Item added to project",
            WorkflowEvent::ItemRemovedFromProject => "Item removed from project",
            WorkflowEvent::ItemColumnChanged => "Item column changed",
            WorkflowEvent::CodeReviewApproved => "Code review approved",
            WorkflowEvent::CodeChangesRequested => "Code changes requested",
            WorkflowEvent::PullRequestMerged => "Pull request merged",
        }
    }

    /// Board-level events concern one project; the rest fan out to every
    /// project the issue is on.
    pub fn is_board_level(&self) -> bool {
        matches!(
            self,
            WorkflowEvent::ItemAddedToProject
                | WorkflowEvent::ItemRemovedFromProject
                | WorkflowEvent::ItemColumnChanged
        )
    }

    /// Filter and action types a workflow on this event may use.
    pub fn capabilities(&self) -> WorkflowEventCapabilities {
        let mut available_filters = vec![FilterType::IssueType, FilterType::Labels];
        if *self == WorkflowEvent::ItemColumnChanged {
            available_filters.push(FilterType::TargetColumn);
        }

        let available_actions = if *self == WorkflowEvent::ItemRemovedFromProject {
            vec![ActionType::AddLabels, ActionType::RemoveLabels]
        } else {
            vec![
                ActionType::Column,
                ActionType::AddLabels,
                ActionType::RemoveLabels,
                ActionType::IssueState,
            ]
        };

        WorkflowEventCapabilities {
            available_filters,
            available_actions,
        }
    }
}

impl fmt::Display for WorkflowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkflowEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        WorkflowEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| Error::InvalidWorkflowEvent(s.to_string()))
    }
}

/// Filter and action types supported by one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowEventCapabilities {
    pub available_filters: Vec<FilterType>,
    pub available_actions: Vec<ActionType>,
}

impl WorkflowEventCapabilities {
    /// Checks every filter and action against this capability set.
    pub fn check(
        &self,
        event: WorkflowEvent,
        filters: &[WorkflowFilter],
        actions: &[WorkflowAction],
    ) -> Result<()> {
        if let Some(f) = filters
            .iter()
            .find(|f| !self.available_filters.contains(&f.filter_type()))
        {
            return Err(Error::Unsupported {
                kind: "filter",
                name: f.filter_type().to_string(),
                event: event.to_string(),
            });
        }
        if let Some(a) = actions
            .iter()
            .find(|a| !self.available_actions.contains(&a.action_type()))
        {
            return Err(Error::Unsupported {
                kind: "action",
                name: a.action_type().to_string(),
                event: event.to_string(),
            });
        }
        Ok(())
    }
}

/// Kinds of filter predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    IssueType,
    Labels,
    TargetColumn,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::IssueType => "issue_type",
            FilterType::Labels => "labels",
            FilterType::TargetColumn => "target_column",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "issue_type" => Ok(FilterType::IssueType),
            "labels" => Ok(FilterType::Labels),
            "target_column" => Ok(FilterType::TargetColumn),
            _ => Err(Error::InvalidFilterType(s.to_string())),
        }
    }
}

/// Kinds of workflow actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Column,
    AddLabels,
    RemoveLabels,
    IssueState,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Column => "column",
            ActionType::AddLabels => "add_labels",
            ActionType::RemoveLabels => "remove_labels",
            ActionType::IssueState => "issue_state",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "column" => Ok(ActionType::Column),
            "add_labels" => Ok(ActionType::AddLabels),
            "remove_labels" => Ok(ActionType::RemoveLabels),
            "issue_state" => Ok(ActionType::IssueState),
            _ => Err(Error::InvalidActionType(s.to_string())),
        }
    }
}

/// Target state for the `issue_state` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    Close,
    Reopen,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Close => "close",
            IssueState::Reopen => "reopen",
        }
    }

    pub fn is_closed(&self) -> bool {
        *self == IssueState::Close
    }
}

impl FromStr for IssueState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "close" | "closed" => Ok(IssueState::Close),
            "reopen" | "reopened" | "open" => Ok(IssueState::Reopen),
            _ => Err(Error::InvalidValue {
                field: "issue_state",
                value: s.to_string(),
            }),
        }
    }
}

/// Parse a positive row id out of a filter or action value.
pub fn parse_id(field: &'static str, value: &str) -> Result<i64> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::InvalidValue {
            field,
            value: value.to_string(),
        }),
    }
}

/// Wire form shared by filters and actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// A single filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub enum WorkflowFilter {
    IssueType(IssueKind),
    /// Satisfied when the issue carries this label (entries are OR'ed).
    Labels(i64),
    /// Destination column of a column change.
    TargetColumn(i64),
}

impl WorkflowFilter {
    /// Parse a filter from its type name and string value.
    pub fn parse(kind: &str, value: &str) -> Result<Self> {
        Ok(match kind.parse::<FilterType>()? {
            FilterType::IssueType => WorkflowFilter::IssueType(value.parse()?),
            FilterType::Labels => WorkflowFilter::Labels(parse_id("labels", value)?),
            FilterType::TargetColumn => {
                WorkflowFilter::TargetColumn(parse_id("target_column", value)?)
            }
        })
    }

    pub fn filter_type(&self) -> FilterType {
        match self {
            WorkflowFilter::IssueType(_) => FilterType::IssueType,
            WorkflowFilter::Labels(_) => FilterType::Labels,
            WorkflowFilter::TargetColumn(_) => FilterType::TargetColumn,
        }
    }

    pub fn value(&self) -> String {
        match self {
            WorkflowFilter::IssueType(kind) => kind.as_str().to_string(),
            WorkflowFilter::Labels(id) | WorkflowFilter::TargetColumn(id) => id.to_string(),
        }
    }
}

impl TryFrom<RawEntry> for WorkflowFilter {
    type Error = Error;

    fn try_from(raw: RawEntry) -> Result<Self> {
        WorkflowFilter::parse(&raw.kind, &raw.value)
    }
}

impl From<WorkflowFilter> for RawEntry {
    fn from(filter: WorkflowFilter) -> Self {
        RawEntry {
            kind: filter.filter_type().to_string(),
            value: filter.value(),
        }
    }
}

/// A single action applied when a workflow fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub enum WorkflowAction {
    /// Move the issue to this column, placing it on the board if needed.
    Column(i64),
    AddLabels(i64),
    RemoveLabels(i64),
    IssueState(IssueState),
}

impl WorkflowAction {
    /// Parse an action from its type name and string value.
    pub fn parse(kind: &str, value: &str) -> Result<Self> {
        Ok(match kind.parse::<ActionType>()? {
            ActionType::Column => WorkflowAction::Column(parse_id("column", value)?),
            ActionType::AddLabels => WorkflowAction::AddLabels(parse_id("add_labels", value)?),
            ActionType::RemoveLabels => {
                WorkflowAction::RemoveLabels(parse_id("remove_labels", value)?)
            }
            ActionType::IssueState => WorkflowAction::IssueState(value.parse()?),
        })
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            WorkflowAction::Column(_) => ActionType::Column,
            WorkflowAction::AddLabels(_) => ActionType::AddLabels,
            WorkflowAction::RemoveLabels(_) => ActionType::RemoveLabels,
            WorkflowAction::IssueState(_) => ActionType::IssueState,
        }
    }

    pub fn value(&self) -> String {
        match self {
            WorkflowAction::Column(id)
            | WorkflowAction::AddLabels(id)
            | WorkflowAction::RemoveLabels(id) => id.to_string(),
            WorkflowAction::IssueState(state) => state.as_str().to_string(),
        }
    }
}

impl fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.action_type(), self.value())
    }
}

impl TryFrom<RawEntry> for WorkflowAction {
    type Error = Error;

    fn try_from(raw: RawEntry) -> Result<Self> {
        WorkflowAction::parse(&raw.kind, &raw.value)
    }
}

impl From<WorkflowAction> for RawEntry {
    fn from(action: WorkflowAction) -> Self {
        RawEntry {
            kind: action.action_type().to_string(),
            value: action.value(),
        }
    }
}

/// A stored automation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: i64,
    pub project_id: i64,
    pub event: WorkflowEvent,
    pub filters: Vec<WorkflowFilter>,
    pub actions: Vec<WorkflowAction>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workflow {
    /// Returns `" (Issues only)"` or `" (Pull requests only)"` when the
    /// workflow is restricted by an `issue_type` filter, else an empty string.
    pub fn filter_summary(&self) -> &'static str {
        filter_summary(&self.filters)
    }

    /// Event display name followed by the filter summary.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.event.display_name(), self.filter_summary())
    }
}

/// Summary suffix for a filter list. See [`Workflow::filter_summary`].
pub fn filter_summary(filters: &[WorkflowFilter]) -> &'static str {
    filters
        .iter()
        .find_map(|f| match f {
            WorkflowFilter::IssueType(IssueKind::Issue) => Some(" (Issues only)"),
            WorkflowFilter::IssueType(IssueKind::PullRequest) => Some(" (Pull requests only)"),
            _ => None,
        })
        .unwrap_or("")
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
