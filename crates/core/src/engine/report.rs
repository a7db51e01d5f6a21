// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Results of dispatching one trigger.

use serde::Serialize;

use crate::workflow::{WorkflowAction, WorkflowEvent};

/// What happened to a single action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The action changed the issue.
    Applied,
    /// The issue was already in the requested state.
    Unchanged,
    /// The action could not run (e.g. its column or label is gone).
    Skipped(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub action: WorkflowAction,
    #[serde(flatten)]
    pub outcome: ActionOutcome,
}

/// One enabled workflow considered for a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowOutcome {
    pub workflow_id: i64,
    pub project_id: i64,
    /// False when the filters excluded the issue; `actions` is then empty.
    pub matched: bool,
    pub actions: Vec<ActionResult>,
}

impl WorkflowOutcome {
    pub fn applied(&self) -> impl Iterator<Item = &ActionResult> {
        self.actions
            .iter()
            .filter(|a| a.outcome == ActionOutcome::Applied)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ActionResult> {
        self.actions
            .iter()
            .filter(|a| matches!(a.outcome, ActionOutcome::Skipped(_)))
    }
}

/// Everything a dispatch did for one trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub event: WorkflowEvent,
    pub issue_id: i64,
    pub workflows: Vec<WorkflowOutcome>,
}

impl DispatchReport {
    pub fn new(event: WorkflowEvent, issue_id: i64) -> Self {
        DispatchReport {
            event,
            issue_id,
            workflows: Vec::new(),
        }
    }

    /// Workflows whose filters matched.
    pub fn fired(&self) -> impl Iterator<Item = &WorkflowOutcome> {
        self.workflows.iter().filter(|w| w.matched)
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
