// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow engine: turns lifecycle triggers into workflow actions.
//!
//! This module provides:
//! - [`Trigger`]: a lifecycle event on one issue
//! - [`Notifier`]: the seam board mutations call at their transaction boundary
//! - [`Dispatcher`]: the notifier that loads, filters and runs workflows
//!
//! Dispatch is synchronous and runs inside the caller's transaction, so
//! workflow effects are visible as soon as the mutation returns. Changes made
//! by workflow actions never produce new triggers.

pub mod executor;
pub mod filter;
mod report;

use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::error::Result;
use crate::workflow::WorkflowEvent;

pub use filter::{matches, Subject};
pub use report::{ActionOutcome, ActionResult, DispatchReport, WorkflowOutcome};

fn default_true() -> bool {
    true
}

/// Engine switches, read from the `[engine]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// When false, dispatch does nothing.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// When false, workflow changes leave no timeline entries.
    #[serde(default = "default_true")]
    pub record_timeline: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            enabled: true,
            record_timeline: true,
        }
    }
}

/// A lifecycle event on one issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub event: WorkflowEvent,
    pub issue_id: i64,
    /// Set for board-level events; issue-level events fan out to every
    /// project the issue is on.
    pub project_id: Option<i64>,
    /// Destination column of a column change.
    pub target_column: Option<i64>,
}

impl Trigger {
    /// An issue-level event, dispatched to every project the issue is on.
    pub fn issue(event: WorkflowEvent, issue_id: i64) -> Self {
        Trigger {
            event,
            issue_id,
            project_id: None,
            target_column: None,
        }
    }

    /// A board-level event concerning a single project.
    pub fn board(event: WorkflowEvent, project_id: i64, issue_id: i64) -> Self {
        Trigger {
            event,
            issue_id,
            project_id: Some(project_id),
            target_column: None,
        }
    }

    pub fn column_changed(project_id: i64, issue_id: i64, to_column: i64) -> Self {
        Trigger {
            target_column: Some(to_column),
            ..Trigger::board(WorkflowEvent::ItemColumnChanged, project_id, issue_id)
        }
    }
}

/// Receives triggers from board mutations.
pub trait Notifier {
    fn notify(&self, db: &Database, actor: &str, trigger: &Trigger) -> Result<DispatchReport>;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, db: &Database, actor: &str, trigger: &Trigger) -> Result<DispatchReport> {
        (**self).notify(db, actor, trigger)
    }
}

/// Runs matching workflows for each trigger.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: EngineConfig,
}

impl Dispatcher {
    pub fn new(config: EngineConfig) -> Self {
        Dispatcher { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Notifier for Dispatcher {
    fn notify(&self, db: &Database, actor: &str, trigger: &Trigger) -> Result<DispatchReport> {
        let mut report = DispatchReport::new(trigger.event, trigger.issue_id);
        if !self.config.enabled {
            tracing::debug!(event = %trigger.event, issue = trigger.issue_id, "engine disabled");
            return Ok(report);
        }

        let projects = match trigger.project_id {
            Some(project_id) => vec![project_id],
            None => db.get_issue_project_ids(trigger.issue_id)?,
        };
        if projects.is_empty() {
            return Ok(report);
        }

        let issue = db.get_issue(trigger.issue_id)?;
        let subject = Subject {
            kind: issue.kind,
            label_ids: db.get_issue_label_ids(issue.id)?,
            target_column: trigger.target_column,
        };
        let ctx = executor::Context {
            db,
            config: &self.config,
            actor,
        };

        for project_id in projects {
            for workflow in db.find_enabled_workflows(project_id, trigger.event)? {
                if !matches(&workflow.filters, &subject) {
                    tracing::debug!(workflow = workflow.id, issue = issue.id, "filters excluded issue");
                    report.workflows.push(WorkflowOutcome {
                        workflow_id: workflow.id,
                        project_id,
                        matched: false,
                        actions: Vec::new(),
                    });
                    continue;
                }

                tracing::info!(
                    workflow = workflow.id,
                    project = project_id,
                    event = %trigger.event,
                    issue = issue.id,
                    "running workflow"
                );
                report
                    .workflows
                    .push(executor::execute(&ctx, &workflow, issue.id)?);
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
