// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Applies a workflow's actions to an issue.
//!
//! Actions run in order and independently. A missing column or label skips
//! that one action; the rest of the list still runs. Only storage failures
//! are returned as errors.

use crate::db::Database;
use crate::error::{Error, Result};
use crate::issue::{Action, Event};
use crate::workflow::{IssueState, Workflow, WorkflowAction};

use super::report::{ActionOutcome, ActionResult, WorkflowOutcome};
use super::EngineConfig;

/// Execution context shared by all actions of one dispatch.
pub struct Context<'a> {
    pub db: &'a Database,
    pub config: &'a EngineConfig,
    /// User whose mutation triggered the dispatch.
    pub actor: &'a str,
}

impl Context<'_> {
    fn record(&self, workflow: &Workflow, event: Event) -> Result<()> {
        if self.config.record_timeline {
            self.db.log_event(&event.via_workflow(workflow.id))?;
        }
        Ok(())
    }
}

/// Run every action of `workflow` against `issue_id`.
pub fn execute(ctx: &Context<'_>, workflow: &Workflow, issue_id: i64) -> Result<WorkflowOutcome> {
    let mut actions = Vec::with_capacity(workflow.actions.len());

    for action in &workflow.actions {
        let outcome = match apply(ctx, workflow, issue_id, action) {
            Ok(outcome) => outcome,
            Err(e) if e.is_not_exist() => ActionOutcome::Skipped(e.to_string()),
            Err(e) => return Err(e),
        };

        if let ActionOutcome::Skipped(reason) = &outcome {
            tracing::warn!(
                workflow = workflow.id,
                issue = issue_id,
                %action,
                reason = %reason,
                "skipped workflow action"
            );
        } else {
            tracing::debug!(workflow = workflow.id, issue = issue_id, %action, ?outcome, "ran workflow action");
        }

        actions.push(ActionResult {
            action: *action,
            outcome,
        });
    }

    Ok(WorkflowOutcome {
        workflow_id: workflow.id,
        project_id: workflow.project_id,
        matched: true,
        actions,
    })
}

fn apply(
    ctx: &Context<'_>,
    workflow: &Workflow,
    issue_id: i64,
    action: &WorkflowAction,
) -> Result<ActionOutcome> {
    match *action {
        WorkflowAction::Column(column_id) => move_to_column(ctx, workflow, issue_id, column_id),
        WorkflowAction::AddLabels(label_id) => {
            let label = ctx.db.get_label(label_id)?;
            if !ctx.db.add_issue_label(issue_id, label_id)? {
                return Ok(ActionOutcome::Unchanged);
            }
            ctx.record(
                workflow,
                Event::new(issue_id, Action::Labeled, ctx.actor).with_values(None, Some(label.name)),
            )?;
            Ok(ActionOutcome::Applied)
        }
        WorkflowAction::RemoveLabels(label_id) => {
            let label = ctx.db.get_label(label_id)?;
            if !ctx.db.remove_issue_label(issue_id, label_id)? {
                return Ok(ActionOutcome::Unchanged);
            }
            ctx.record(
                workflow,
                Event::new(issue_id, Action::Unlabeled, ctx.actor).with_values(Some(label.name), None),
            )?;
            Ok(ActionOutcome::Applied)
        }
        WorkflowAction::IssueState(state) => {
            let issue = ctx.db.get_issue(issue_id)?;
            if state == IssueState::Reopen && issue.has_merged {
                return Ok(ActionOutcome::Skipped(
                    Error::AlreadyMerged(issue_id).to_string(),
                ));
            }
            if !ctx.db.set_issue_closed(issue_id, state.is_closed())? {
                return Ok(ActionOutcome::Unchanged);
            }
            let timeline = match state {
                IssueState::Close => Action::Closed,
                IssueState::Reopen => Action::Reopened,
            };
            ctx.record(workflow, Event::new(issue_id, timeline, ctx.actor))?;
            Ok(ActionOutcome::Applied)
        }
    }
}

/// Upsert the issue's placement on the workflow's project.
fn move_to_column(
    ctx: &Context<'_>,
    workflow: &Workflow,
    issue_id: i64,
    column_id: i64,
) -> Result<ActionOutcome> {
    let column = ctx.db.get_column(column_id)?;
    if column.project_id != workflow.project_id {
        return Ok(ActionOutcome::Skipped(
            Error::ForeignColumn {
                column: column_id,
                project: workflow.project_id,
            }
            .to_string(),
        ));
    }

    let old_title = match ctx.db.get_project_issue(workflow.project_id, issue_id)? {
        Some(placement) if placement.column_id == column_id => {
            return Ok(ActionOutcome::Unchanged);
        }
        Some(placement) => {
            ctx.db
                .update_project_issue_column(workflow.project_id, issue_id, column_id)?;
            column_title(ctx.db, placement.column_id)?
        }
        None => {
            ctx.db
                .insert_project_issue(workflow.project_id, issue_id, column_id)?;
            None
        }
    };

    ctx.record(
        workflow,
        Event::new(issue_id, Action::ColumnMoved, ctx.actor)
            .with_values(old_title, Some(column.title)),
    )?;
    Ok(ActionOutcome::Applied)
}

/// Title of a column id, `None` for no column or a deleted one.
pub(crate) fn column_title(db: &Database, column_id: i64) -> Result<Option<String>> {
    if column_id <= 0 {
        return Ok(None);
    }
    match db.get_column(column_id) {
        Ok(column) => Ok(Some(column.title)),
        Err(Error::ColumnNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
