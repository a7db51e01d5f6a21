// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board mutations that feed the workflow engine.
//!
//! Every method here is a trigger call site. Each runs in one transaction:
//! the primary change is made, its timeline entries are written, the
//! collected [`Trigger`]s are handed to the [`Notifier`], and only then is
//! the transaction committed.

use rusqlite::{Transaction, TransactionBehavior};

use crate::db::Database;
use crate::engine::executor::column_title;
use crate::engine::{DispatchReport, Dispatcher, Notifier, Trigger};
use crate::error::{Error, Result};
use crate::issue::{Action, Event, Issue, NewIssue, ReviewKind};
use crate::project::{ProjectIssue, RehomedCards};
use crate::workflow::WorkflowEvent;

/// Result of a board mutation plus what the engine did in response.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub reports: Vec<DispatchReport>,
}

/// Collects timeline entries and triggers while a mutation runs.
struct MutationContext<'a> {
    actor: &'a str,
    events: Vec<Event>,
    triggers: Vec<Trigger>,
}

impl MutationContext<'_> {
    fn log(&mut self, issue_id: i64, action: Action) {
        self.log_values(issue_id, action, None, None);
    }

    fn log_values(
        &mut self,
        issue_id: i64,
        action: Action,
        old: Option<String>,
        new: Option<String>,
    ) {
        self.events
            .push(Event::new(issue_id, action, self.actor).with_values(old, new));
    }

    fn fire(&mut self, trigger: Trigger) {
        self.triggers.push(trigger);
    }
}

/// Issue and project mutations performed on behalf of one user.
pub struct Board<'a, N: Notifier = Dispatcher> {
    db: &'a Database,
    notifier: N,
    actor: String,
}

impl<'a, N: Notifier> Board<'a, N> {
    pub fn new(db: &'a Database, notifier: N, actor: impl Into<String>) -> Self {
        Board {
            db,
            notifier,
            actor: actor.into(),
        }
    }

    pub fn db(&self) -> &'a Database {
        self.db
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    fn mutate<T, F>(&self, f: F) -> Result<Mutation<T>>
    where
        F: FnOnce(&Database, &mut MutationContext<'_>) -> Result<T>,
    {
        // Take the write lock up front so concurrent writers wait on busy_timeout
        let tx = Transaction::new_unchecked(&self.db.conn, TransactionBehavior::Immediate)?;
        let mut ctx = MutationContext {
            actor: &self.actor,
            events: Vec::new(),
            triggers: Vec::new(),
        };

        let value = f(self.db, &mut ctx)?;

        for event in &ctx.events {
            self.db.log_event(event)?;
        }

        let mut reports = Vec::with_capacity(ctx.triggers.len());
        for trigger in &ctx.triggers {
            reports.push(self.notifier.notify(self.db, &self.actor, trigger)?);
        }

        tx.commit()?;
        Ok(Mutation { value, reports })
    }

    /// Open an issue or pull request.
    ///
    /// With a project id the issue is placed on that board without an
    /// added-to-project trigger; `item_opened` then fires on it.
    pub fn open_issue(&self, new: &NewIssue) -> Result<Mutation<Issue>> {
        self.mutate(|db, ctx| {
            if let Some(project_id) = new.project_id {
                db.get_project(project_id)?;
            }
            for label_id in &new.label_ids {
                db.get_label(*label_id)?;
            }

            let issue = db.insert_issue(new.kind, &new.title, new.content.as_deref())?;
            ctx.log(issue.id, Action::Opened);

            for label_id in &new.label_ids {
                if db.add_issue_label(issue.id, *label_id)? {
                    let label = db.get_label(*label_id)?;
                    ctx.log_values(issue.id, Action::Labeled, None, Some(label.name));
                }
            }

            if let Some(project_id) = new.project_id {
                let column = db.landing_column(project_id)?.unwrap_or(0);
                db.insert_project_issue(project_id, issue.id, column)?;
                ctx.log_values(
                    issue.id,
                    Action::ProjectAdded,
                    None,
                    Some(project_id.to_string()),
                );
            }

            ctx.fire(Trigger::issue(WorkflowEvent::ItemOpened, issue.id));
            tracing::debug!(issue = issue.id, kind = %issue.kind, "opened issue");
            Ok(issue)
        })
    }

    /// Close an issue. Closing a closed issue changes nothing and fires nothing.
    pub fn close_issue(&self, issue_id: i64) -> Result<Mutation<Issue>> {
        self.mutate(|db, ctx| {
            if db.set_issue_closed(issue_id, true)? {
                ctx.log(issue_id, Action::Closed);
                ctx.fire(Trigger::issue(WorkflowEvent::ItemClosed, issue_id));
            }
            db.get_issue(issue_id)
        })
    }

    /// Reopen an issue. Merged pull requests stay closed.
    pub fn reopen_issue(&self, issue_id: i64) -> Result<Mutation<Issue>> {
        self.mutate(|db, ctx| {
            if db.get_issue(issue_id)?.has_merged {
                return Err(Error::AlreadyMerged(issue_id));
            }
            if db.set_issue_closed(issue_id, false)? {
                ctx.log(issue_id, Action::Reopened);
                ctx.fire(Trigger::issue(WorkflowEvent::ItemReopened, issue_id));
            }
            db.get_issue(issue_id)
        })
    }

    /// Attach a label. Returns false if the issue already had it.
    pub fn add_label(&self, issue_id: i64, label_id: i64) -> Result<Mutation<bool>> {
        self.mutate(|db, ctx| {
            db.get_issue(issue_id)?;
            let label = db.get_label(label_id)?;
            let added = db.add_issue_label(issue_id, label_id)?;
            if added {
                ctx.log_values(issue_id, Action::Labeled, None, Some(label.name));
            }
            Ok(added)
        })
    }

    /// Detach a label. Returns false if the issue did not have it.
    pub fn remove_label(&self, issue_id: i64, label_id: i64) -> Result<Mutation<bool>> {
        self.mutate(|db, ctx| {
            db.get_issue(issue_id)?;
            let label = db.get_label(label_id)?;
            let removed = db.remove_issue_label(issue_id, label_id)?;
            if removed {
                ctx.log_values(issue_id, Action::Unlabeled, Some(label.name), None);
            }
            Ok(removed)
        })
    }

    /// Explicitly put an existing issue on a project.
    ///
    /// Without a column the issue lands in the default column, else the first
    /// column, else no column. Adding an issue that is already on the board
    /// returns its current placement and fires nothing.
    pub fn add_to_project(
        &self,
        project_id: i64,
        issue_id: i64,
        column_id: Option<i64>,
    ) -> Result<Mutation<ProjectIssue>> {
        self.mutate(|db, ctx| {
            db.get_project(project_id)?;
            db.get_issue(issue_id)?;
            if let Some(existing) = db.get_project_issue(project_id, issue_id)? {
                return Ok(existing);
            }

            let column = match column_id {
                Some(id) => {
                    let column = db.get_column(id)?;
                    if column.project_id != project_id {
                        return Err(Error::ForeignColumn {
                            column: id,
                            project: project_id,
                        });
                    }
                    column.id
                }
                None => db.landing_column(project_id)?.unwrap_or(0),
            };

            let placement = db.insert_project_issue(project_id, issue_id, column)?;
            ctx.log_values(
                issue_id,
                Action::ProjectAdded,
                None,
                Some(project_id.to_string()),
            );
            ctx.fire(Trigger::board(
                WorkflowEvent::ItemAddedToProject,
                project_id,
                issue_id,
            ));
            Ok(placement)
        })
    }

    /// Take an issue off a project. Returns false if it was not on it.
    pub fn remove_from_project(&self, project_id: i64, issue_id: i64) -> Result<Mutation<bool>> {
        self.mutate(|db, ctx| {
            db.get_project(project_id)?;
            db.get_issue(issue_id)?;
            let removed = db.delete_project_issue(project_id, issue_id)?;
            if removed {
                ctx.log_values(
                    issue_id,
                    Action::ProjectRemoved,
                    Some(project_id.to_string()),
                    None,
                );
                ctx.fire(Trigger::board(
                    WorkflowEvent::ItemRemovedFromProject,
                    project_id,
                    issue_id,
                ));
            }
            Ok(removed)
        })
    }

    /// Move an issue on the board to another column of the same project.
    pub fn move_to_column(
        &self,
        project_id: i64,
        column_id: i64,
        issue_id: i64,
    ) -> Result<Mutation<ProjectIssue>> {
        self.mutate(|db, ctx| {
            db.get_project(project_id)?;
            let column = db.get_column(column_id)?;
            if column.project_id != project_id {
                return Err(Error::ForeignColumn {
                    column: column_id,
                    project: project_id,
                });
            }

            let placement = db
                .get_project_issue(project_id, issue_id)?
                .ok_or(Error::NotOnProject {
                    issue: issue_id,
                    project: project_id,
                })?;
            if placement.column_id == column_id {
                return Ok(placement);
            }

            db.update_project_issue_column(project_id, issue_id, column_id)?;
            let old_title = column_title(db, placement.column_id)?;
            ctx.log_values(issue_id, Action::ColumnMoved, old_title, Some(column.title));
            ctx.fire(Trigger::column_changed(project_id, issue_id, column_id));

            db.get_project_issue(project_id, issue_id)?
                .ok_or(Error::NotOnProject {
                    issue: issue_id,
                    project: project_id,
                })
        })
    }

    /// Delete a column. Its cards move to the landing column and each gets a
    /// `column_moved` timeline entry; no workflow fires.
    pub fn delete_column(&self, column_id: i64) -> Result<Mutation<RehomedCards>> {
        self.mutate(|db, ctx| {
            let rehomed = db.remove_column(column_id)?;
            let new_title = column_title(db, rehomed.target)?;
            for &issue_id in &rehomed.issue_ids {
                ctx.log_values(
                    issue_id,
                    Action::ColumnMoved,
                    Some(rehomed.column.title.clone()),
                    new_title.clone(),
                );
            }
            tracing::debug!(
                column = column_id,
                moved = rehomed.issue_ids.len(),
                "deleted column"
            );
            Ok(rehomed)
        })
    }

    /// Submit a review on a pull request.
    pub fn submit_review(&self, issue_id: i64, review: ReviewKind) -> Result<Mutation<()>> {
        self.mutate(|db, ctx| {
            let issue = db.get_issue(issue_id)?;
            if !issue.is_pull() {
                return Err(Error::NotAPullRequest(issue_id));
            }

            match review {
                ReviewKind::Approve => {
                    ctx.log(issue_id, Action::ReviewApproved);
                    ctx.fire(Trigger::issue(WorkflowEvent::CodeReviewApproved, issue_id));
                }
                ReviewKind::Reject => {
                    ctx.log(issue_id, Action::ReviewChangesRequested);
                    ctx.fire(Trigger::issue(WorkflowEvent::CodeChangesRequested, issue_id));
                }
                ReviewKind::Comment => {
                    ctx.log(issue_id, Action::ReviewCommented);
                }
            }
            Ok(())
        })
    }

    /// Merge an open pull request. Fires `pull_request_merged`, then `item_closed`.
    pub fn merge_pull_request(&self, issue_id: i64) -> Result<Mutation<Issue>> {
        self.mutate(|db, ctx| {
            let issue = db.get_issue(issue_id)?;
            if !issue.is_pull() {
                return Err(Error::NotAPullRequest(issue_id));
            }
            if issue.has_merged {
                return Err(Error::AlreadyMerged(issue_id));
            }
            if issue.is_closed {
                return Err(Error::PullRequestClosed(issue_id));
            }

            db.set_issue_merged(issue_id)?;
            ctx.log(issue_id, Action::Merged);
            ctx.log(issue_id, Action::Closed);
            ctx.fire(Trigger::issue(WorkflowEvent::PullRequestMerged, issue_id));
            ctx.fire(Trigger::issue(WorkflowEvent::ItemClosed, issue_id));
            db.get_issue(issue_id)
        })
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
