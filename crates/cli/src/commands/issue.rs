// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue lifecycle commands: new, close, reopen, merge, show and list.

use fb_core::{Database, IssueKind, NewIssue};

use crate::cli::OutputArgs;
use crate::config::Config;
use crate::display::{format_issue_details, format_issue_line};
use crate::error::Result;
use crate::schema::list::ListOutputJson;
use crate::schema::show::{IssueDetails, Placement};
use crate::schema::{EventJson, IssueJson, LabelJson};

use super::{board, open_db, print_reports};

pub struct NewArgs {
    pub title: String,
    pub content: Option<String>,
    pub pull: bool,
    pub project: Option<i64>,
    pub labels: Vec<i64>,
}

impl NewArgs {
    fn to_new_issue(&self) -> NewIssue {
        let kind = if self.pull {
            IssueKind::PullRequest
        } else {
            IssueKind::Issue
        };
        let mut new = NewIssue::new(kind, self.title.trim())
            .with_content(self.content.clone())
            .with_labels(self.labels.clone());
        if let Some(project) = self.project {
            new = new.with_project(project);
        }
        new
    }
}

pub fn new(args: NewArgs, output: OutputArgs, actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    new_impl(&db, &config, actor, &args, output)?;
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// JSON output prints only the created issue.
pub(crate) fn new_impl(
    db: &Database,
    config: &Config,
    actor: &str,
    args: &NewArgs,
    output: OutputArgs,
) -> Result<i64> {
    let mutation = board(db, config, actor).open_issue(&args.to_new_issue())?;
    let issue = mutation.value;
    if output.is_json() {
        let labels = db.get_issue_labels(issue.id)?;
        println!("{}", serde_json::to_string(&IssueJson::new(&issue, &labels))?);
    } else {
        println!("Opened {} #{}: {}", issue.kind, issue.id, issue.title);
        print_reports(&mutation.reports);
    }
    Ok(issue.id)
}

pub fn close(ids: &[i64], actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    close_impl(&db, &config, actor, ids)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn close_impl(db: &Database, config: &Config, actor: &str, ids: &[i64]) -> Result<()> {
    let board = board(db, config, actor);
    for &id in ids {
        let mutation = board.close_issue(id)?;
        println!("Closed #{}", mutation.value.id);
        print_reports(&mutation.reports);
    }
    Ok(())
}

pub fn reopen(ids: &[i64], actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    reopen_impl(&db, &config, actor, ids)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn reopen_impl(db: &Database, config: &Config, actor: &str, ids: &[i64]) -> Result<()> {
    let board = board(db, config, actor);
    for &id in ids {
        let mutation = board.reopen_issue(id)?;
        println!("Reopened #{}", mutation.value.id);
        print_reports(&mutation.reports);
    }
    Ok(())
}

pub fn merge(id: i64, actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    merge_impl(&db, &config, actor, id)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn merge_impl(db: &Database, config: &Config, actor: &str, id: i64) -> Result<()> {
    let mutation = board(db, config, actor).merge_pull_request(id)?;
    println!("Merged #{}", mutation.value.id);
    print_reports(&mutation.reports);
    Ok(())
}

pub fn show(id: i64, output: OutputArgs) -> Result<()> {
    let (db, _) = open_db()?;
    println!("{}", show_impl(&db, id, output)?);
    Ok(())
}

/// Render an issue as text or JSON.
pub(crate) fn show_impl(db: &Database, id: i64, output: OutputArgs) -> Result<String> {
    let issue = db.get_issue(id)?;
    let labels = db.get_issue_labels(id)?;
    let events = db.get_events(id)?;

    let mut boards = Vec::new();
    for project_id in db.get_issue_project_ids(id)? {
        let project = db.get_project(project_id)?;
        let column = match db.get_project_issue(project_id, id)?.and_then(|p| p.column()) {
            Some(column_id) => Some(db.get_column(column_id)?),
            None => None,
        };
        boards.push((project, column));
    }

    if !output.is_json() {
        return Ok(format_issue_details(&issue, &labels, &boards, &events));
    }

    let details = IssueDetails {
        id: issue.id,
        index: issue.index,
        kind: issue.kind.into(),
        title: issue.title.clone(),
        content: issue.content.clone(),
        is_closed: issue.is_closed,
        has_merged: issue.has_merged,
        created_at: issue.created_at,
        updated_at: issue.updated_at,
        closed_at: issue.closed_at,
        merged_at: issue.merged_at,
        labels: labels.iter().map(LabelJson::from).collect(),
        boards: boards
            .iter()
            .map(|(project, column)| Placement {
                project_id: project.id,
                project: project.title.clone(),
                column_id: column.as_ref().map(|c| c.id),
                column: column.as_ref().map(|c| c.title.clone()),
            })
            .collect(),
        events: events.iter().map(EventJson::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&details)?)
}

pub fn list(all: bool, output: OutputArgs) -> Result<()> {
    let (db, _) = open_db()?;
    println!("{}", list_impl(&db, all, output)?);
    Ok(())
}

/// Render the issue list as text or JSON.
pub(crate) fn list_impl(db: &Database, all: bool, output: OutputArgs) -> Result<String> {
    let mut rows = Vec::new();
    for issue in db.list_issues(all)? {
        let labels = db.get_issue_labels(issue.id)?;
        rows.push((issue, labels));
    }

    if output.is_json() {
        let out = ListOutputJson {
            issues: rows
                .iter()
                .map(|(issue, labels)| IssueJson::new(issue, labels))
                .collect(),
        };
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    Ok(rows
        .iter()
        .map(|(issue, labels)| format_issue_line(issue, labels))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
