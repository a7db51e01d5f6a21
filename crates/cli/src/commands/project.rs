// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project board commands: projects, columns and issue placement.

use fb_core::issue::normalize_color;
use fb_core::{Database, NewColumn};

use crate::cli::OutputArgs;
use crate::config::Config;
use crate::display::{format_column_header, format_project_line};
use crate::error::Result;
use crate::schema::board::{BoardJson, ColumnJson};
use crate::schema::IssueJson;

use super::{board, open_db, print_reports};

pub fn create(title: &str, description: Option<&str>) -> Result<()> {
    let (db, _) = open_db()?;
    create_impl(&db, title, description)?;
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn create_impl(db: &Database, title: &str, description: Option<&str>) -> Result<i64> {
    let project = db.create_project(title, description)?;
    println!("Created project {}: {}", project.id, project.title);
    Ok(project.id)
}

pub fn list(output: OutputArgs) -> Result<()> {
    let (db, _) = open_db()?;
    let projects = db.list_projects()?;
    if output.is_json() {
        println!("{}", serde_json::to_string_pretty(&projects)?);
    } else {
        for project in &projects {
            println!("{}", format_project_line(project));
        }
    }
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let (db, _) = open_db()?;
    db.delete_project(id)?;
    tracing::info!(project = id, "deleted project");
    println!("Deleted project {}", id);
    Ok(())
}

pub fn add_column(
    project: i64,
    title: &str,
    is_default: bool,
    color: Option<&str>,
) -> Result<()> {
    let (db, _) = open_db()?;
    add_column_impl(&db, project, title, is_default, color)?;
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn add_column_impl(
    db: &Database,
    project: i64,
    title: &str,
    is_default: bool,
    color: Option<&str>,
) -> Result<i64> {
    let mut column = NewColumn::new(title);
    column.color = color.map(normalize_color).transpose()?;
    if is_default {
        column = column.default_column();
    }
    let column = db.add_column(project, &column)?;
    println!("Added column {}: {}", column.id, column.title);
    Ok(column.id)
}

pub fn delete_column(id: i64, actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    delete_column_impl(&db, &config, actor, id)?;
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn delete_column_impl(
    db: &Database,
    config: &Config,
    actor: &str,
    id: i64,
) -> Result<Vec<i64>> {
    let rehomed = board(db, config, actor).delete_column(id)?.value;
    match rehomed.issue_ids.len() {
        0 => println!("Deleted column {}", id),
        n => println!("Deleted column {} ({} issues moved)", id, n),
    }
    Ok(rehomed.issue_ids)
}

pub fn columns(project: i64, output: OutputArgs) -> Result<()> {
    let (db, _) = open_db()?;
    println!("{}", columns_impl(&db, project, output)?);
    Ok(())
}

/// Render a board: its columns in order with the issues in each.
pub(crate) fn columns_impl(db: &Database, project_id: i64, output: OutputArgs) -> Result<String> {
    let project = db.get_project(project_id)?;
    let placements = db.list_project_issues(project_id)?;

    let issues_in = |column_id: i64| -> Result<Vec<IssueJson>> {
        placements
            .iter()
            .filter(|p| p.column_id == column_id)
            .map(|p| -> Result<IssueJson> {
                let issue = db.get_issue(p.issue_id)?;
                let labels = db.get_issue_labels(p.issue_id)?;
                Ok(IssueJson::new(&issue, &labels))
            })
            .collect()
    };

    let columns = db.get_columns(project_id)?;
    let mut lanes = Vec::with_capacity(columns.len());
    for column in &columns {
        lanes.push(ColumnJson {
            id: column.id,
            title: column.title.clone(),
            color: column.color.clone(),
            is_default: column.is_default,
            issues: issues_in(column.id)?,
        });
    }
    let board = BoardJson {
        id: project.id,
        title: project.title,
        description: project.description,
        columns: lanes,
        unassigned: issues_in(0)?,
    };

    if output.is_json() {
        return Ok(serde_json::to_string_pretty(&board)?);
    }

    let mut lines = vec![format!("{} ({})", board.title, board.id)];
    for (column, lane) in columns.iter().zip(&board.columns) {
        lines.push(String::new());
        lines.push(format_column_header(column));
        lines.extend(lane.issues.iter().map(card));
    }
    if !board.unassigned.is_empty() {
        lines.push(String::new());
        lines.push("(no column)".to_string());
        lines.extend(board.unassigned.iter().map(card));
    }
    Ok(lines.join("\n"))
}

pub fn add(project: i64, ids: &[i64], column: Option<i64>, actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    add_impl(&db, &config, actor, project, ids, column)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn add_impl(
    db: &Database,
    config: &Config,
    actor: &str,
    project: i64,
    ids: &[i64],
    column: Option<i64>,
) -> Result<()> {
    let board = board(db, config, actor);
    for &id in ids {
        let mutation = board.add_to_project(project, id, column)?;
        println!("Added #{} to project {}", id, project);
        print_reports(&mutation.reports);
    }
    Ok(())
}

pub fn remove(ids: &[i64], project: Option<i64>, actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    remove_impl(&db, &config, actor, ids, project)
}

/// Internal implementation that accepts db for testing.
///
/// Without a project the issues come off every board they are on.
pub(crate) fn remove_impl(
    db: &Database,
    config: &Config,
    actor: &str,
    ids: &[i64],
    project: Option<i64>,
) -> Result<()> {
    let board = board(db, config, actor);
    for &id in ids {
        let projects = match project {
            Some(p) => vec![p],
            None => {
                db.get_issue(id)?;
                db.get_issue_project_ids(id)?
            }
        };
        for project in projects {
            let mutation = board.remove_from_project(project, id)?;
            if mutation.value {
                println!("Removed #{} from project {}", id, project);
            } else {
                println!("#{} is not on project {}", id, project);
            }
            print_reports(&mutation.reports);
        }
    }
    Ok(())
}

pub fn move_issues(project: i64, column: i64, ids: &[i64], actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    move_impl(&db, &config, actor, project, column, ids)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn move_impl(
    db: &Database,
    config: &Config,
    actor: &str,
    project: i64,
    column: i64,
    ids: &[i64],
) -> Result<()> {
    let board = board(db, config, actor);
    for &id in ids {
        let mutation = board.move_to_column(project, column, id)?;
        println!("Moved #{} to column {}", id, column);
        print_reports(&mutation.reports);
    }
    Ok(())
}

fn card(issue: &IssueJson) -> String {
    format!("  - #{} {}", issue.id, issue.title)
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
