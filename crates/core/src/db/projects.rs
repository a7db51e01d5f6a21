// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::project::{Column, NewColumn, Project, ProjectIssue, RehomedCards};

use super::{parse_timestamp, Database};

fn row_to_project(row: &Row<'_>) -> rusqlite::Result<Project> {
    let created_str: String = row.get(4)?;
    Ok(Project {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        is_closed: row.get(3)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

fn row_to_column(row: &Row<'_>) -> rusqlite::Result<Column> {
    Ok(Column {
        id: row.get(0)?,
        project_id: row.get(1)?,
        title: row.get(2)?,
        color: row.get(3)?,
        sorting: row.get(4)?,
        is_default: row.get(5)?,
    })
}

fn row_to_project_issue(row: &Row<'_>) -> rusqlite::Result<ProjectIssue> {
    Ok(ProjectIssue {
        project_id: row.get(0)?,
        issue_id: row.get(1)?,
        column_id: row.get(2)?,
        sorting: row.get(3)?,
    })
}

impl Database {
    /// Create a project board.
    pub fn create_project(&self, title: &str, description: Option<&str>) -> Result<Project> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("project title cannot be empty".to_string()));
        }
        self.conn.execute(
            "INSERT INTO projects (title, description, created_at) VALUES (?1, ?2, ?3)",
            params![title, description, Utc::now().to_rfc3339()],
        )?;
        self.get_project(self.conn.last_insert_rowid())
    }

    /// Get a project by ID.
    pub fn get_project(&self, id: i64) -> Result<Project> {
        let project = self
            .conn
            .query_row(
                "SELECT id, title, description, is_closed, created_at FROM projects WHERE id = ?1",
                params![id],
                row_to_project,
            )
            .optional()?;

        project.ok_or(Error::ProjectNotFound(id))
    }

    /// All projects in creation order.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, is_closed, created_at FROM projects ORDER BY id",
        )?;
        let projects = stmt
            .query_map([], row_to_project)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(projects)
    }

    /// Delete a project along with its columns, placements and workflows.
    pub fn delete_project(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM projects WHERE id = ?1", params![id])?;

        if affected == 0 {
            return Err(Error::ProjectNotFound(id));
        }
        Ok(())
    }

    /// Append a column to a project. A default column replaces any previous default.
    pub fn add_column(&self, project_id: i64, column: &NewColumn) -> Result<Column> {
        self.get_project(project_id)?;
        let title = column.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("column title cannot be empty".to_string()));
        }

        let tx = self.conn.unchecked_transaction()?;
        if column.is_default {
            tx.execute(
                "UPDATE project_columns SET is_default = 0 WHERE project_id = ?1",
                params![project_id],
            )?;
        }

        let sorting: i64 = tx.query_row(
            "SELECT COALESCE(MAX(sorting), -1) + 1 FROM project_columns WHERE project_id = ?1",
            params![project_id],
            |row| row.get(0),
        )?;
        tx.execute(
            "INSERT INTO project_columns (project_id, title, color, sorting, is_default)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![project_id, title, column.color, sorting, column.is_default],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        self.get_column(id)
    }

    /// Get a column by ID.
    pub fn get_column(&self, id: i64) -> Result<Column> {
        let column = self
            .conn
            .query_row(
                "SELECT id, project_id, title, color, sorting, is_default
                 FROM project_columns WHERE id = ?1",
                params![id],
                row_to_column,
            )
            .optional()?;

        column.ok_or(Error::ColumnNotFound(id))
    }

    /// Columns of a project ordered by sorting.
    pub fn get_columns(&self, project_id: i64) -> Result<Vec<Column>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, project_id, title, color, sorting, is_default
             FROM project_columns WHERE project_id = ?1 ORDER BY sorting",
        )?;
        let columns = stmt
            .query_map(params![project_id], row_to_column)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    /// Column a newly placed issue lands in: the default column, else the
    /// first column by sorting, else none.
    pub fn landing_column(&self, project_id: i64) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM project_columns WHERE project_id = ?1
                 ORDER BY is_default DESC, sorting LIMIT 1",
                params![project_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    /// Delete a column, moving its issues to the landing column (or no column).
    pub fn delete_column(&self, id: i64) -> Result<RehomedCards> {
        let tx = self.conn.unchecked_transaction()?;
        let rehomed = self.remove_column(id)?;
        tx.commit()?;
        Ok(rehomed)
    }

    /// [`Database::delete_column`] without its own transaction.
    pub(crate) fn remove_column(&self, id: i64) -> Result<RehomedCards> {
        let column = self.get_column(id)?;
        let mut stmt = self.conn.prepare(
            "SELECT issue_id FROM project_issues
             WHERE project_id = ?1 AND column_id = ?2 ORDER BY sorting, issue_id",
        )?;
        let issue_ids = stmt
            .query_map(params![column.project_id, id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;

        self.conn
            .execute("DELETE FROM project_columns WHERE id = ?1", params![id])?;

        let target = self.landing_column(column.project_id)?.unwrap_or(0);
        self.conn.execute(
            "UPDATE project_issues SET column_id = ?1 WHERE project_id = ?2 AND column_id = ?3",
            params![target, column.project_id, id],
        )?;
        Ok(RehomedCards {
            column,
            target,
            issue_ids,
        })
    }

    /// Placement of an issue on a project, if it is on the board.
    pub fn get_project_issue(
        &self,
        project_id: i64,
        issue_id: i64,
    ) -> Result<Option<ProjectIssue>> {
        let placement = self
            .conn
            .query_row(
                "SELECT project_id, issue_id, column_id, sorting FROM project_issues
                 WHERE project_id = ?1 AND issue_id = ?2",
                params![project_id, issue_id],
                row_to_project_issue,
            )
            .optional()?;
        Ok(placement)
    }

    /// Projects an issue is on, in project id order.
    pub fn get_issue_project_ids(&self, issue_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare(
            "SELECT project_id FROM project_issues WHERE issue_id = ?1 ORDER BY project_id",
        )?;
        let ids = stmt
            .query_map(params![issue_id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;
        Ok(ids)
    }

    /// Issues on a project, grouped by column.
    pub fn list_project_issues(&self, project_id: i64) -> Result<Vec<ProjectIssue>> {
        let mut stmt = self.conn.prepare(
            "SELECT project_id, issue_id, column_id, sorting FROM project_issues
             WHERE project_id = ?1 ORDER BY column_id, sorting, issue_id",
        )?;
        let placements = stmt
            .query_map(params![project_id], row_to_project_issue)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(placements)
    }

    fn next_sorting(&self, project_id: i64, column_id: i64) -> Result<i64> {
        let sorting = self.conn.query_row(
            "SELECT COALESCE(MAX(sorting), -1) + 1 FROM project_issues
             WHERE project_id = ?1 AND column_id = ?2",
            params![project_id, column_id],
            |row| row.get(0),
        )?;
        Ok(sorting)
    }

    /// Put an issue on a project board in the given column (0 for none).
    pub fn insert_project_issue(
        &self,
        project_id: i64,
        issue_id: i64,
        column_id: i64,
    ) -> Result<ProjectIssue> {
        let sorting = self.next_sorting(project_id, column_id)?;
        self.conn.execute(
            "INSERT INTO project_issues (project_id, issue_id, column_id, sorting)
             VALUES (?1, ?2, ?3, ?4)",
            params![project_id, issue_id, column_id, sorting],
        )?;
        Ok(ProjectIssue {
            project_id,
            issue_id,
            column_id,
            sorting,
        })
    }

    /// Move an issue that is already on the board to another column.
    pub fn update_project_issue_column(
        &self,
        project_id: i64,
        issue_id: i64,
        column_id: i64,
    ) -> Result<()> {
        let sorting = self.next_sorting(project_id, column_id)?;
        let affected = self.conn.execute(
            "UPDATE project_issues SET column_id = ?1, sorting = ?2
             WHERE project_id = ?3 AND issue_id = ?4",
            params![column_id, sorting, project_id, issue_id],
        )?;

        if affected == 0 {
            return Err(Error::NotOnProject {
                issue: issue_id,
                project: project_id,
            });
        }
        Ok(())
    }

    /// Take an issue off a project board. Returns false if it was not on it.
    pub fn delete_project_issue(&self, project_id: i64, issue_id: i64) -> Result<bool> {
        let affected = self.conn.execute(
            "DELETE FROM project_issues WHERE project_id = ?1 AND issue_id = ?2",
            params![project_id, issue_id],
        )?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
#[path = "projects_tests.rs"]
mod tests;
