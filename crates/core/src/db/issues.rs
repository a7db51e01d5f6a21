// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::issue::{Issue, IssueKind};

use super::{parse_db, parse_timestamp, parse_timestamp_opt, Database};

const ISSUE_COLUMNS: &str = "id, idx, kind, title, content, is_closed, has_merged,
     created_at, updated_at, closed_at, merged_at";

fn row_to_issue(row: &Row<'_>) -> rusqlite::Result<Issue> {
    let kind_str: String = row.get(2)?;
    let created_str: String = row.get(7)?;
    let updated_str: String = row.get(8)?;
    Ok(Issue {
        id: row.get(0)?,
        index: row.get(1)?,
        kind: parse_db(&kind_str, "kind")?,
        title: row.get(3)?,
        content: row.get(4)?,
        is_closed: row.get(5)?,
        has_merged: row.get(6)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
        closed_at: parse_timestamp_opt(row.get(9)?, "closed_at")?,
        merged_at: parse_timestamp_opt(row.get(10)?, "merged_at")?,
    })
}

impl Database {
    /// Insert a new open issue, assigning the next display index.
    pub fn insert_issue(
        &self,
        kind: IssueKind,
        title: &str,
        content: Option<&str>,
    ) -> Result<Issue> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("title cannot be empty".to_string()));
        }

        let index: i64 = self.conn.query_row(
            "SELECT COALESCE(MAX(idx), 0) + 1 FROM issues",
            [],
            |row| row.get(0),
        )?;
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO issues (idx, kind, title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            params![index, kind.as_str(), title, content, now],
        )?;
        self.get_issue(self.conn.last_insert_rowid())
    }

    /// Get an issue by ID.
    pub fn get_issue(&self, id: i64) -> Result<Issue> {
        let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues WHERE id = ?1");
        let issue = self
            .conn
            .query_row(&sql, params![id], row_to_issue)
            .optional()?;

        issue.ok_or(Error::IssueNotFound(id))
    }

    /// Check if an issue exists.
    pub fn issue_exists(&self, id: i64) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM issues WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// List issues by display index, open ones only unless `include_closed`.
    pub fn list_issues(&self, include_closed: bool) -> Result<Vec<Issue>> {
        let sql = if include_closed {
            format!("SELECT {ISSUE_COLUMNS} FROM issues ORDER BY idx")
        } else {
            format!("SELECT {ISSUE_COLUMNS} FROM issues WHERE is_closed = 0 ORDER BY idx")
        };
        let mut stmt = self.conn.prepare(&sql)?;
        let issues = stmt
            .query_map([], row_to_issue)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(issues)
    }

    /// Set the closed flag. Returns false when the issue was already in that state.
    pub fn set_issue_closed(&self, id: i64, closed: bool) -> Result<bool> {
        let issue = self.get_issue(id)?;
        if issue.is_closed == closed {
            return Ok(false);
        }

        let now = Utc::now().to_rfc3339();
        let closed_at = closed.then(|| now.clone());
        self.conn.execute(
            "UPDATE issues SET is_closed = ?1, closed_at = ?2, updated_at = ?3 WHERE id = ?4",
            params![closed, closed_at, now, id],
        )?;
        Ok(true)
    }

    /// Mark a pull request merged and closed.
    pub fn set_issue_merged(&self, id: i64) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        let affected = self.conn.execute(
            "UPDATE issues SET has_merged = 1, merged_at = ?1, is_closed = 1,
             closed_at = COALESCE(closed_at, ?1), updated_at = ?1 WHERE id = ?2",
            params![now, id],
        )?;

        if affected == 0 {
            return Err(Error::IssueNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;
