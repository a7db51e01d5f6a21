// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rusqlite::{params, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::issue::{normalize_color, Label};

use super::Database;

fn row_to_label(row: &Row<'_>) -> rusqlite::Result<Label> {
    Ok(Label {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        description: row.get(3)?,
    })
}

impl Database {
    /// Create a repository label.
    pub fn create_label(
        &self,
        name: &str,
        color: &str,
        description: Option<&str>,
    ) -> Result<Label> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("label name cannot be empty".to_string()));
        }
        let color = normalize_color(color)?;

        let exists: bool = self.conn.query_row(
            "SELECT COUNT(*) > 0 FROM labels WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        if exists {
            return Err(Error::DuplicateLabel(name.to_string()));
        }

        self.conn.execute(
            "INSERT INTO labels (name, color, description) VALUES (?1, ?2, ?3)",
            params![name, color, description],
        )?;
        self.get_label(self.conn.last_insert_rowid())
    }

    /// Get a label by ID.
    pub fn get_label(&self, id: i64) -> Result<Label> {
        let label = self
            .conn
            .query_row(
                "SELECT id, name, color, description FROM labels WHERE id = ?1",
                params![id],
                row_to_label,
            )
            .optional()?;

        label.ok_or(Error::LabelNotFound(id))
    }

    /// Check if a label exists.
    pub fn label_exists(&self, id: i64) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM labels WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// All repository labels ordered by name.
    pub fn list_labels(&self) -> Result<Vec<Label>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, color, description FROM labels ORDER BY name, id")?;
        let labels = stmt
            .query_map([], row_to_label)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(labels)
    }

    /// Delete a label. It comes off every issue; workflows that still name
    /// it skip those actions and their `labels` filters stop matching.
    pub fn delete_label(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM labels WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::LabelNotFound(id));
        }
        Ok(())
    }

    /// Attach a label to an issue. Returns false if it was already attached.
    pub fn add_issue_label(&self, issue_id: i64, label_id: i64) -> Result<bool> {
        let affected = self.conn.execute(
            "INSERT OR IGNORE INTO issue_labels (issue_id, label_id) VALUES (?1, ?2)",
            params![issue_id, label_id],
        )?;
        Ok(affected > 0)
    }

    /// Detach a label from an issue. Returns false if it was not attached.
    pub fn remove_issue_label(&self, issue_id: i64, label_id: i64) -> Result<bool> {
        let affected = self.conn.execute(
            "DELETE FROM issue_labels WHERE issue_id = ?1 AND label_id = ?2",
            params![issue_id, label_id],
        )?;
        Ok(affected > 0)
    }

    /// Labels on an issue ordered by name.
    pub fn get_issue_labels(&self, issue_id: i64) -> Result<Vec<Label>> {
        let mut stmt = self.conn.prepare(
            "SELECT l.id, l.name, l.color, l.description
             FROM labels l JOIN issue_labels il ON il.label_id = l.id
             WHERE il.issue_id = ?1 ORDER BY l.name, l.id",
        )?;
        let labels = stmt
            .query_map(params![issue_id], row_to_label)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(labels)
    }

    /// Label ids on an issue in ascending order.
    pub fn get_issue_label_ids(&self, issue_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT label_id FROM issue_labels WHERE issue_id = ?1 ORDER BY label_id")?;
        let ids = stmt
            .query_map(params![issue_id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;
        Ok(ids)
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
