// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::workflow::{Workflow, WorkflowAction, WorkflowEvent, WorkflowFilter};

use super::{parse_db, parse_json, parse_timestamp, Database};

const WORKFLOW_COLUMNS: &str =
    "id, project_id, event, filters, actions, enabled, created_at, updated_at";

fn row_to_workflow(row: &Row<'_>) -> rusqlite::Result<Workflow> {
    let event_str: String = row.get(2)?;
    let filters_str: String = row.get(3)?;
    let actions_str: String = row.get(4)?;
    let created_str: String = row.get(6)?;
    let updated_str: String = row.get(7)?;
    Ok(Workflow {
        id: row.get(0)?,
        project_id: row.get(1)?,
        event: parse_db(&event_str, "event")?,
        filters: parse_json(&filters_str, "filters")?,
        actions: parse_json(&actions_str, "actions")?,
        enabled: row.get(5)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
    })
}

impl Database {
    /// Check a workflow definition against the project it will live on.
    ///
    /// Filter and action types must be supported by the event, column
    /// references must be columns of this project, and label references
    /// must exist.
    pub fn validate_workflow(
        &self,
        project_id: i64,
        event: WorkflowEvent,
        filters: &[WorkflowFilter],
        actions: &[WorkflowAction],
    ) -> Result<()> {
        self.get_project(project_id)?;
        event.capabilities().check(event, filters, actions)?;

        for filter in filters {
            match *filter {
                WorkflowFilter::TargetColumn(id) => {
                    self.check_column_ref("target_column", project_id, id)?
                }
                WorkflowFilter::Labels(id) => self.check_label_ref("labels", id)?,
                WorkflowFilter::IssueType(_) => {}
            }
        }
        for action in actions {
            match *action {
                WorkflowAction::Column(id) => self.check_column_ref("column", project_id, id)?,
                WorkflowAction::AddLabels(id) => self.check_label_ref("add_labels", id)?,
                WorkflowAction::RemoveLabels(id) => self.check_label_ref("remove_labels", id)?,
                WorkflowAction::IssueState(_) => {}
            }
        }
        Ok(())
    }

    fn check_column_ref(&self, field: &'static str, project_id: i64, column_id: i64) -> Result<()> {
        match self.get_column(column_id) {
            Ok(column) if column.project_id == project_id => Ok(()),
            Ok(_) => Err(Error::ForeignColumn {
                column: column_id,
                project: project_id,
            }),
            Err(Error::ColumnNotFound(_)) => Err(Error::InvalidValue {
                field,
                value: column_id.to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    fn check_label_ref(&self, field: &'static str, label_id: i64) -> Result<()> {
        if self.label_exists(label_id)? {
            Ok(())
        } else {
            Err(Error::InvalidValue {
                field,
                value: label_id.to_string(),
            })
        }
    }

    /// Create a workflow. New workflows are enabled.
    pub fn create_workflow(
        &self,
        project_id: i64,
        event: WorkflowEvent,
        filters: &[WorkflowFilter],
        actions: &[WorkflowAction],
    ) -> Result<Workflow> {
        self.validate_workflow(project_id, event, filters, actions)?;

        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO workflows (project_id, event, filters, actions, enabled, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)",
            params![
                project_id,
                event.as_str(),
                serde_json::to_string(filters)?,
                serde_json::to_string(actions)?,
                now,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(workflow = id, project = project_id, %event, "created workflow");
        self.get_workflow(id)
    }

    /// Get a workflow by ID.
    pub fn get_workflow(&self, id: i64) -> Result<Workflow> {
        let sql = format!("SELECT {WORKFLOW_COLUMNS} FROM workflows WHERE id = ?1");
        let workflow = self
            .conn
            .query_row(&sql, params![id], row_to_workflow)
            .optional()?;

        workflow.ok_or(Error::WorkflowNotFound(id))
    }

    /// All workflows of a project in creation order.
    pub fn find_workflows_by_project_id(&self, project_id: i64) -> Result<Vec<Workflow>> {
        let sql = format!("SELECT {WORKFLOW_COLUMNS} FROM workflows WHERE project_id = ?1 ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let workflows = stmt
            .query_map(params![project_id], row_to_workflow)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(workflows)
    }

    /// Enabled workflows of a project listening for `event`, in creation order.
    pub fn find_enabled_workflows(
        &self,
        project_id: i64,
        event: WorkflowEvent,
    ) -> Result<Vec<Workflow>> {
        let sql = format!(
            "SELECT {WORKFLOW_COLUMNS} FROM workflows
             WHERE project_id = ?1 AND event = ?2 AND enabled = 1 ORDER BY id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let workflows = stmt
            .query_map(params![project_id, event.as_str()], row_to_workflow)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(workflows)
    }

    /// Replace a workflow's filters and actions. The enabled flag is kept.
    pub fn update_workflow(
        &self,
        id: i64,
        filters: &[WorkflowFilter],
        actions: &[WorkflowAction],
    ) -> Result<Workflow> {
        let existing = self.get_workflow(id)?;
        self.validate_workflow(existing.project_id, existing.event, filters, actions)?;

        self.conn.execute(
            "UPDATE workflows SET filters = ?1, actions = ?2, updated_at = ?3 WHERE id = ?4",
            params![
                serde_json::to_string(filters)?,
                serde_json::to_string(actions)?,
                Utc::now().to_rfc3339(),
                id,
            ],
        )?;
        self.get_workflow(id)
    }

    /// Enable or disable a workflow.
    pub fn set_workflow_enabled(&self, id: i64, enabled: bool) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE workflows SET enabled = ?1, updated_at = ?2 WHERE id = ?3",
            params![enabled, Utc::now().to_rfc3339(), id],
        )?;

        if affected == 0 {
            return Err(Error::WorkflowNotFound(id));
        }
        Ok(())
    }

    pub fn enable_workflow(&self, id: i64) -> Result<()> {
        self.set_workflow_enabled(id, true)
    }

    pub fn disable_workflow(&self, id: i64) -> Result<()> {
        self.set_workflow_enabled(id, false)
    }

    /// Delete a workflow. Deleting it a second time reports it missing.
    pub fn delete_workflow(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM workflows WHERE id = ?1", params![id])?;

        if affected == 0 {
            return Err(Error::WorkflowNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "workflows_tests.rs"]
mod tests;
