// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow administration: the JSON contract of the project workflow editor.
//!
//! Request bodies arrive as loosely typed maps (`{"labels": ["3", "4"]}`,
//! `{"column": "7"}`) and are converted to typed filters and actions here,
//! before anything reaches the store. Every call checks the project exists
//! and that the acting user may write to it.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::access::AccessPolicy;
use crate::db::Database;
use crate::error::{Error, Result};
use crate::project::Project;
use crate::workflow::{
    filter_summary, parse_id, IssueState, Workflow, WorkflowAction, WorkflowEvent,
    WorkflowEventCapabilities, WorkflowFilter,
};

/// Body of a workflow save request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkflowsPostForm {
    /// Workflow id to update, or an event name to create a workflow for.
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub filters: Map<String, Value>,
    #[serde(default)]
    pub actions: Map<String, Value>,
}

/// Flatten a form value into its non-empty string entries.
fn entries(value: &Value) -> Vec<String> {
    let one = |v: &Value| match v {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };
    match value {
        Value::Array(items) => items.iter().filter_map(one).collect::<Vec<_>>(),
        other => one(other).into_iter().collect(),
    }
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect()
}

/// Convert form filters to typed filters.
///
/// Keys are read in a fixed order (`issue_type`, `labels`, `target_column`);
/// unknown keys and empty values are ignored.
pub fn convert_form_to_filters(form: &Map<String, Value>) -> Result<Vec<WorkflowFilter>> {
    let mut filters = Vec::new();
    for key in ["issue_type", "labels", "target_column"] {
        let Some(value) = form.get(key) else {
            continue;
        };
        let values = entries(value);
        // Only `labels` takes several entries
        let take = if key == "labels" { values.len() } else { 1 };
        for v in values.iter().take(take) {
            filters.push(WorkflowFilter::parse(key, v)?);
        }
    }
    Ok(filters)
}

/// Convert form actions to typed actions.
///
/// Keys are read in a fixed order (`column`, `add_labels`, `remove_labels`,
/// `issue_state`). A column that is not a positive id is dropped, and the
/// legacy `closeIssue: true` flag means `issue_state: close`.
pub fn convert_form_to_actions(form: &Map<String, Value>) -> Result<Vec<WorkflowAction>> {
    let mut actions = Vec::new();

    if let Some(column) = form.get("column").and_then(|v| entries(v).into_iter().next()) {
        match column.parse::<i64>() {
            Ok(id) if id > 0 => actions.push(WorkflowAction::Column(id)),
            Ok(_) => {}
            Err(_) => {
                return Err(Error::InvalidValue {
                    field: "column",
                    value: column,
                })
            }
        }
    }

    if let Some(value) = form.get("add_labels") {
        for id in entries(value) {
            actions.push(WorkflowAction::AddLabels(parse_id("add_labels", &id)?));
        }
    }
    if let Some(value) = form.get("remove_labels") {
        for id in entries(value) {
            actions.push(WorkflowAction::RemoveLabels(parse_id("remove_labels", &id)?));
        }
    }

    let state = form
        .get("issue_state")
        .and_then(|v| entries(v).into_iter().next());
    match state {
        Some(state) => actions.push(WorkflowAction::IssueState(state.parse()?)),
        None if form.get("closeIssue") == Some(&Value::Bool(true)) => {
            actions.push(WorkflowAction::IssueState(IssueState::Close))
        }
        None => {}
    }

    Ok(actions)
}

/// A workflow as returned by save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowView {
    pub id: i64,
    pub event_id: String,
    pub display_name: String,
    pub filters: Vec<WorkflowFilter>,
    pub actions: Vec<WorkflowAction>,
    pub filter_summary: String,
    pub enabled: bool,
}

impl From<&Workflow> for WorkflowView {
    fn from(wf: &Workflow) -> Self {
        WorkflowView {
            id: wf.id,
            event_id: wf.id.to_string(),
            display_name: wf.display_name(),
            filters: wf.filters.clone(),
            actions: wf.actions.clone(),
            filter_summary: wf.filter_summary().to_string(),
            enabled: wf.enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub workflow: WorkflowView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// One row of the events listing: a configured workflow or a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowConfig {
    pub id: i64,
    pub event_id: String,
    pub display_name: String,
    pub base_event_type: String,
    pub workflow_event: String,
    pub capabilities: WorkflowEventCapabilities,
    pub filters: Vec<WorkflowFilter>,
    pub actions: Vec<WorkflowAction>,
    pub filter_summary: String,
    pub enabled: bool,
    #[serde(rename = "isConfigured")]
    pub is_configured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnOption {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelOption {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// JSON body returned for a failed admin call.
pub fn failure_body(err: &Error) -> Value {
    json!({
        "success": false,
        "status": err.status_code(),
        "error": err.to_string(),
    })
}

/// Workflow administration for one acting user.
pub struct Admin<'a> {
    db: &'a Database,
    policy: &'a AccessPolicy,
    actor: &'a str,
}

impl<'a> Admin<'a> {
    pub fn new(db: &'a Database, policy: &'a AccessPolicy, actor: &'a str) -> Self {
        Admin { db, policy, actor }
    }

    fn authorize(&self, project_id: i64) -> Result<Project> {
        let project = self.db.get_project(project_id)?;
        self.policy.require_write(self.actor, project_id)?;
        Ok(project)
    }

    /// Load a workflow, hiding workflows that belong to another project.
    fn project_workflow(&self, project_id: i64, workflow_id: i64) -> Result<Workflow> {
        let wf = self.db.get_workflow(workflow_id)?;
        if wf.project_id != project_id {
            return Err(Error::WorkflowNotFound(workflow_id));
        }
        Ok(wf)
    }

    /// Workflows of a project in creation order.
    pub fn list(&self, project_id: i64) -> Result<Vec<Workflow>> {
        self.authorize(project_id)?;
        self.db.find_workflows_by_project_id(project_id)
    }

    /// Every event in editor order, with its configured workflows or a
    /// placeholder for creating one.
    pub fn events(&self, project_id: i64) -> Result<Vec<WorkflowConfig>> {
        self.authorize(project_id)?;
        let workflows = self.db.find_workflows_by_project_id(project_id)?;

        let mut out = Vec::new();
        for event in WorkflowEvent::ALL {
            let capabilities = event.capabilities();
            let configured: Vec<&Workflow> =
                workflows.iter().filter(|wf| wf.event == event).collect();

            if configured.is_empty() {
                out.push(WorkflowConfig {
                    id: 0,
                    event_id: event.to_string(),
                    display_name: event.display_name().to_string(),
                    base_event_type: event.to_string(),
                    workflow_event: event.to_string(),
                    capabilities,
                    filters: Vec::new(),
                    actions: Vec::new(),
                    filter_summary: String::new(),
                    enabled: true,
                    is_configured: false,
                });
                continue;
            }

            for wf in configured {
                out.push(WorkflowConfig {
                    id: wf.id,
                    event_id: wf.id.to_string(),
                    display_name: wf.display_name(),
                    base_event_type: event.to_string(),
                    workflow_event: event.to_string(),
                    capabilities: capabilities.clone(),
                    filters: wf.filters.clone(),
                    actions: wf.actions.clone(),
                    filter_summary: wf.filter_summary().to_string(),
                    enabled: wf.enabled,
                    is_configured: true,
                });
            }
        }
        Ok(out)
    }

    /// Columns of the project for the editor, ordered by sorting.
    pub fn columns(&self, project_id: i64) -> Result<Vec<ColumnOption>> {
        self.authorize(project_id)?;
        Ok(self
            .db
            .get_columns(project_id)?
            .into_iter()
            .map(|c| ColumnOption {
                id: c.id,
                title: c.title,
            })
            .collect())
    }

    /// Repository labels for the editor.
    pub fn labels(&self, project_id: i64) -> Result<Vec<LabelOption>> {
        self.authorize(project_id)?;
        Ok(self
            .db
            .list_labels()?
            .into_iter()
            .map(|l| LabelOption {
                id: l.id,
                name: l.name,
                color: l.color,
            })
            .collect())
    }

    /// Create or update a workflow.
    ///
    /// A positive numeric `event_id` updates that workflow; anything else is
    /// taken as the event name of a new workflow.
    pub fn save(&self, project_id: i64, form: &WorkflowsPostForm) -> Result<SaveResponse> {
        self.authorize(project_id)?;
        let event_id = form.event_id.trim();
        if event_id.is_empty() {
            return Err(Error::InvalidInput("event_id is required".to_string()));
        }

        let filters = convert_form_to_filters(&form.filters)?;
        let actions = convert_form_to_actions(&form.actions)?;

        let workflow = match event_id.parse::<i64>() {
            Ok(id) if id > 0 => {
                self.project_workflow(project_id, id)?;
                self.db.update_workflow(id, &filters, &actions)?
            }
            _ => {
                let event: WorkflowEvent = event_id.parse()?;
                self.db
                    .create_workflow(project_id, event, &filters, &actions)?
            }
        };

        tracing::info!(
            workflow = workflow.id,
            project = project_id,
            actor = self.actor,
            summary = %filter_summary(&workflow.filters),
            "saved workflow"
        );
        Ok(SaveResponse {
            success: true,
            workflow: WorkflowView::from(&workflow),
        })
    }

    /// Enable or disable a workflow. Anything but `"true"` disables.
    pub fn set_status(
        &self,
        project_id: i64,
        workflow_id: i64,
        enabled: &str,
    ) -> Result<StatusResponse> {
        self.authorize(project_id)?;
        self.project_workflow(project_id, workflow_id)?;

        let enabled = enabled == "true";
        self.db.set_workflow_enabled(workflow_id, enabled)?;
        tracing::info!(workflow = workflow_id, enabled, actor = self.actor, "changed workflow status");
        Ok(StatusResponse {
            success: true,
            enabled,
        })
    }

    /// Delete a workflow. A second delete reports it missing.
    pub fn delete(&self, project_id: i64, workflow_id: i64) -> Result<DeleteResponse> {
        self.authorize(project_id)?;
        self.project_workflow(project_id, workflow_id)?;
        self.db.delete_workflow(workflow_id)?;
        tracing::info!(workflow = workflow_id, actor = self.actor, "deleted workflow");
        Ok(DeleteResponse { success: true })
    }
}

#[cfg(test)]
#[path = "admin_tests.rs"]
mod tests;
