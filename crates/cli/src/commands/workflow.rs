// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `fb workflow`: the JSON admin surface for project workflows.
//!
//! Every subcommand prints a JSON body. Failures print
//! `{"success": false, "status": <code>, "error": <message>}` and exit 1.

use std::io::Read;

use fb_core::{failure_body, Admin, Database, WorkflowsPostForm};
use serde_json::{json, Value};

use crate::cli::WorkflowCommand;
use crate::config::Config;
use crate::error::{Error, Result};

use super::open_db;

pub fn run(command: &WorkflowCommand, actor: &str) -> Result<()> {
    let result = open_db().and_then(|(db, config)| run_impl(&db, &config, actor, command));
    match result {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", serde_json::to_string_pretty(&failure(&e))?);
            Err(e)
        }
    }
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    actor: &str,
    command: &WorkflowCommand,
) -> Result<Value> {
    let policy = config.policy();
    let admin = Admin::new(db, &policy, actor);
    let body = match command {
        WorkflowCommand::List { project } => serde_json::to_value(admin.list(*project)?)?,
        WorkflowCommand::Events { project } => serde_json::to_value(admin.events(*project)?)?,
        WorkflowCommand::Columns { project } => serde_json::to_value(admin.columns(*project)?)?,
        WorkflowCommand::Labels { project } => serde_json::to_value(admin.labels(*project)?)?,
        WorkflowCommand::Save { project, body } => {
            let form = parse_form(body)?;
            serde_json::to_value(admin.save(*project, &form)?)?
        }
        WorkflowCommand::Status {
            project,
            id,
            enabled,
        } => serde_json::to_value(admin.set_status(*project, *id, enabled)?)?,
        WorkflowCommand::Delete { project, id } => {
            serde_json::to_value(admin.delete(*project, *id)?)?
        }
    };
    Ok(body)
}

/// Parse a save request body; `-` reads it from stdin.
fn parse_form(body: &str) -> Result<WorkflowsPostForm> {
    let text = if body == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        body.to_string()
    };
    Ok(serde_json::from_str(&text)?)
}

/// Failure body for any command error.
pub(crate) fn failure(err: &Error) -> Value {
    match err {
        Error::Core(e) => failure_body(e),
        other => json!({
            "success": false,
            "status": other.status_code(),
            "error": other.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
