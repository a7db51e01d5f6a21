// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rusqlite::params;

use crate::error::Result;
use crate::issue::Event;

use super::{parse_db, parse_timestamp, Database};

impl Database {
    /// Append a timeline entry.
    pub fn log_event(&self, event: &Event) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO events (issue_id, action, actor, old_value, new_value, workflow_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                event.issue_id,
                event.action.as_str(),
                event.actor,
                event.old_value,
                event.new_value,
                event.workflow_id,
                event.created_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get the timeline for an issue in insertion order.
    pub fn get_events(&self, issue_id: i64) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, issue_id, action, actor, old_value, new_value, workflow_id, created_at
             FROM events WHERE issue_id = ?1 ORDER BY id",
        )?;

        let events = stmt
            .query_map(params![issue_id], |row| {
                let action_str: String = row.get(2)?;
                let created_str: String = row.get(7)?;
                Ok(Event {
                    id: row.get(0)?,
                    issue_id: row.get(1)?,
                    action: parse_db(&action_str, "action")?,
                    actor: row.get(3)?,
                    old_value: row.get(4)?,
                    new_value: row.get(5)?,
                    workflow_id: row.get(6)?,
                    created_at: parse_timestamp(&created_str, "created_at")?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(events)
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
