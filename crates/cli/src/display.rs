// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use fb_core::{ActionOutcome, Column, DispatchReport, Event, Issue, Label, Project};

/// Issue state as shown to users: open, closed or merged.
pub fn issue_state(issue: &Issue) -> &'static str {
    if issue.has_merged {
        "merged"
    } else if issue.is_closed {
        "closed"
    } else {
        "open"
    }
}

/// Format a single issue line for list output
pub fn format_issue_line(issue: &Issue, labels: &[Label]) -> String {
    let mut line = format!(
        "- #{} [{}] ({}) {}",
        issue.id,
        issue.kind,
        issue_state(issue),
        issue.title
    );
    if !labels.is_empty() {
        let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
        line.push_str(&format!(" [{}]", names.join(", ")));
    }
    line
}

/// Format a label for list output
pub fn format_label(label: &Label) -> String {
    match &label.description {
        Some(desc) => format!("- {}: {} #{} ({})", label.id, label.name, label.color, desc),
        None => format!("- {}: {} #{}", label.id, label.name, label.color),
    }
}

pub fn format_project_line(project: &Project) -> String {
    format!("- {}: {}", project.id, project.title)
}

/// Column header line: `To Do (3) [default]`.
pub fn format_column_header(column: &Column) -> String {
    if column.is_default {
        format!("{} ({}) [default]", column.title, column.id)
    } else {
        format!("{} ({})", column.title, column.id)
    }
}

/// Format a timeline entry.
///
/// Output format:
/// ```text
///   2024-01-10 10:30  alice  column_moved: To Do -> Done  (workflow 3)
/// ```
pub fn format_event(event: &Event) -> String {
    let mut line = format!(
        "  {}  {}  {}",
        event.created_at.format("%Y-%m-%d %H:%M"),
        event.actor,
        event.action
    );
    match (&event.old_value, &event.new_value) {
        (Some(old), Some(new)) => line.push_str(&format!(": {} -> {}", old, new)),
        (None, Some(new)) => line.push_str(&format!(": {}", new)),
        (Some(old), None) => line.push_str(&format!(": {}", old)),
        (None, None) => {}
    }
    if let Some(workflow_id) = event.workflow_id {
        line.push_str(&format!("  (workflow {})", workflow_id));
    }
    line
}

/// Format issue details for show command
pub fn format_issue_details(
    issue: &Issue,
    labels: &[Label],
    boards: &[(Project, Option<Column>)],
    events: &[Event],
) -> String {
    let mut output = Vec::new();

    output.push(format!("[{}] #{}", issue.kind, issue.id));
    output.push(format!("Title: {}", issue.title));
    output.push(format!("State: {}", issue_state(issue)));
    output.push(format!(
        "Created: {}",
        issue.created_at.format("%Y-%m-%d %H:%M")
    ));
    output.push(format!(
        "Updated: {}",
        issue.updated_at.format("%Y-%m-%d %H:%M")
    ));

    if !labels.is_empty() {
        let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
        output.push(format!("Labels: {}", names.join(", ")));
    }

    if let Some(content) = &issue.content {
        output.push(String::new());
        output.push("Description:".to_string());
        for line in content.lines() {
            output.push(format!("    {}", line));
        }
    }

    if !boards.is_empty() {
        output.push(String::new());
        output.push("Boards:".to_string());
        for (project, column) in boards {
            match column {
                Some(column) => output.push(format!("  - {}: {}", project.title, column.title)),
                None => output.push(format!("  - {}: (no column)", project.title)),
            }
        }
    }

    if !events.is_empty() {
        output.push(String::new());
        output.push("Log:".to_string());
        output.extend(events.iter().map(format_event));
    }

    output.join("\n")
}

/// Summarize what workflows did in response to a mutation.
///
/// One line per workflow that ran, followed by one indented line per
/// skipped action. Workflows whose filters excluded the issue are omitted.
pub fn format_report(report: &DispatchReport) -> Vec<String> {
    let mut lines = Vec::new();
    for outcome in report.fired() {
        let applied = outcome.applied().count();
        let skipped = outcome.skipped().count();
        let mut line = format!(
            "workflow {} ({}): {} applied",
            outcome.workflow_id, report.event, applied
        );
        if skipped > 0 {
            line.push_str(&format!(", {} skipped", skipped));
        }
        lines.push(line);

        for result in outcome.skipped() {
            if let ActionOutcome::Skipped(reason) = &result.outcome {
                lines.push(format!("  skipped {}: {}", result.action, reason));
            }
        }
    }
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
