// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter evaluation for workflow conditions.

use crate::issue::IssueKind;
use crate::workflow::WorkflowFilter;

/// The issue a trigger concerns, as seen by filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub kind: IssueKind,
    pub label_ids: Vec<i64>,
    /// Destination column, only for column changes.
    pub target_column: Option<i64>,
}

/// Returns true if the subject passes every filter.
///
/// Filters of different types are AND'ed. Several `labels` entries match
/// when the issue carries any one of them. An empty list matches everything.
pub fn matches(filters: &[WorkflowFilter], subject: &Subject) -> bool {
    let mut wants_label = false;
    let mut has_label = false;

    for filter in filters {
        match *filter {
            WorkflowFilter::IssueType(kind) => {
                if kind != subject.kind {
                    return false;
                }
            }
            WorkflowFilter::TargetColumn(column) => {
                if subject.target_column != Some(column) {
                    return false;
                }
            }
            WorkflowFilter::Labels(label) => {
                wants_label = true;
                has_label |= subject.label_ids.contains(&label);
            }
        }
    }

    !wants_label || has_label
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
