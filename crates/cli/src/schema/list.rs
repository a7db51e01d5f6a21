// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `fb list` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use super::IssueJson;

/// Issues ordered by number.
#[derive(JsonSchema, Serialize)]
pub struct ListOutputJson {
    pub issues: Vec<IssueJson>,
}
