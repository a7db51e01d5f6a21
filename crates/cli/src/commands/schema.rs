// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{board, events, list, show};
use schemars::schema_for;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let schema = match cmd {
        SchemaCommand::Show => schema_for!(show::IssueDetails),
        SchemaCommand::List => schema_for!(list::ListOutputJson),
        SchemaCommand::Board => schema_for!(board::BoardJson),
        SchemaCommand::Events => schema_for!(Vec<events::WorkflowConfigJson>),
    };

    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
