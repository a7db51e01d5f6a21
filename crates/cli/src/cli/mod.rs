// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub use args::{IssueIds, OutputArgs, OutputFormat};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser)]
#[command(name = "fb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A local project board whose workflows move, label and close issues for you")]
#[command(
    long_about = "A local project board whose workflows move, label and close issues for you.\n\n\
    Issues live on project boards with ordered columns. Workflows react to issue and board \
    events and apply actions such as moving the card or closing the issue."
)]
pub struct Cli {
    /// Act as this user instead of the detected one
    #[arg(long = "as", global = true, value_name = "user")]
    pub actor: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Issues
    // ─────────────────────────────────────────────────────────────────────────
    /// Open a new issue or pull request
    #[command(after_help = "\
Examples:
  fb new \"Fix login bug\"                   Open an issue
  fb new \"Add cache\" --pull                Open a pull request
  fb new \"Crash\" --project 1 --label 2,3   Open on board 1 with labels")]
    New {
        /// Title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Body text
        #[arg(long)]
        content: Option<String>,

        /// Open a pull request instead of an issue
        #[arg(long)]
        pull: bool,

        /// Place the issue on this project's board
        #[arg(long, value_name = "ID")]
        project: Option<i64>,

        /// Label id(s) to apply (comma-separated or repeated)
        #[arg(long, short, value_name = "ID", value_delimiter = ',')]
        label: Vec<i64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Close issue(s)
    #[command(arg_required_else_help = true)]
    Close {
        #[command(flatten)]
        issues: IssueIds,
    },

    /// Reopen issue(s)
    #[command(arg_required_else_help = true)]
    Reopen {
        #[command(flatten)]
        issues: IssueIds,
    },

    /// Show an issue with its labels, boards and timeline
    #[command(arg_required_else_help = true)]
    Show {
        /// Issue id
        id: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List issues
    List {
        /// Include closed issues
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Submit a review on a pull request
    #[command(after_help = "\
Examples:
  fb review 4 approve    Approve pull request 4
  fb review 4 reject     Request changes on pull request 4")]
    Review {
        /// Pull request id
        id: i64,

        /// Review verdict (approve, reject, comment)
        verdict: String,
    },

    /// Merge a pull request
    Merge {
        /// Pull request id
        id: i64,
    },

    /// Manage labels
    #[command(subcommand)]
    Label(LabelCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Boards
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage projects, their columns and the issues on them
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Manage project workflows (prints JSON)
    #[command(subcommand)]
    Workflow(WorkflowCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a board in the current directory
    Init {
        /// Owner with admin access (defaults to the acting user)
        #[arg(long)]
        owner: Option<String>,

        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Output JSON Schema for commands with JSON output
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Label commands.
#[derive(Subcommand)]
pub enum LabelCommand {
    /// Create a label
    New {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Hex color, with or without '#'
        #[arg(long, default_value = "ededed")]
        color: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// List labels
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Add a label to an issue
    Add {
        /// Issue id
        id: i64,
        /// Label id
        label: i64,
    },

    /// Remove a label from an issue
    Remove {
        /// Issue id
        id: i64,
        /// Label id
        label: i64,
    },

    /// Delete a label, removing it from every issue
    Delete {
        /// Label id
        id: i64,
    },
}

/// Project board commands.
#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Create a project
    New {
        #[arg(value_parser = non_empty_string)]
        title: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// List projects
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delete a project with its columns, placements and workflows
    Delete {
        /// Project id
        id: i64,
    },

    /// Manage columns
    #[command(subcommand)]
    Column(ColumnCommand),

    /// Show a project's columns and the issues in them
    Columns {
        /// Project id
        project: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Add issue(s) to a project board
    #[command(after_help = "\
Examples:
  fb project add 1 7 8            Add issues 7 and 8 to the default column
  fb project add 1 7 --column 3   Add issue 7 to column 3")]
    Add {
        /// Project id
        project: i64,

        #[command(flatten)]
        issues: IssueIds,

        /// Column to place the issues in
        #[arg(long, value_name = "ID")]
        column: Option<i64>,
    },

    /// Remove issue(s) from a project board, or from every board
    Remove {
        #[command(flatten)]
        issues: IssueIds,

        /// Only remove from this project
        #[arg(long, value_name = "ID")]
        project: Option<i64>,
    },

    /// Move issue(s) to another column
    Move {
        /// Project id
        project: i64,

        /// Destination column id
        column: i64,

        #[command(flatten)]
        issues: IssueIds,
    },
}

/// Column commands.
#[derive(Subcommand)]
pub enum ColumnCommand {
    /// Add a column at the end of a project board
    Add {
        /// Project id
        project: i64,

        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Make this the column new issues land in
        #[arg(long)]
        default: bool,

        /// Hex color
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a column; its issues move to the landing column
    Delete {
        /// Column id
        id: i64,
    },
}

/// Workflow admin commands. Each prints a JSON body.
#[derive(Subcommand)]
pub enum WorkflowCommand {
    /// List a project's workflows
    List { project: i64 },

    /// List every event with its workflows or a placeholder
    Events { project: i64 },

    /// List the columns a workflow may target
    Columns { project: i64 },

    /// List the labels a workflow may use
    Labels { project: i64 },

    /// Create or update a workflow
    #[command(after_help = "\
Examples:
  fb workflow save 1 --json '{\"event_id\":\"item_closed\",\"actions\":{\"column\":\"3\"}}'
  fb workflow save 1 --json '{\"event_id\":\"5\",\"filters\":{\"issue_type\":\"issue\"}}'
  fb workflow save 1 --json -    Read the body from stdin")]
    Save {
        project: i64,

        /// Request body, or '-' to read it from stdin
        #[arg(long = "json", value_name = "BODY")]
        body: String,
    },

    /// Enable or disable a workflow
    Status {
        project: i64,

        /// Workflow id
        id: i64,

        /// "true" enables; anything else disables
        #[arg(long)]
        enabled: String,
    },

    /// Delete a workflow
    Delete {
        project: i64,

        /// Workflow id
        id: i64,
    },
}

/// Schema output commands.
#[derive(Subcommand)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'fb show' JSON output
    Show,
    /// Output JSON Schema for 'fb list' JSON output
    List,
    /// Output JSON Schema for 'fb project columns' JSON output
    Board,
    /// Output JSON Schema for 'fb workflow events' output
    Events,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
