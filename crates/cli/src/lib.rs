// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fbrs - the command-line front end of flowboard.
//!
//! Issues and pull requests live on local project boards with ordered
//! columns. Workflows configured per project react to board activity and
//! move, label, close or reopen the issue. The board, store and engine live
//! in `fb_core`; this crate adds configuration, the `fb` command surface and
//! text/JSON rendering.
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.flowboard/` directory, then open
//! the database:
//!
//! ```rust,ignore
//! use fbrs::{find_work_dir, get_db_path, init_work_dir, Config};
//! use fb_core::Database;
//!
//! let work_dir = init_work_dir(Path::new("."), &Config::new("alice"))?;
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
mod commands;
mod display;
mod schema;

pub mod config;
pub mod env;
pub mod error;

pub use cli::{
    Cli, ColumnCommand, Command, LabelCommand, OutputArgs, OutputFormat, ProjectCommand,
    SchemaCommand, WorkflowCommand,
};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::issue::NewArgs;

/// Acting user: `--as`, then `FLOWBOARD_USER`, then the detected identity.
pub fn resolve_actor(explicit: Option<String>) -> String {
    fb_core::identity::resolve_actor(explicit.or_else(env::user).as_deref())
}

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let actor = resolve_actor(cli.actor);
    tracing::debug!(actor = %actor, "resolved acting user");
    let actor = actor.as_str();

    match cli.command {
        Command::New {
            title,
            content,
            pull,
            project,
            label,
            output,
        } => commands::issue::new(
            NewArgs {
                title,
                content,
                pull,
                project,
                labels: label,
            },
            output,
            actor,
        ),
        Command::Close { issues } => commands::issue::close(&issues.ids, actor),
        Command::Reopen { issues } => commands::issue::reopen(&issues.ids, actor),
        Command::Show { id, output } => commands::issue::show(id, output),
        Command::List { all, output } => commands::issue::list(all, output),
        Command::Review { id, verdict } => commands::review::run(id, &verdict, actor),
        Command::Merge { id } => commands::issue::merge(id, actor),
        Command::Label(cmd) => match cmd {
            LabelCommand::New {
                name,
                color,
                description,
            } => commands::label::create(&name, &color, description.as_deref()),
            LabelCommand::List { output } => commands::label::list(output),
            LabelCommand::Add { id, label } => commands::label::add(id, label, actor),
            LabelCommand::Remove { id, label } => commands::label::remove(id, label, actor),
            LabelCommand::Delete { id } => commands::label::delete(id),
        },
        Command::Project(cmd) => match cmd {
            ProjectCommand::New { title, description } => {
                commands::project::create(&title, description.as_deref())
            }
            ProjectCommand::List { output } => commands::project::list(output),
            ProjectCommand::Delete { id } => commands::project::delete(id),
            ProjectCommand::Column(ColumnCommand::Add {
                project,
                title,
                default,
                color,
            }) => commands::project::add_column(project, &title, default, color.as_deref()),
            ProjectCommand::Column(ColumnCommand::Delete { id }) => {
                commands::project::delete_column(id, actor)
            }
            ProjectCommand::Columns { project, output } => {
                commands::project::columns(project, output)
            }
            ProjectCommand::Add {
                project,
                issues,
                column,
            } => commands::project::add(project, &issues.ids, column, actor),
            ProjectCommand::Remove { issues, project } => {
                commands::project::remove(&issues.ids, project, actor)
            }
            ProjectCommand::Move {
                project,
                column,
                issues,
            } => commands::project::move_issues(project, column, &issues.ids, actor),
        },
        Command::Workflow(cmd) => commands::workflow::run(&cmd, actor),
        Command::Init { owner, path } => commands::init::run(owner, path, actor),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "fb", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
