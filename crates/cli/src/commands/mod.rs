// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod issue;
pub mod label;
pub mod project;
pub mod review;
pub mod schema;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod workflow;

use fb_core::{Board, Database, DispatchReport, Dispatcher};

use crate::config::{find_work_dir, get_db_path, Config};
use crate::display::format_report;
use crate::error::Result;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    tracing::debug!(path = %db_path.display(), "opening board database");
    let db = Database::open(&db_path)?;
    Ok((db, config))
}

/// Board mutations for the acting user, dispatching workflows with the
/// configured engine switches.
pub(crate) fn board<'a>(db: &'a Database, config: &Config, actor: &str) -> Board<'a> {
    Board::new(db, Dispatcher::new(config.engine.clone()), actor)
}

/// Print what workflows did in response to a mutation.
pub(crate) fn print_reports(reports: &[DispatchReport]) {
    for line in reports.iter().flat_map(format_report) {
        println!("{}", line);
    }
}
