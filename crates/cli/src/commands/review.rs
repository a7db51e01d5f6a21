// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use fb_core::{Database, ReviewKind};

use crate::config::Config;
use crate::error::Result;

use super::{board, open_db, print_reports};

pub fn run(id: i64, verdict: &str, actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    run_impl(&db, &config, actor, id, verdict)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    actor: &str,
    id: i64,
    verdict: &str,
) -> Result<()> {
    let review: ReviewKind = verdict.parse()?;
    let mutation = board(db, config, actor).submit_review(id, review)?;
    println!("Reviewed #{}: {}", id, review.as_str());
    print_reports(&mutation.reports);
    Ok(())
}

#[cfg(test)]
#[path = "review_tests.rs"]
mod tests;
