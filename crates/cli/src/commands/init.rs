// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use fb_core::Database;

use crate::config::{get_db_path, init_work_dir, write_gitignore, Config};
use crate::error::Result;

pub fn run(owner: Option<String>, path: Option<String>, actor: &str) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let owner = owner.unwrap_or_else(|| actor.to_string());
    let work_dir = run_impl(&target_path, &owner)?;

    println!("Initialized board at {}", work_dir.display());
    println!("Owner: {}", owner);
    Ok(())
}

/// Create `.flowboard/` with its config, gitignore and an empty database.
pub(crate) fn run_impl(target_path: &Path, owner: &str) -> Result<PathBuf> {
    let config = Config::new(owner);
    let work_dir = init_work_dir(target_path, &config)?;
    write_gitignore(&work_dir)?;

    Database::open(&get_db_path(&work_dir, &config))?;
    tracing::info!(path = %work_dir.display(), owner, "initialized board");
    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
