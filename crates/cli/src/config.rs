// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board configuration management.
//!
//! Configuration is stored in `.flowboard/config.toml` and includes:
//! - `owner`: the user with admin access to every project
//! - `[collaborators]`: other users and their access level
//! - `[engine]`: workflow engine switches
//! - `database`: optional path to store the database elsewhere

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fb_core::{Access, AccessPolicy, EngineConfig};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".flowboard";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "board.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Board configuration stored in `.flowboard/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// User with admin access. Without an owner only collaborators have access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Optional database path (relative to the board root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub collaborators: BTreeMap<String, Access>,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Config {
    pub fn new(owner: impl Into<String>) -> Self {
        Config {
            owner: Some(owner.into()),
            ..Config::default()
        }
    }

    /// Loads configuration from the given `.flowboard/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.flowboard/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Access policy for the workflow admin commands.
    pub fn policy(&self) -> AccessPolicy {
        AccessPolicy {
            owner: self.owner.clone(),
            collaborators: self.collaborators.clone(),
        }
    }
}

/// Find the .flowboard directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(database) => {
            let database_path = Path::new(database);
            if database_path.is_absolute() {
                database_path.to_path_buf()
            } else {
                // Relative to work_dir's parent (the board root)
                work_dir.parent().unwrap_or(work_dir).join(database)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new .flowboard directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore file to the work directory that ignores the database.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    fs::write(
        &gitignore_path,
        format!("# Board database\n{DB_FILE_NAME}\n{DB_FILE_NAME}-wal\n{DB_FILE_NAME}-shm\n"),
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
