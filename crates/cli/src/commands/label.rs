// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use fb_core::Database;

use crate::cli::OutputArgs;
use crate::config::Config;
use crate::display::format_label;
use crate::error::Result;
use crate::schema::LabelJson;

use super::{board, open_db};

pub fn create(name: &str, color: &str, description: Option<&str>) -> Result<()> {
    let (db, _) = open_db()?;
    create_impl(&db, name, color, description)?;
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn create_impl(
    db: &Database,
    name: &str,
    color: &str,
    description: Option<&str>,
) -> Result<i64> {
    let label = db.create_label(name, color, description)?;
    println!("Created label {}: {}", label.id, label.name);
    Ok(label.id)
}

pub fn list(output: OutputArgs) -> Result<()> {
    let (db, _) = open_db()?;
    println!("{}", list_impl(&db, output)?);
    Ok(())
}

pub(crate) fn list_impl(db: &Database, output: OutputArgs) -> Result<String> {
    let labels = db.list_labels()?;
    if output.is_json() {
        let json: Vec<LabelJson> = labels.iter().map(LabelJson::from).collect();
        return Ok(serde_json::to_string_pretty(&json)?);
    }
    Ok(labels
        .iter()
        .map(format_label)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn add(id: i64, label: i64, actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    add_impl(&db, &config, actor, id, label)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn add_impl(
    db: &Database,
    config: &Config,
    actor: &str,
    id: i64,
    label: i64,
) -> Result<()> {
    let mutation = board(db, config, actor).add_label(id, label)?;
    if mutation.value {
        println!("Labeled #{} with {}", id, label);
    } else {
        println!("#{} already has label {}", id, label);
    }
    Ok(())
}

pub fn remove(id: i64, label: i64, actor: &str) -> Result<()> {
    let (db, config) = open_db()?;
    remove_impl(&db, &config, actor, id, label)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn remove_impl(
    db: &Database,
    config: &Config,
    actor: &str,
    id: i64,
    label: i64,
) -> Result<()> {
    let mutation = board(db, config, actor).remove_label(id, label)?;
    if mutation.value {
        println!("Removed label {} from #{}", label, id);
    } else {
        println!("Label {} not found on #{}", label, id);
    }
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let (db, _) = open_db()?;
    delete_impl(&db, id)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn delete_impl(db: &Database, id: i64) -> Result<()> {
    db.delete_label(id)?;
    println!("Deleted label {}", id);
    Ok(())
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
