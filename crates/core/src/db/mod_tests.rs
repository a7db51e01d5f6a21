// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn open_in_memory_sets_schema_version() {
    let db = Database::open_in_memory().unwrap();
    let version: i64 = db
        .conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, SCHEMA_VERSION);
}

#[test]
fn migrations_are_idempotent() {
    let db = Database::open_in_memory().unwrap();
    run_migrations(&db.conn).unwrap();
    run_migrations(&db.conn).unwrap();
}

#[test]
fn newer_schema_is_refused() {
    let db = Database::open_in_memory().unwrap();
    db.conn
        .execute_batch(&format!("PRAGMA user_version = {};", SCHEMA_VERSION + 1))
        .unwrap();
    let err = run_migrations(&db.conn).unwrap_err();
    assert!(matches!(err, Error::CorruptedData(_)));
}

#[test]
fn open_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("board.db");
    let db = Database::open(&path).unwrap();
    assert!(path.exists());
    drop(db);

    // Reopening an existing file keeps working
    Database::open(&path).unwrap();
}

#[test]
fn parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("yesterday", "created_at").is_err());
    assert!(parse_timestamp("2026-01-02T03:04:05+00:00", "created_at").is_ok());
}

#[test]
fn parse_db_reports_column() {
    let err = parse_db::<i64>("abc", "sorting").unwrap_err();
    assert!(matches!(
        err,
        rusqlite::Error::FromSqlConversionFailure(..)
    ));
}
