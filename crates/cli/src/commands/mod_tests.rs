// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without filesystem setup.
//!
//! `TestContext` wraps an in-memory database and a config owned by
//! `alice`, so commands can be tested without a `.flowboard/` directory.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! #[test]
//! fn test_some_command() {
//!     let ctx = TestContext::new();
//!     let issue = ctx.create_issue("My issue");
//!
//!     // Test command logic using ctx.db and ctx.config
//! }
//! ```

use crate::config::Config;
use fb_core::{Database, IssueKind, NewColumn, NewIssue};

pub const ACTOR: &str = "alice";

/// Test context providing an in-memory database and default config.
pub struct TestContext {
    pub db: Database,
    pub config: Config,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A project with `To Do`, `In Progress` and `Done` columns.
pub struct TestBoard {
    pub project: i64,
    pub todo: i64,
    pub doing: i64,
    pub done: i64,
}

impl TestContext {
    pub fn new() -> Self {
        let db = Database::open_in_memory().expect("Failed to create in-memory database");
        TestContext {
            db,
            config: Config::new(ACTOR),
        }
    }

    pub fn create_issue(&self, title: &str) -> i64 {
        self.create_kind(IssueKind::Issue, title)
    }

    pub fn create_pull(&self, title: &str) -> i64 {
        self.create_kind(IssueKind::PullRequest, title)
    }

    fn create_kind(&self, kind: IssueKind, title: &str) -> i64 {
        crate::commands::board(&self.db, &self.config, ACTOR)
            .open_issue(&NewIssue::new(kind, title))
            .expect("Failed to open issue")
            .value
            .id
    }

    pub fn create_label(&self, name: &str) -> i64 {
        self.db
            .create_label(name, "ededed", None)
            .expect("Failed to create label")
            .id
    }

    pub fn create_board(&self, title: &str) -> TestBoard {
        let project = self
            .db
            .create_project(title, None)
            .expect("Failed to create project")
            .id;
        let column = |name: &str| {
            self.db
                .add_column(project, &NewColumn::new(name))
                .expect("Failed to add column")
                .id
        };
        TestBoard {
            project,
            todo: column("To Do"),
            doing: column("In Progress"),
            done: column("Done"),
        }
    }
}
