// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fb-core: Shared library for the flowboard project tracker
//!
//! This crate provides the issue and project board model, the SQLite store,
//! and the workflow engine that reacts to board activity. The `fb` CLI is a
//! thin layer over it.

pub mod access;
pub mod admin;
pub mod board;
pub mod db;
pub mod engine;
pub mod error;
pub mod identity;
pub mod issue;
pub mod project;
pub mod workflow;

pub use access::{Access, AccessPolicy};
pub use admin::{failure_body, Admin, WorkflowsPostForm};
pub use board::{Board, Mutation};
pub use db::Database;
pub use engine::{
    ActionOutcome, DispatchReport, Dispatcher, EngineConfig, Notifier, Trigger, WorkflowOutcome,
};
pub use error::{Error, Result};
pub use issue::{Action, Event, Issue, IssueKind, Label, NewIssue, ReviewKind};
pub use project::{Column, NewColumn, Project, ProjectIssue, RehomedCards};
pub use workflow::{
    ActionType, FilterType, IssueState, Workflow, WorkflowAction, WorkflowEvent, WorkflowFilter,
};
