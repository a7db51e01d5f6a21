// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn policy() -> AccessPolicy {
    AccessPolicy::new("owner")
        .with_collaborator("reader", Access::Read)
        .with_collaborator("writer", Access::Write)
}

#[parameterized(
    none = { "none", Access::None },
    read = { "READ", Access::Read },
    write = { "write", Access::Write },
    owner_alias = { "owner", Access::Admin },
)]
fn access_from_str(input: &str, expected: Access) {
    assert_eq!(input.parse::<Access>().unwrap(), expected);
}

#[test]
fn access_from_str_invalid() {
    assert!("root".parse::<Access>().is_err());
}

#[parameterized(
    owner = { "owner", Access::Admin },
    writer = { "writer", Access::Write },
    reader = { "reader", Access::Read },
    stranger = { "mallory", Access::None },
)]
fn access_for_user(user: &str, expected: Access) {
    assert_eq!(policy().access_for(user), expected);
}

#[parameterized(
    owner = { "owner" },
    writer = { "writer" },
)]
fn writers_may_manage_workflows(user: &str) {
    assert!(policy().require_write(user, 1).is_ok());
}

#[test]
fn reader_is_forbidden() {
    let err = policy().require_write("reader", 1).unwrap_err();
    assert_eq!(err.status_code(), 403);
}

#[test]
fn stranger_sees_not_found() {
    let err = policy().require_write("mallory", 1).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn ordering_follows_privilege() {
    assert!(Access::Admin > Access::Write);
    assert!(Access::Write.can_write());
    assert!(!Access::Read.can_write());
}
