// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Actor resolution for timeline entries and access checks.

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;

use std::process::Command;

/// Returns the name recorded as the actor of board mutations.
///
/// Resolution order:
/// 1. An explicit name (the `--as` flag or `FLOWBOARD_USER`)
/// 2. Git config user.name
/// 3. Unix username from USER or LOGNAME, unless it is a system account
/// 4. "human"
pub fn resolve_actor(explicit: Option<&str>) -> String {
    if let Some(name) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
        return name.to_string();
    }

    if let Some(name) = git_user_name() {
        return name;
    }

    if let Some(name) = unix_username() {
        if !is_system_account(&name) {
            return name;
        }
    }

    "human".to_string()
}

fn git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }
    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!name.is_empty()).then_some(name)
}

fn unix_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .ok()
        .filter(|s| !s.is_empty())
}

fn is_system_account(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "root" | "system" | "administrator" | "admin" | "daemon" | "nobody"
    )
}
