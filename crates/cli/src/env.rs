// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the acting user from `FLOWBOARD_USER`, if set and non-empty.
pub fn user() -> Option<String> {
    std::env::var(vars::FLOWBOARD_USER)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns the log filter directive from `FLOWBOARD_LOG`, if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::FLOWBOARD_LOG).ok()
}

/// Serializes tests that mutate process environment variables.
#[cfg(test)]
pub(crate) static TEST_ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
