// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors raised by the `fb` CLI.
///
/// Board and workflow errors come from `fb_core` unchanged and keep their
/// hints.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'fb init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error(transparent)]
    Core(#[from] fb_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP-style status code, matching what the admin surface reports.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Core(e) => e.status_code(),
            Error::FieldRequired { .. } | Error::Json(_) => 400,
            Error::NotInitialized
            | Error::AlreadyInitialized(_)
            | Error::Config(_)
            | Error::Io(_) => 500,
        }
    }
}

/// A specialized Result type for fbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
