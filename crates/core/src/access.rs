// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository access levels for the workflow admin surface.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Access a user has to the repository, in increasing order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    #[default]
    None,
    Read,
    Write,
    Admin,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::None => "none",
            Access::Read => "read",
            Access::Write => "write",
            Access::Admin => "admin",
        }
    }

    pub fn can_write(&self) -> bool {
        *self >= Access::Write
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Access {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Access::None),
            "read" => Ok(Access::Read),
            "write" => Ok(Access::Write),
            "admin" | "owner" => Ok(Access::Admin),
            _ => Err(Error::InvalidAccess(s.to_string())),
        }
    }
}

/// Who may do what. The owner always has admin access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    pub owner: Option<String>,
    pub collaborators: BTreeMap<String, Access>,
}

impl AccessPolicy {
    pub fn new(owner: impl Into<String>) -> Self {
        AccessPolicy {
            owner: Some(owner.into()),
            collaborators: BTreeMap::new(),
        }
    }

    /// Adds a collaborator (builder pattern).
    pub fn with_collaborator(mut self, name: impl Into<String>, access: Access) -> Self {
        self.collaborators.insert(name.into(), access);
        self
    }

    pub fn access_for(&self, user: &str) -> Access {
        if self.owner.as_deref() == Some(user) {
            return Access::Admin;
        }
        self.collaborators.get(user).copied().unwrap_or_default()
    }

    /// Require write access to a project's workflows.
    ///
    /// Users without any access are told the project does not exist; readers
    /// get a permission error.
    pub fn require_write(&self, user: &str, project_id: i64) -> Result<()> {
        match self.access_for(user) {
            Access::None => Err(Error::ProjectNotFound(project_id)),
            Access::Read => Err(Error::Forbidden {
                user: user.to_string(),
                operation: "manage project workflows".to_string(),
            }),
            Access::Write | Access::Admin => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
