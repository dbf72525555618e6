//! Authenticated user identity.
//!
//! Authentication itself lives outside this crate; what arrives here is an
//! opaque user name. Every store-touching operation takes an `&Identity`,
//! and the only way to obtain one is through [`Identity::new`] or
//! [`Identity::resolve`], so an unauthenticated request is refused before
//! any predicate is built.

use crate::libs::config::Config;
use crate::libs::error::{TaskError, TaskResult};
use std::env;
use std::fmt;

/// Environment variable consulted when no explicit user is given.
pub const USER_ENV: &str = "TASKDECK_USER";

/// Opaque identity of the requesting user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Wraps a non-empty user name. Blank input is `Unauthenticated`.
    pub fn new(name: impl Into<String>) -> TaskResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TaskError::Unauthenticated);
        }
        Ok(Identity(trimmed.to_string()))
    }

    /// Resolves the acting identity from an explicit argument, the
    /// `TASKDECK_USER` environment variable, or the configured default user,
    /// in that order.
    pub fn resolve(explicit: Option<&str>) -> TaskResult<Self> {
        if let Some(name) = explicit {
            return Identity::new(name);
        }
        if let Ok(name) = env::var(USER_ENV) {
            if !name.trim().is_empty() {
                return Identity::new(name);
            }
        }
        if let Some(name) = Config::read().ok().and_then(|config| config.user) {
            return Identity::new(name);
        }
        Err(TaskError::Unauthenticated)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
