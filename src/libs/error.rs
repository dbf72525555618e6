//! Error taxonomy for task operations.
//!
//! Every core operation returns `TaskError`. Validation failures are raised
//! before the store is touched; store failures keep their cause available
//! through `source()` for logging, while `Display` stays opaque so callers
//! never see driver internals.

use thiserror::Error;

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Error)]
pub enum TaskError {
    /// No authenticated user identity was available.
    #[error("authentication required")]
    Unauthenticated,

    /// No task matches the given id for the requesting owner. Also returned
    /// when the task exists but belongs to someone else.
    #[error("task not found")]
    NotFound,

    /// A request failed validation before any store access.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Any failure reported by the persistence layer.
    #[error("storage failure")]
    Store(#[from] rusqlite::Error),
}
