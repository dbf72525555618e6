//! Database layer for the taskdeck application.
//!
//! Provides the data persistence layer built on SQLite: connection
//! management, versioned schema migrations, and the owned-task store with
//! its query, bulk-update, and aggregation operations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::db::tasks::Tasks;
//! use taskdeck::libs::identity::Identity;
//! use taskdeck::libs::task::NewTask;
//!
//! let owner = Identity::new("alice")?;
//! let mut tasks = Tasks::new()?;
//! let task = tasks.insert(&owner, &NewTask::new("Review code"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Owned task storage: CRUD, filtered queries, bulk updates, statistics.
pub mod tasks;
