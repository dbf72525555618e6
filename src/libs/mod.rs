//! Core library modules for the taskdeck application.
//!
//! Serves as the main entry point for all taskdeck library components,
//! providing centralized access to the application's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Query Building**: Ownership-scoped filters, search matching, sort and
//!   page planning
//! - **Task Management**: Entity types, request validation, partial updates
//! - **User Interface**: Console rendering and formatting
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
//! tasks.insert(&owner, &NewTask::new("Review code"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod filter;
pub mod identity;
pub mod messages;
pub mod pagination;
pub mod task;
pub mod view;
