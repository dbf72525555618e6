//! # Taskdeck - Personal Task Tracking Service
//!
//! A command-line service for managing owned task records: creation,
//! browsing, filtering, sorting, pagination, bulk updates, and status
//! statistics.
//!
//! ## Features
//!
//! - **Ownership Scoping**: Every read, write, and statistic is constrained
//!   to the acting user; other users' tasks are indistinguishable from
//!   missing ones
//! - **Filtered Queries**: Status, priority, and literal text search across
//!   title, description, and tags
//! - **Sort & Pagination**: Whitelisted sort keys with page metadata on
//!   every listing
//! - **Bulk Updates**: One partial update document applied to many owned
//!   tasks at once
//! - **Status Statistics**: Grouped status counts plus a seven-day upcoming
//!   due-date window
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
