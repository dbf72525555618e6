//! Command-line interface for the taskdeck application.
//!
//! Each subcommand is a thin handler: resolve the acting identity, call one
//! core operation, and render the result. No query or mutation semantics
//! live here.

pub mod add;
pub mod bulk;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;
pub mod stats;

use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks with filtering, sorting and pagination")]
    List(list::ListArgs),
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Apply one update to several tasks")]
    Bulk(bulk::BulkArgs),
    #[command(about = "Show task statistics")]
    Stats,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Acting user identity; falls back to TASKDECK_USER, then the
    /// configured default user
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let user = cli.user.as_deref();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(user, args),
            Commands::List(args) => list::cmd(user, args),
            Commands::Show(args) => show::cmd(user, args),
            Commands::Edit(args) => edit::cmd(user, args),
            Commands::Delete(args) => delete::cmd(user, args),
            Commands::Bulk(args) => bulk::cmd(user, args),
            Commands::Stats => stats::cmd(user),
        }
    }
}

/// Renders a core error for the terminal. Store failures stay opaque to the
/// user; the cause goes to the debug log only.
pub(crate) fn report_task_error(err: TaskError) {
    match err {
        TaskError::Unauthenticated => msg_error!(Message::AuthRequired),
        TaskError::NotFound => msg_error!(Message::TaskNotFound),
        TaskError::InvalidArgument(reason) => msg_error!(Message::InvalidInput(reason)),
        TaskError::Store(cause) => {
            msg_debug!(format!("store error: {}", cause));
            msg_error!(Message::StorageFailure);
        }
    }
}
