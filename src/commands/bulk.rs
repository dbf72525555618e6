use super::report_task_error;
use crate::db::tasks::Tasks;
use crate::libs::identity::Identity;
use crate::libs::messages::Message;
use crate::libs::task::{TaskPatch, TaskPriority, TaskStatus};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct BulkArgs {
    /// Task ids to update
    #[arg(required = true)]
    ids: Vec<i64>,

    /// Update document as JSON, e.g. '{"status": "completed", "dueDate": "2026-09-01T00:00:00"}'
    #[arg(long)]
    updates: Option<String>,

    /// Set the status on all given tasks
    #[arg(long, value_enum)]
    status: Option<TaskStatus>,

    /// Set the priority on all given tasks
    #[arg(long, value_enum)]
    priority: Option<TaskPriority>,
}

pub fn cmd(user: Option<&str>, args: BulkArgs) -> Result<()> {
    let owner = match Identity::resolve(user) {
        Ok(owner) => owner,
        Err(err) => {
            report_task_error(err);
            return Ok(());
        }
    };

    let mut patch = match args.updates.as_deref() {
        Some(document) => match serde_json::from_str::<TaskPatch>(document) {
            Ok(patch) => patch,
            Err(err) => {
                msg_error!(Message::InvalidInput(format!("invalid updates document: {}", err)));
                return Ok(());
            }
        },
        None => TaskPatch::default(),
    };
    if let Some(status) = args.status {
        patch.status = Some(status.as_str().to_string());
    }
    if let Some(priority) = args.priority {
        patch.priority = Some(priority.as_str().to_string());
    }

    let mut tasks = Tasks::new()?;
    match tasks.update_many(&owner, &args.ids, &patch) {
        Ok(modified) => msg_success!(Message::TasksBulkUpdated(modified)),
        Err(err) => report_task_error(err),
    }

    Ok(())
}
