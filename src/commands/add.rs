use super::report_task_error;
use crate::db::tasks::Tasks;
use crate::libs::identity::Identity;
use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, NewTask, TaskPriority};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    /// Task description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Task priority
    #[arg(short, long, value_enum, default_value_t = TaskPriority::Medium)]
    priority: TaskPriority,

    /// Due date, YYYY-MM-DD or "YYYY-MM-DD HH:MM"
    #[arg(long)]
    due: Option<String>,

    /// Tag label; repeat to attach several, order is preserved
    #[arg(short, long = "tag")]
    tags: Vec<String>,
}

pub fn cmd(user: Option<&str>, args: AddArgs) -> Result<()> {
    let owner = match Identity::resolve(user) {
        Ok(owner) => owner,
        Err(err) => {
            report_task_error(err);
            return Ok(());
        }
    };

    let due_date = match args.due.as_deref().map(parse_due_date).transpose() {
        Ok(due_date) => due_date,
        Err(err) => {
            report_task_error(err);
            return Ok(());
        }
    };

    let new_task = NewTask {
        title: args.title,
        description: args.description,
        priority: args.priority,
        due_date,
        tags: args.tags,
    };

    let mut tasks = Tasks::new()?;
    match tasks.insert(&owner, &new_task) {
        Ok(task) => msg_success!(Message::TaskCreated(task.id)),
        Err(err) => report_task_error(err),
    }

    Ok(())
}
