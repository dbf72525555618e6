use super::report_task_error;
use crate::db::tasks::Tasks;
use crate::libs::identity::Identity;
use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, Task, TaskPatch, TaskPriority, TaskStatus};
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

const STATUS_CHOICES: [&str; 3] = ["pending", "in-progress", "completed"];
const PRIORITY_CHOICES: [&str; 3] = ["low", "medium", "high"];

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id
    id: i64,

    /// New title
    #[arg(long)]
    title: Option<String>,

    /// New description
    #[arg(long)]
    description: Option<String>,

    /// New status
    #[arg(long, value_enum)]
    status: Option<TaskStatus>,

    /// New priority
    #[arg(long, value_enum)]
    priority: Option<TaskPriority>,

    /// New due date, YYYY-MM-DD or "YYYY-MM-DD HH:MM"
    #[arg(long)]
    due: Option<String>,

    /// Replace the tag list; repeat for several tags
    #[arg(long = "tag")]
    tags: Option<Vec<String>>,
}

impl EditArgs {
    fn has_field_flags(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.priority.is_some()
            || self.due.is_some()
            || self.tags.is_some()
    }
}

pub fn cmd(user: Option<&str>, args: EditArgs) -> Result<()> {
    let owner = match Identity::resolve(user) {
        Ok(owner) => owner,
        Err(err) => {
            report_task_error(err);
            return Ok(());
        }
    };

    let mut tasks = Tasks::new()?;

    let patch = if args.has_field_flags() {
        let due_date = match args.due.as_deref().map(parse_due_date).transpose() {
            Ok(due_date) => due_date,
            Err(err) => {
                report_task_error(err);
                return Ok(());
            }
        };
        TaskPatch {
            title: args.title,
            description: args.description,
            status: args.status.map(|status| status.as_str().to_string()),
            priority: args.priority.map(|priority| priority.as_str().to_string()),
            due_date,
            tags: args.tags,
        }
    } else {
        // No field flags: walk through the current values interactively
        let current = match tasks.get(&owner, args.id) {
            Ok(task) => task,
            Err(err) => {
                report_task_error(err);
                return Ok(());
            }
        };
        prompt_patch(&current)?
    };

    match tasks.update(&owner, args.id, &patch) {
        Ok(task) => {
            msg_success!(Message::TaskUpdated(task.id));
            View::task(&task)?;
        }
        Err(err) => report_task_error(err),
    }

    Ok(())
}

fn prompt_patch(current: &Task) -> Result<TaskPatch> {
    msg_print!(Message::EditingTask(current.title.clone()), true);

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(current.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(current.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let status_default = STATUS_CHOICES.iter().position(|choice| *choice == current.status).unwrap_or(0);
    let status_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&STATUS_CHOICES)
        .default(status_default)
        .interact()?;

    let priority_default = PRIORITY_CHOICES.iter().position(|choice| *choice == current.priority).unwrap_or(1);
    let priority_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&PRIORITY_CHOICES)
        .default(priority_default)
        .interact()?;

    Ok(TaskPatch {
        title: Some(title),
        description: Some(description),
        status: Some(STATUS_CHOICES[status_idx].to_string()),
        priority: Some(PRIORITY_CHOICES[priority_idx].to_string()),
        due_date: None,
        tags: None,
    })
}
