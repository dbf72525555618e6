use super::report_task_error;
use crate::db::tasks::Tasks;
use crate::libs::filter::TaskFilter;
use crate::libs::identity::Identity;
use crate::libs::messages::Message;
use crate::libs::pagination::{QueryPlan, SortKey, SortOrder};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by status ("all" disables the filter)
    #[arg(short, long)]
    status: Option<String>,

    /// Filter by priority ("all" disables the filter)
    #[arg(short, long)]
    priority: Option<String>,

    /// Text search across title, description, and tags
    #[arg(long)]
    search: Option<String>,

    /// Sort key
    #[arg(long, value_enum, default_value_t = SortKey::CreatedAt)]
    sort_by: SortKey,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
    sort_order: SortOrder,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    page: u64,

    /// Tasks per page
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    limit: u64,
}

pub fn cmd(user: Option<&str>, args: ListArgs) -> Result<()> {
    let owner = match Identity::resolve(user) {
        Ok(owner) => owner,
        Err(err) => {
            report_task_error(err);
            return Ok(());
        }
    };

    let filter = TaskFilter::for_owner(&owner)
        .status(args.status)
        .priority(args.priority)
        .search(args.search);
    let plan = QueryPlan::new(args.sort_by, args.sort_order, args.page, args.limit);

    let mut tasks = Tasks::new()?;
    match tasks.list(&filter, &plan) {
        Ok(list) => {
            if list.tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
            } else {
                msg_print!(Message::TaskListHeader, true);
                View::tasks(&list.tasks)?;
            }
            View::pagination(&list.pagination);
        }
        Err(err) => report_task_error(err),
    }

    Ok(())
}
