use super::report_task_error;
use crate::db::tasks::Tasks;
use crate::libs::identity::Identity;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task id
    id: i64,
}

pub fn cmd(user: Option<&str>, args: ShowArgs) -> Result<()> {
    let owner = match Identity::resolve(user) {
        Ok(owner) => owner,
        Err(err) => {
            report_task_error(err);
            return Ok(());
        }
    };

    let mut tasks = Tasks::new()?;
    match tasks.get(&owner, args.id) {
        Ok(task) => View::task(&task)?,
        Err(err) => report_task_error(err),
    }

    Ok(())
}
