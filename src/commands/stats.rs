use super::report_task_error;
use crate::db::tasks::Tasks;
use crate::libs::identity::Identity;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd(user: Option<&str>) -> Result<()> {
    let owner = match Identity::resolve(user) {
        Ok(owner) => owner,
        Err(err) => {
            report_task_error(err);
            return Ok(());
        }
    };

    let mut tasks = Tasks::new()?;
    match tasks.stats(&owner) {
        Ok(stats) => {
            msg_print!(Message::StatsHeader(owner.to_string()), true);
            View::stats(&stats)?;
        }
        Err(err) => report_task_error(err),
    }

    Ok(())
}
