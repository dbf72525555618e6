use crate::db::tasks::TaskStats;
use crate::libs::pagination::Pagination;
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "DUE", "TAGS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.status,
                task.priority,
                task.due_date.map(|due| due.format(DATE_FORMAT).to_string()).unwrap_or_default(),
                task.tags.join(", ")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description]);
        table.add_row(row!["STATUS", task.status]);
        table.add_row(row!["PRIORITY", task.priority]);
        table.add_row(row![
            "DUE",
            task.due_date.map(|due| due.format(DATE_FORMAT).to_string()).unwrap_or_default()
        ]);
        table.add_row(row!["TAGS", task.tags.join(", ")]);
        table.add_row(row!["CREATED", task.created_at.format(DATE_FORMAT)]);
        table.add_row(row!["UPDATED", task.updated_at.format(DATE_FORMAT)]);
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &TaskStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", stats.total]);
        table.add_row(row!["PENDING", stats.pending]);
        table.add_row(row!["IN PROGRESS", stats.in_progress]);
        table.add_row(row!["COMPLETED", stats.completed]);
        table.add_row(row!["UPCOMING (7 DAYS)", stats.upcoming]);
        table.printstd();

        Ok(())
    }

    /// One-line page footer printed under task listings.
    pub fn pagination(pagination: &Pagination) {
        println!(
            "Page {} of {} ({} tasks){}{}",
            pagination.current_page,
            pagination.total_pages,
            pagination.total_tasks,
            if pagination.has_prev { " | prev available" } else { "" },
            if pagination.has_next { " | next available" } else { "" },
        );
    }
}
