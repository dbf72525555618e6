//! Owned task storage and the query/aggregation operations built on it.
//!
//! All operations are scoped to the acting owner: a task that exists under a
//! different owner is indistinguishable from one that does not exist. The
//! store primitives (windowed find, count, grouped count, multi-row update)
//! are expressed directly as SQL over the `tasks` and `task_tags` tables.

use crate::db::db::Db;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::filter::TaskFilter;
use crate::libs::identity::Identity;
use crate::libs::pagination::{Pagination, QueryPlan};
use crate::libs::task::{NewTask, Task, TaskPatch, TaskStatus};
use anyhow::Result;
use chrono::{Duration, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};
use serde::Serialize;

const TASK_COLUMNS: &str = "id, title, description, status, priority, due_date, owner, created_at, updated_at";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, status, priority, due_date, owner) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_BY_ID: &str = "SELECT id, title, description, status, priority, due_date, owner, created_at, updated_at FROM tasks WHERE id = ?1 AND owner = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1 AND owner = ?2";
const SELECT_TAGS: &str = "SELECT tag FROM task_tags WHERE task_id = ?1 ORDER BY position";
const DELETE_TAGS: &str = "DELETE FROM task_tags WHERE task_id = ?1";
const INSERT_TAG: &str = "INSERT INTO task_tags (task_id, position, tag) VALUES (?1, ?2, ?3)";
const GROUP_BY_STATUS: &str = "SELECT status, COUNT(*) FROM tasks WHERE owner = ?1 GROUP BY status";
const COUNT_UPCOMING: &str = "SELECT COUNT(*) FROM tasks WHERE owner = ?1 AND status != 'completed' \
    AND due_date IS NOT NULL AND due_date BETWEEN ?2 AND ?3";

/// One page of tasks plus the metadata describing its position in the full
/// result set.
#[derive(Debug, Clone)]
pub struct TaskList {
    pub tasks: Vec<Task>,
    pub pagination: Pagination,
}

/// Status counts for one owner. Statuses outside the canonical three still
/// contribute to `total` but are not separately bucketed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: u64,
    pub pending: u64,
    #[serde(rename = "in-progress")]
    pub in_progress: u64,
    pub completed: u64,
    pub upcoming: u64,
}

/// Number of days ahead of now that counts as "upcoming".
const UPCOMING_WINDOW_DAYS: i64 = 7;

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    /// Wraps an already opened database handle.
    pub fn with_db(db: Db) -> Self {
        Tasks { conn: db.conn }
    }

    /// Creates a task for the owner, applying the documented defaults.
    /// A blank title is rejected before the store is touched.
    pub fn insert(&mut self, owner: &Identity, new_task: &NewTask) -> TaskResult<Task> {
        let title = new_task.title.trim();
        if title.is_empty() {
            return Err(TaskError::InvalidArgument("title is required".to_string()));
        }

        self.conn.execute(
            INSERT_TASK,
            params![
                title,
                new_task.description.trim(),
                TaskStatus::Pending.as_str(),
                new_task.priority.as_str(),
                new_task.due_date,
                owner.as_str(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        self.replace_tags(id, &new_task.tags)?;

        self.get(owner, id)
    }

    /// Fetches one task by id, scoped to the owner.
    pub fn get(&mut self, owner: &Identity, id: i64) -> TaskResult<Task> {
        let task = self
            .conn
            .query_row(SELECT_BY_ID, params![id, owner.as_str()], Self::map_row)
            .optional()?;

        let mut task = task.ok_or(TaskError::NotFound)?;
        task.tags = self.fetch_tags(task.id)?;
        Ok(task)
    }

    /// Applies a partial update to one owned task and returns the updated
    /// row. Title and description are trimmed; a blank title is rejected.
    pub fn update(&mut self, owner: &Identity, id: i64, patch: &TaskPatch) -> TaskResult<Task> {
        let mut patch = patch.clone();
        if let Some(title) = patch.title.as_deref() {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(TaskError::InvalidArgument("title cannot be blank".to_string()));
            }
            patch.title = Some(trimmed.to_string());
        }
        if let Some(description) = patch.description.as_deref() {
            patch.description = Some(description.trim().to_string());
        }

        let modified = self.apply_patch(owner, &[id], &patch)?;
        if modified == 0 {
            return Err(TaskError::NotFound);
        }
        self.get(owner, id)
    }

    /// Hard-deletes one owned task. Tag rows follow via cascade.
    pub fn delete(&mut self, owner: &Identity, id: i64) -> TaskResult<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id, owner.as_str()])?;
        if affected == 0 {
            return Err(TaskError::NotFound);
        }
        Ok(())
    }

    /// Runs the filter predicate with the plan's ordering and window, plus a
    /// separate count of all matches. The two reads share the predicate but
    /// are not transactionally consistent with each other; under concurrent
    /// writes the page and the total may be mutually stale.
    pub fn list(&mut self, filter: &TaskFilter, plan: &QueryPlan) -> TaskResult<TaskList> {
        let (clause, filter_params) = filter.to_sql();

        let select_sql = format!(
            "SELECT {} FROM tasks WHERE {} ORDER BY {} LIMIT {} OFFSET {}",
            TASK_COLUMNS,
            clause,
            plan.order_sql(),
            plan.limit(),
            plan.offset()
        );
        let mut tasks = Vec::new();
        {
            let mut stmt = self.conn.prepare(&select_sql)?;
            let task_iter = stmt.query_map(params_from_iter(filter_params.iter()), Self::map_row)?;
            for task in task_iter {
                tasks.push(task?);
            }
        }
        for task in &mut tasks {
            task.tags = self.fetch_tags(task.id)?;
        }

        let count_sql = format!("SELECT COUNT(*) FROM tasks WHERE {}", clause);
        let total: i64 = self
            .conn
            .query_row(&count_sql, params_from_iter(filter_params.iter()), |row| row.get(0))?;

        Ok(TaskList {
            tasks,
            pagination: Pagination::new(plan, total as u64),
        })
    }

    /// Applies one update document to every given id owned by the requester.
    /// Ids belonging to other owners are silently excluded. Returns the
    /// store's modified count. Tag replacement runs per document after the
    /// field update, so a failure partway through can leave a subset mutated.
    pub fn update_many(&mut self, owner: &Identity, ids: &[i64], patch: &TaskPatch) -> TaskResult<usize> {
        if ids.is_empty() {
            return Err(TaskError::InvalidArgument("task ids are required".to_string()));
        }
        self.apply_patch(owner, ids, patch)
    }

    /// Groups the owner's tasks by status and counts tasks due within the
    /// next seven days (inclusive bounds, measured now) that are not
    /// completed.
    pub fn stats(&mut self, owner: &Identity) -> TaskResult<TaskStats> {
        let mut stats = TaskStats::default();
        {
            let mut stmt = self.conn.prepare(GROUP_BY_STATUS)?;
            let group_iter = stmt.query_map(params![owner.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?;
            for group in group_iter {
                let (status, count) = group?;
                let count = count as u64;
                stats.total += count;
                match status.as_str() {
                    "pending" => stats.pending = count,
                    "in-progress" => stats.in_progress = count,
                    "completed" => stats.completed = count,
                    // unknown statuses count toward the total only
                    _ => {}
                }
            }
        }

        let now = Utc::now().naive_utc();
        let horizon = now + Duration::days(UPCOMING_WINDOW_DAYS);
        let upcoming: i64 = self
            .conn
            .query_row(COUNT_UPCOMING, params![owner.as_str(), now, horizon], |row| row.get(0))?;
        stats.upcoming = upcoming as u64;

        Ok(stats)
    }

    /// Mechanical field apply shared by single and bulk updates. Builds one
    /// UPDATE over the owned subset of `ids`; `updated_at` refreshes on every
    /// matched row even when the patch carries no scalar fields.
    fn apply_patch(&mut self, owner: &Identity, ids: &[i64], patch: &TaskPatch) -> TaskResult<usize> {
        let mut assignments = vec!["updated_at = datetime(CURRENT_TIMESTAMP)".to_string()];
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(title) = &patch.title {
            assignments.push("title = ?".to_string());
            values.push(Box::new(title.clone()));
        }
        if let Some(description) = &patch.description {
            assignments.push("description = ?".to_string());
            values.push(Box::new(description.clone()));
        }
        if let Some(status) = &patch.status {
            assignments.push("status = ?".to_string());
            values.push(Box::new(status.clone()));
        }
        if let Some(priority) = &patch.priority {
            assignments.push("priority = ?".to_string());
            values.push(Box::new(priority.clone()));
        }
        if let Some(due_date) = &patch.due_date {
            assignments.push("due_date = ?".to_string());
            values.push(Box::new(*due_date));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "UPDATE tasks SET {} WHERE id IN ({}) AND owner = ?",
            assignments.join(", "),
            placeholders
        );
        for id in ids {
            values.push(Box::new(*id));
        }
        values.push(Box::new(owner.as_str().to_string()));

        let modified = self
            .conn
            .execute(&sql, params_from_iter(values.iter().map(|value| value.as_ref())))?;

        if let Some(tags) = &patch.tags {
            for id in self.owned_ids(owner, ids)? {
                self.replace_tags(id, tags)?;
            }
        }

        Ok(modified)
    }

    /// The subset of `ids` owned by the requester.
    fn owned_ids(&self, owner: &Identity, ids: &[i64]) -> TaskResult<Vec<i64>> {
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("SELECT id FROM tasks WHERE id IN ({}) AND owner = ?", placeholders);

        let mut values: Vec<Box<dyn ToSql>> = ids.iter().map(|id| Box::new(*id) as Box<dyn ToSql>).collect();
        values.push(Box::new(owner.as_str().to_string()));

        let mut stmt = self.conn.prepare(&sql)?;
        let id_iter = stmt.query_map(params_from_iter(values.iter().map(|value| value.as_ref())), |row| row.get(0))?;

        let mut owned = Vec::new();
        for id in id_iter {
            owned.push(id?);
        }
        Ok(owned)
    }

    /// Replaces the full tag list of one task, preserving label order.
    fn replace_tags(&self, task_id: i64, tags: &[String]) -> TaskResult<()> {
        self.conn.execute(DELETE_TAGS, params![task_id])?;
        let mut stmt = self.conn.prepare(INSERT_TAG)?;
        for (position, tag) in tags.iter().enumerate() {
            stmt.execute(params![task_id, position as i64, tag])?;
        }
        Ok(())
    }

    fn fetch_tags(&self, task_id: i64) -> TaskResult<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_TAGS)?;
        let tag_iter = stmt.query_map(params![task_id], |row| row.get(0))?;

        let mut tags = Vec::new();
        for tag in tag_iter {
            tags.push(tag?);
        }
        Ok(tags)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            status: row.get(3)?,
            priority: row.get(4)?,
            due_date: row.get(5)?,
            tags: Vec::new(),
            owner: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }
}
