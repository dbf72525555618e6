//! Query predicate construction for task listings.
//!
//! `TaskFilter` turns the optional request parameters into a SQL predicate
//! that is always scoped to the owning user. Text search matches a literal
//! substring of the title, the description, or any single tag,
//! case-insensitively; `LIKE` metacharacters in the raw term are escaped so
//! they cannot change matching semantics.

use crate::libs::identity::Identity;

/// Sentinel filter value meaning "do not constrain this field".
const FILTER_ALL: &str = "all";

/// Filter parameters for one list query. Construction is pure; the predicate
/// is rendered by [`TaskFilter::to_sql`].
#[derive(Debug, Clone)]
pub struct TaskFilter {
    owner: String,
    status: Option<String>,
    priority: Option<String>,
    search: Option<String>,
}

impl TaskFilter {
    /// Starts a filter scoped to the given owner. Every rendered predicate
    /// includes the owner constraint regardless of the other fields.
    pub fn for_owner(owner: &Identity) -> Self {
        TaskFilter {
            owner: owner.as_str().to_string(),
            status: None,
            priority: None,
            search: None,
        }
    }

    /// Constrains the status to an exact value. The value is passed through
    /// verbatim; `"all"` or `None` leaves the field unconstrained.
    pub fn status(mut self, status: Option<String>) -> Self {
        self.status = status;
        self
    }

    /// Constrains the priority, same rules as [`TaskFilter::status`].
    pub fn priority(mut self, priority: Option<String>) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a text search term. Empty or whitespace-only terms are treated
    /// as absent.
    pub fn search(mut self, search: Option<String>) -> Self {
        self.search = search;
        self
    }

    /// Renders the predicate as a WHERE-clause body plus its positional
    /// parameters. Field constraints are ANDed; the search constraint is an
    /// OR group over title, description, and tags nested under that AND.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        let mut clause = String::from("owner = ?");
        let mut params = vec![self.owner.clone()];

        if let Some(status) = constrained(&self.status) {
            clause.push_str(" AND status = ?");
            params.push(status.to_string());
        }
        if let Some(priority) = constrained(&self.priority) {
            clause.push_str(" AND priority = ?");
            params.push(priority.to_string());
        }
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = like_pattern(term);
            clause.push_str(
                " AND (title LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\' \
                 OR EXISTS (SELECT 1 FROM task_tags tt WHERE tt.task_id = tasks.id \
                 AND tt.tag LIKE ? ESCAPE '\\'))",
            );
            params.push(pattern.clone());
            params.push(pattern.clone());
            params.push(pattern);
        }

        (clause, params)
    }
}

fn constrained(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty() && *v != FILTER_ALL)
}

/// Builds an unanchored `%term%` pattern with `%`, `_` and `\` escaped, so
/// the term matches as a literal substring under `LIKE ... ESCAPE '\'`.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
