//! Sort and page planning for task listings.
//!
//! `QueryPlan` resolves the optional sort/page parameters into a concrete
//! ordering and window. Sort keys are an enumerated whitelist rather than a
//! raw field pass-through, so a caller can never order by an unknown or
//! unindexed column. Page and limit are coerced to a minimum of 1 before the
//! window arithmetic, keeping the offset non-negative.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

/// Sortable task columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
    DueDate,
    Title,
    Status,
    Priority,
    Id,
}

impl SortKey {
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::UpdatedAt => "updated_at",
            SortKey::DueDate => "due_date",
            SortKey::Title => "title",
            SortKey::Status => "status",
            SortKey::Priority => "priority",
            SortKey::Id => "id",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::CreatedAt => "created-at",
            SortKey::UpdatedAt => "updated-at",
            SortKey::DueDate => "due-date",
            SortKey::Title => "title",
            SortKey::Status => "status",
            SortKey::Priority => "priority",
            SortKey::Id => "id",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Resolved ordering and window for one list query.
#[derive(Debug, Clone, Copy)]
pub struct QueryPlan {
    sort_by: SortKey,
    sort_order: SortOrder,
    page: u64,
    limit: u64,
}

impl Default for QueryPlan {
    fn default() -> Self {
        QueryPlan {
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryPlan {
    pub fn new(sort_by: SortKey, sort_order: SortOrder, page: u64, limit: u64) -> Self {
        QueryPlan {
            sort_by,
            sort_order,
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// ORDER BY body built from whitelisted identifiers only.
    pub fn order_sql(&self) -> String {
        format!("{} {}", self.sort_by.column(), self.sort_order.keyword())
    }
}

/// Page metadata reported alongside every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_tasks: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Derives page metadata from the executed plan and the total match
    /// count. Zero matches yield zero pages and both flags false.
    pub fn new(plan: &QueryPlan, total_tasks: u64) -> Self {
        let total_pages = total_tasks.div_ceil(plan.limit());
        Pagination {
            current_page: plan.page(),
            total_pages,
            total_tasks,
            has_next: plan.page() < total_pages,
            has_prev: total_pages > 0 && plan.page() > 1,
        }
    }
}
