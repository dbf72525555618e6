#[cfg(test)]
mod tests {
    use taskdeck::libs::filter::like_pattern;
    use taskdeck::libs::pagination::{Pagination, QueryPlan, SortKey, SortOrder};

    #[test]
    fn test_plan_defaults() {
        let plan = QueryPlan::default();

        assert_eq!(plan.page(), 1);
        assert_eq!(plan.limit(), 10);
        assert_eq!(plan.offset(), 0);
        assert_eq!(plan.order_sql(), "created_at DESC");
    }

    #[test]
    fn test_plan_window_arithmetic() {
        let plan = QueryPlan::new(SortKey::Title, SortOrder::Asc, 3, 25);

        assert_eq!(plan.offset(), 50);
        assert_eq!(plan.limit(), 25);
        assert_eq!(plan.order_sql(), "title ASC");
    }

    #[test]
    fn test_plan_coerces_non_positive_values() {
        let plan = QueryPlan::new(SortKey::CreatedAt, SortOrder::Desc, 0, 0);

        assert_eq!(plan.page(), 1);
        assert_eq!(plan.limit(), 1);
        assert_eq!(plan.offset(), 0);
    }

    #[test]
    fn test_pagination_rounds_pages_up() {
        let plan = QueryPlan::new(SortKey::CreatedAt, SortOrder::Desc, 1, 10);
        let pagination = Pagination::new(&plan, 21);

        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.total_tasks, 21);
        assert!(pagination.has_next);
        assert!(!pagination.has_prev);
    }

    #[test]
    fn test_pagination_exact_multiple() {
        let plan = QueryPlan::new(SortKey::CreatedAt, SortOrder::Desc, 2, 10);
        let pagination = Pagination::new(&plan, 20);

        assert_eq!(pagination.total_pages, 2);
        assert!(!pagination.has_next);
        assert!(pagination.has_prev);
    }

    #[test]
    fn test_pagination_empty_result() {
        let plan = QueryPlan::default();
        let pagination = Pagination::new(&plan, 0);

        assert_eq!(pagination.total_pages, 0);
        assert!(!pagination.has_next);
        assert!(!pagination.has_prev);
    }

    #[test]
    fn test_pagination_page_past_the_end() {
        let plan = QueryPlan::new(SortKey::CreatedAt, SortOrder::Desc, 9, 10);
        let pagination = Pagination::new(&plan, 15);

        assert_eq!(pagination.total_pages, 2);
        assert!(!pagination.has_next);
        assert!(pagination.has_prev);
    }

    #[test]
    fn test_sort_keys_map_to_columns() {
        assert_eq!(SortKey::CreatedAt.column(), "created_at");
        assert_eq!(SortKey::UpdatedAt.column(), "updated_at");
        assert_eq!(SortKey::DueDate.column(), "due_date");
        assert_eq!(SortKey::Title.column(), "title");
        assert_eq!(SortKey::Status.column(), "status");
        assert_eq!(SortKey::Priority.column(), "priority");
        assert_eq!(SortKey::Id.column(), "id");
    }

    #[test]
    fn test_like_pattern_is_unanchored() {
        assert_eq!(like_pattern("deploy"), "%deploy%");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("snake_case"), "%snake\\_case%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }
}
