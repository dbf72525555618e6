#[cfg(test)]
mod tests {
    use taskdeck::db::db::Db;
    use taskdeck::db::tasks::Tasks;
    use taskdeck::libs::filter::TaskFilter;
    use taskdeck::libs::identity::Identity;
    use taskdeck::libs::pagination::{QueryPlan, SortKey, SortOrder};
    use taskdeck::libs::task::{NewTask, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct QueryTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for QueryTestContext {
        fn setup() -> Self {
            QueryTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl QueryTestContext {
        fn tasks(&self) -> Tasks {
            let db = Db::open(&self.temp_dir.path().join("taskdeck.db")).unwrap();
            Tasks::with_db(db)
        }
    }

    fn alice() -> Identity {
        Identity::new("alice").unwrap()
    }

    fn bob() -> Identity {
        Identity::new("bob").unwrap()
    }

    fn seed(tasks: &mut Tasks, owner: &Identity, title: &str, description: &str, tags: &[&str]) -> i64 {
        let new_task = NewTask {
            description: description.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            ..NewTask::new(title)
        };
        tasks.insert(owner, &new_task).unwrap().id
    }

    fn set_status(tasks: &mut Tasks, owner: &Identity, id: i64, status: &str) {
        let patch = TaskPatch {
            status: Some(status.to_string()),
            ..TaskPatch::default()
        };
        tasks.update(owner, id, &patch).unwrap();
    }

    fn titles(tasks: &mut Tasks, filter: &TaskFilter, plan: &QueryPlan) -> Vec<String> {
        tasks.list(filter, plan).unwrap().tasks.into_iter().map(|task| task.title).collect()
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_list_is_owner_scoped(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        seed(&mut tasks, &alice(), "Mine", "", &[]);
        seed(&mut tasks, &bob(), "Not mine", "", &[]);

        let list = tasks.list(&TaskFilter::for_owner(&alice()), &QueryPlan::default()).unwrap();

        assert_eq!(list.pagination.total_tasks, 1);
        assert_eq!(list.tasks[0].title, "Mine");
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_status_and_priority_filters(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        let owner = alice();
        let first = seed(&mut tasks, &owner, "First", "", &[]);
        let second = seed(&mut tasks, &owner, "Second", "", &[]);
        seed(&mut tasks, &owner, "Third", "", &[]);
        set_status(&mut tasks, &owner, first, "completed");
        set_status(&mut tasks, &owner, second, "in-progress");

        let completed = TaskFilter::for_owner(&owner).status(Some("completed".to_string()));
        assert_eq!(titles(&mut tasks, &completed, &QueryPlan::default()), vec!["First"]);

        // The "all" sentinel adds no constraint
        let all = TaskFilter::for_owner(&owner).status(Some("all".to_string()));
        assert_eq!(tasks.list(&all, &QueryPlan::default()).unwrap().pagination.total_tasks, 3);

        let medium = TaskFilter::for_owner(&owner).priority(Some("medium".to_string()));
        assert_eq!(tasks.list(&medium, &QueryPlan::default()).unwrap().pagination.total_tasks, 3);

        let high = TaskFilter::for_owner(&owner).priority(Some("high".to_string()));
        assert_eq!(tasks.list(&high, &QueryPlan::default()).unwrap().pagination.total_tasks, 0);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_search_matches_title_case_insensitively(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        let owner = alice();
        seed(&mut tasks, &owner, "Deploy the backend", "", &[]);
        seed(&mut tasks, &owner, "Write docs", "", &[]);

        let filter = TaskFilter::for_owner(&owner).search(Some("BACKEND".to_string()));
        assert_eq!(titles(&mut tasks, &filter, &QueryPlan::default()), vec!["Deploy the backend"]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_search_matches_description_and_tags(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        let owner = alice();
        seed(&mut tasks, &owner, "Alpha", "refactor the parser", &[]);
        seed(&mut tasks, &owner, "Beta", "", &["parser", "cleanup"]);
        seed(&mut tasks, &owner, "Gamma", "unrelated", &["ui"]);

        let filter = TaskFilter::for_owner(&owner).search(Some("parser".to_string()));
        let plan = QueryPlan::new(SortKey::Title, SortOrder::Asc, 1, 10);

        assert_eq!(titles(&mut tasks, &filter, &plan), vec!["Alpha", "Beta"]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_search_never_crosses_owners(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        seed(&mut tasks, &bob(), "Secret launch plan", "", &[]);

        let filter = TaskFilter::for_owner(&alice()).search(Some("launch".to_string()));
        let list = tasks.list(&filter, &QueryPlan::default()).unwrap();

        assert!(list.tasks.is_empty());
        assert_eq!(list.pagination.total_tasks, 0);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_search_treats_metacharacters_literally(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        let owner = alice();
        seed(&mut tasks, &owner, "Reach 50% rollout", "", &[]);
        seed(&mut tasks, &owner, "Reach 500 users", "", &[]);
        seed(&mut tasks, &owner, "snake_case rename", "", &[]);
        seed(&mut tasks, &owner, "snakeXcase rename", "", &[]);

        let percent = TaskFilter::for_owner(&owner).search(Some("50%".to_string()));
        assert_eq!(titles(&mut tasks, &percent, &QueryPlan::default()), vec!["Reach 50% rollout"]);

        let underscore = TaskFilter::for_owner(&owner).search(Some("snake_case".to_string()));
        assert_eq!(titles(&mut tasks, &underscore, &QueryPlan::default()), vec!["snake_case rename"]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_blank_search_is_ignored(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        let owner = alice();
        seed(&mut tasks, &owner, "One", "", &[]);
        seed(&mut tasks, &owner, "Two", "", &[]);

        let filter = TaskFilter::for_owner(&owner).search(Some("   ".to_string()));
        assert_eq!(tasks.list(&filter, &QueryPlan::default()).unwrap().pagination.total_tasks, 2);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_sort_by_title(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        let owner = alice();
        seed(&mut tasks, &owner, "Banana", "", &[]);
        seed(&mut tasks, &owner, "Apple", "", &[]);
        seed(&mut tasks, &owner, "Cherry", "", &[]);

        let filter = TaskFilter::for_owner(&owner);
        let ascending = QueryPlan::new(SortKey::Title, SortOrder::Asc, 1, 10);
        assert_eq!(titles(&mut tasks, &filter, &ascending), vec!["Apple", "Banana", "Cherry"]);

        let descending = QueryPlan::new(SortKey::Title, SortOrder::Desc, 1, 10);
        assert_eq!(titles(&mut tasks, &filter, &descending), vec!["Cherry", "Banana", "Apple"]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_pagination_windows_and_metadata(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        let owner = alice();
        for i in 1..=7 {
            seed(&mut tasks, &owner, &format!("Task {}", i), "", &[]);
        }

        let filter = TaskFilter::for_owner(&owner);
        let page1 = tasks.list(&filter, &QueryPlan::new(SortKey::Id, SortOrder::Asc, 1, 3)).unwrap();
        assert_eq!(page1.tasks.len(), 3);
        assert_eq!(page1.pagination.total_tasks, 7);
        assert_eq!(page1.pagination.total_pages, 3);
        assert!(page1.pagination.has_next);
        assert!(!page1.pagination.has_prev);

        let page3 = tasks.list(&filter, &QueryPlan::new(SortKey::Id, SortOrder::Asc, 3, 3)).unwrap();
        assert_eq!(page3.tasks.len(), 1);
        assert_eq!(page3.tasks[0].title, "Task 7");
        assert!(!page3.pagination.has_next);
        assert!(page3.pagination.has_prev);

        // A window past the data is empty but keeps the totals
        let page9 = tasks.list(&filter, &QueryPlan::new(SortKey::Id, SortOrder::Asc, 9, 3)).unwrap();
        assert!(page9.tasks.is_empty());
        assert_eq!(page9.pagination.total_tasks, 7);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_empty_result_has_no_pages(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();

        let list = tasks.list(&TaskFilter::for_owner(&alice()), &QueryPlan::default()).unwrap();

        assert_eq!(list.pagination.total_tasks, 0);
        assert_eq!(list.pagination.total_pages, 0);
        assert!(!list.pagination.has_next);
        assert!(!list.pagination.has_prev);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_listed_tasks_carry_tags(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        let owner = alice();
        seed(&mut tasks, &owner, "Tagged", "", &["one", "two"]);

        let list = tasks.list(&TaskFilter::for_owner(&owner), &QueryPlan::default()).unwrap();
        assert_eq!(list.tasks[0].tags, vec!["one", "two"]);
    }
}
