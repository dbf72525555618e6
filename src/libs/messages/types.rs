#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFound,
    TasksBulkUpdated(usize),
    NoTasksFound,
    TaskListHeader,
    EditingTask(String),
    ConfirmDeleteTask(String),
    OperationCancelled,

    // === STATS MESSAGES ===
    StatsHeader(String),

    // === AUTH MESSAGES ===
    AuthRequired,

    // === VALIDATION MESSAGES ===
    InvalidInput(String),

    // === STORAGE MESSAGES ===
    StorageFailure,
    MigrationFailed(u32, String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptDefaultUser,

    // === PROMPT MESSAGES ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskStatus,
    PromptTaskPriority,
}
