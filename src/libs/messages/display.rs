//! Display implementation for taskdeck application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! on the terminal. All user-facing wording lives here, so message text is
//! defined in exactly one place and interpolation stays type-checked.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created successfully", id),
            Message::TaskUpdated(id) => format!("Task #{} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskNotFound => "Task not found".to_string(),
            Message::TasksBulkUpdated(count) => format!("{} tasks updated successfully", count),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TaskListHeader => "📋 Tasks".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === STATS MESSAGES ===
            Message::StatsHeader(user) => format!("📊 Task statistics for {}", user),

            // === AUTH MESSAGES ===
            Message::AuthRequired => {
                "No user identity found. Pass --user, set TASKDECK_USER, or run 'taskdeck init'".to_string()
            }

            // === VALIDATION MESSAGES ===
            Message::InvalidInput(reason) => reason.clone(),

            // === STORAGE MESSAGES ===
            Message::StorageFailure => "Storage failure, see logs for details".to_string(),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptDefaultUser => "Default user".to_string(),

            // === PROMPT MESSAGES ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
        };
        write!(f, "{}", message)
    }
}
