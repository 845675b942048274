use chrono::NaiveDate;

use crate::models::task::Task;

mod utils;

use utils::fast_forward;

/// Upper bound on occurrences generated for a single task.
pub const MAX_OCCURRENCES_PER_TASK: usize = 1000;

/// Expand every task into its occurrences for the window `[start, end]`.
///
/// Non-recurring and undated tasks pass through unchanged whatever their
/// date; recurring tasks yield only the occurrences inside the window.
pub fn expand_occurrences(tasks: &[Task], start: NaiveDate, end: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .flat_map(|task| generate_occurrences(task, start, end))
        .collect()
}

/// Generate the occurrences of one task within `[start, end]`.
pub fn generate_occurrences(task: &Task, start: NaiveDate, end: NaiveDate) -> Vec<Task> {
    let Some(original) = task.due_date else {
        return vec![task.clone()];
    };
    if !task.recurrence.is_recurring() {
        return vec![task.clone()];
    }
    if original > end {
        return Vec::new();
    }

    let mut occurrences = Vec::new();
    let mut cursor = fast_forward(original, task.recurrence, start);

    while let Some(date) = cursor {
        if date > end {
            break;
        }
        if occurrences.len() >= MAX_OCCURRENCES_PER_TASK {
            log::debug!(
                "Task {} reached {} occurrences before {}; truncating",
                task.id,
                MAX_OCCURRENCES_PER_TASK,
                end
            );
            break;
        }

        occurrences.push(task.with_due_date(date));
        cursor = task.recurrence.advance(date);
    }

    occurrences
}
