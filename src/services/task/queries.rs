use chrono::NaiveDate;

use crate::models::task::Task;
use crate::utils::date::is_same_day;

/// Occurrences active on `date`.
///
/// Ranges match on every day from their start to their end inclusive, even
/// when the start lies outside the window that produced the occurrences.
pub fn todos_for_date(occurrences: &[Task], date: NaiveDate) -> Vec<&Task> {
    occurrences
        .iter()
        .filter(|task| is_active_on(task, date))
        .collect()
}

/// Whether a single occurrence covers `date`.
pub fn is_active_on(task: &Task, date: NaiveDate) -> bool {
    let Some(due) = task.due_date else {
        return false;
    };

    if task.is_multi_day() {
        match task.date_span() {
            Some((start, end)) => start <= date && date <= end,
            None => false,
        }
    } else {
        is_same_day(date, due)
    }
}

/// Keep tasks in `category_id`, or all tasks when no filter is active.
pub fn filter_by_category(tasks: Vec<Task>, category_id: Option<i64>) -> Vec<Task> {
    match category_id {
        None => tasks,
        Some(category) => tasks
            .into_iter()
            .filter(|t| t.category_id == Some(category))
            .collect(),
    }
}

/// Drop completed tasks when `hide_completed` is set.
pub fn filter_completed(tasks: Vec<Task>, hide_completed: bool) -> Vec<Task> {
    if hide_completed {
        tasks.into_iter().filter(|t| !t.completed).collect()
    } else {
        tasks
    }
}
