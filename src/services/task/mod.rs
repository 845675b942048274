//! Task service entry point.
//! Reads task records from the surrounding application's store and exposes
//! recurrence expansion and date queries over them.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::task::Task;

pub mod queries;
pub mod recurrence;

/// Supplier of task records, typically the application's task repository.
#[cfg_attr(test, mockall::automock)]
pub trait TaskSource {
    fn list_tasks(&self) -> Result<Vec<Task>>;
}

/// In-memory task lists act as a source directly.
impl TaskSource for Vec<Task> {
    fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.clone())
    }
}

/// Service for scheduling queries over a task source.
pub struct TaskService<'a, S: TaskSource + ?Sized> {
    pub(crate) source: &'a S,
}

impl<'a, S: TaskSource + ?Sized> TaskService<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub fn list_all(&self) -> Result<Vec<Task>> {
        self.source.list_tasks().context("Failed to load tasks")
    }

    /// Expand recurring tasks into occurrences within `[start, end]`.
    /// Non-recurring tasks are returned as-is.
    pub fn expand_recurring_tasks(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Task>> {
        let tasks = self.list_all()?;
        Ok(recurrence::expand_occurrences(&tasks, start, end))
    }
}
