// Task module
// Task record supplied by the task store, plus the occurrence constructor

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::recurrence::Recurrence;
use crate::services::layout::time_grid::{parse_time, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Validation failures for task records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Task end date {end} cannot be before start date {start}")]
    ReversedRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid {field} '{value}': expected HH:MM")]
    InvalidTime { field: &'static str, value: String },

    #[error("Task end time {end} must be after start time {start}")]
    EndBeforeStart { start: String, end: String },
}

/// A task as stored by the task manager.
///
/// The scheduling engine reads only the date, time and recurrence fields;
/// everything else is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl Task {
    /// Create an undated, non-recurring task.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            due_date: None,
            due_end_date: None,
            is_all_day: false,
            start_time: None,
            end_time: None,
            recurrence: Recurrence::None,
            priority: Priority::Medium,
            completed: false,
            category_id: None,
        }
    }

    pub fn builder(id: i64) -> TaskBuilder {
        TaskBuilder::new(id)
    }

    /// Build an occurrence: a copy of this task dated `date`.
    pub fn with_due_date(&self, date: NaiveDate) -> Self {
        Self {
            due_date: Some(date),
            ..self.clone()
        }
    }

    /// True when the task spans more than one calendar day.
    pub fn is_multi_day(&self) -> bool {
        matches!((self.due_date, self.due_end_date), (Some(start), Some(end)) if end > start)
    }

    /// Inclusive `(start, end)` dates covered by the task.
    ///
    /// A reversed range collapses to the single `due_date`.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.due_date?;
        match self.due_end_date {
            Some(end) if end > start => Some((start, end)),
            Some(end) if end < start => {
                log::debug!(
                    "Task {} has end date {} before start {}; treating as single day",
                    self.id,
                    end,
                    start
                );
                Some((start, start))
            }
            _ => Some((start, start)),
        }
    }

    /// Timed tasks are single-day, not all-day, and dated.
    pub fn is_timed(&self) -> bool {
        self.due_date.is_some() && !self.is_all_day && !self.is_multi_day()
    }

    pub fn validate(&self) -> Result<(), TaskError> {
        if self.title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        if let (Some(start), Some(end)) = (self.due_date, self.due_end_date) {
            if end < start {
                return Err(TaskError::ReversedRange { start, end });
            }
        }

        let start = validate_time("startTime", self.start_time.as_deref())?;
        let end = validate_time("endTime", self.end_time.as_deref())?;
        if let (Some(s), Some(e)) = (start, end) {
            if e <= s {
                return Err(TaskError::EndBeforeStart {
                    start: s.to_string(),
                    end: e.to_string(),
                });
            }
        }

        Ok(())
    }
}

fn validate_time(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<TimeOfDay>, TaskError> {
    match raw {
        None => Ok(None),
        Some(value) => parse_time(value).map(Some).ok_or_else(|| TaskError::InvalidTime {
            field,
            value: value.to_string(),
        }),
    }
}

/// Builder for tasks with scheduling fields.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            task: Task::new(id, ""),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.task.title = title.into();
        self
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.task.due_date = Some(date);
        self
    }

    /// Set an inclusive date range.
    pub fn range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.task.due_date = Some(start);
        self.task.due_end_date = Some(end);
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.task.is_all_day = all_day;
        self
    }

    /// Set the `HH:MM` start and end times.
    pub fn times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.task.start_time = Some(start.into());
        self.task.end_time = Some(end.into());
        self
    }

    pub fn start_time(mut self, start: impl Into<String>) -> Self {
        self.task.start_time = Some(start.into());
        self
    }

    pub fn recurrence(mut self, recurrence: Recurrence) -> Self {
        self.task.recurrence = recurrence;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.task.completed = completed;
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.task.category_id = Some(category_id);
        self
    }

    /// Build and validate the task.
    pub fn build(self) -> Result<Task, TaskError> {
        self.task.validate()?;
        Ok(self.task)
    }

    /// Build without validation, for records that came from storage as-is.
    pub fn build_unchecked(self) -> Task {
        self.task
    }
}
