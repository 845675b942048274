//! View models for the month, week and day calendar views.
//!
//! Each call recomputes expansion and layout from the current task list;
//! nothing is cached between renders. "Today" is always passed in.

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::settings::CalendarSettings;
use crate::models::task::Task;
use crate::services::layout::time_grid::{timed_block, TimedBlock};
use crate::services::layout::{lane_count, layout_week_bars, WeekSegment};
use crate::services::task::queries::{filter_by_category, filter_completed, todos_for_date};
use crate::services::task::{TaskService, TaskSource};
use crate::utils::date::{build_month_matrix, build_week_days, is_same_month};

/// One month-grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    /// Single-day tasks drawn as chips. Multi-day tasks live in the row's bars.
    pub tasks: Vec<Task>,
}

/// A multi-day bar with its owned task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBar {
    pub task: Task,
    pub segment: WeekSegment,
    pub lane: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    pub days: [NaiveDate; 7],
    pub cells: Vec<DayCell>,
    pub bars: Vec<TaskBar>,
    pub lane_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub anchor: NaiveDate,
    pub weeks: Vec<WeekRow>,
}

/// A single day in the day or week view.
#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_today: bool,
    /// All-day and untimed single-day tasks.
    pub all_day: Vec<Task>,
    pub timed: Vec<TimedBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekView {
    pub days: [NaiveDate; 7],
    pub columns: Vec<DayColumn>,
    /// Multi-day bars for the all-day ribbon.
    pub bars: Vec<TaskBar>,
    pub lane_count: usize,
}

pub struct CalendarService<'a, S: TaskSource + ?Sized> {
    tasks: TaskService<'a, S>,
    settings: &'a CalendarSettings,
    category_id: Option<i64>,
}

impl<'a, S: TaskSource + ?Sized> CalendarService<'a, S> {
    pub fn new(source: &'a S, settings: &'a CalendarSettings) -> Self {
        Self {
            tasks: TaskService::new(source),
            settings,
            category_id: None,
        }
    }

    /// Restrict every view to one category. `None` shows all tasks.
    pub fn with_category(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Occurrences for the window, after the category and completed-task filters.
    pub fn occurrences(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Task>> {
        let occurrences = self.tasks.expand_recurring_tasks(start, end)?;
        let occurrences = filter_by_category(occurrences, self.category_id);
        Ok(filter_completed(occurrences, self.settings.hide_completed))
    }

    /// The 6 × 7 month grid around `anchor`.
    pub fn month_grid(&self, anchor: NaiveDate, today: NaiveDate) -> Result<MonthGrid> {
        let matrix = build_month_matrix(anchor);
        let occurrences = self.occurrences(matrix[0][0], matrix[5][6])?;

        let weeks = matrix
            .iter()
            .map(|days| {
                let cells = days
                    .iter()
                    .map(|&date| DayCell {
                        date,
                        in_month: is_same_month(date, anchor),
                        is_today: date == today,
                        tasks: single_day_tasks(&occurrences, date),
                    })
                    .collect();
                let (bars, lanes) = week_bars(&occurrences, days);
                WeekRow {
                    days: *days,
                    cells,
                    bars,
                    lane_count: lanes,
                }
            })
            .collect();

        log::debug!("Built month grid for {} from {} occurrences", anchor, occurrences.len());
        Ok(MonthGrid { anchor, weeks })
    }

    /// The Monday-anchored week containing `anchor`.
    pub fn week_view(&self, anchor: NaiveDate, today: NaiveDate) -> Result<WeekView> {
        let days = build_week_days(anchor);
        let occurrences = self.occurrences(days[0], days[6])?;

        let columns = days
            .iter()
            .map(|&date| self.day_column(&occurrences, date, today))
            .collect();
        let (bars, lanes) = week_bars(&occurrences, &days);

        Ok(WeekView {
            days,
            columns,
            bars,
            lane_count: lanes,
        })
    }

    /// A single day. Multi-day tasks covering `date` appear with the all-day tasks.
    pub fn day_view(&self, date: NaiveDate, today: NaiveDate) -> Result<DayColumn> {
        let occurrences = self.occurrences(date, date)?;
        let mut column = self.day_column(&occurrences, date, today);

        let mut ranges: Vec<Task> = todos_for_date(&occurrences, date)
            .into_iter()
            .filter(|t| t.is_multi_day())
            .cloned()
            .collect();
        ranges.append(&mut column.all_day);
        column.all_day = ranges;

        Ok(column)
    }

    fn day_column(&self, occurrences: &[Task], date: NaiveDate, today: NaiveDate) -> DayColumn {
        let mut all_day = Vec::new();
        let mut timed = Vec::new();

        for task in single_day_tasks(occurrences, date) {
            match timed_block(&task, self.settings) {
                Some(block) => timed.push(block),
                None => all_day.push(task),
            }
        }
        timed.sort_by(|a, b| a.top_px.total_cmp(&b.top_px));

        DayColumn {
            date,
            is_today: date == today,
            all_day,
            timed,
        }
    }
}

fn single_day_tasks(occurrences: &[Task], date: NaiveDate) -> Vec<Task> {
    todos_for_date(occurrences, date)
        .into_iter()
        .filter(|t| !t.is_multi_day())
        .cloned()
        .collect()
}

fn week_bars(occurrences: &[Task], days: &[NaiveDate; 7]) -> (Vec<TaskBar>, usize) {
    let bars = layout_week_bars(occurrences, days);
    let lanes = lane_count(&bars);
    let owned = bars
        .into_iter()
        .map(|bar| TaskBar {
            task: bar.task.clone(),
            segment: bar.segment,
            lane: bar.lane,
        })
        .collect();
    (owned, lanes)
}
