//! Grid placement for calendar views.
//!
//! Multi-day tasks are drawn as one bar per week row. Each row is laid out
//! independently, so a task spanning three weeks yields three segments.

use chrono::NaiveDate;
use std::cmp::Reverse;

use crate::models::task::Task;

pub mod time_grid;

/// Column span of a multi-day bar within one week row.
///
/// Columns are 0-based and inclusive. `is_start`/`is_end` are set when the
/// task's real first/last day falls inside this row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSegment {
    pub start_col: usize,
    pub end_col: usize,
    pub is_start: bool,
    pub is_end: bool,
}

impl WeekSegment {
    /// Number of columns covered.
    pub fn span(&self) -> usize {
        self.end_col - self.start_col + 1
    }
}

/// Compute the segment `task` occupies in the week `week_days`.
///
/// Returns `None` for undated tasks and for tasks that start after or end
/// before the week.
pub fn layout_for_week(task: &Task, week_days: &[NaiveDate; 7]) -> Option<WeekSegment> {
    let (start, end) = task.date_span()?;
    let first = week_days[0];
    let last = week_days[6];

    if start > last || end < first {
        return None;
    }

    // A task that began in an earlier week clamps to column 0.
    let start_col = week_days.iter().position(|day| *day >= start)?;
    let end_col = if end > last {
        6
    } else {
        week_days.iter().rposition(|day| *day <= end)?
    };

    if end_col < start_col {
        return None;
    }

    Some(WeekSegment {
        start_col,
        end_col,
        is_start: week_days[start_col] == start,
        is_end: week_days[end_col] == end,
    })
}

/// A multi-day bar placed in a week row.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBar<'a> {
    pub task: &'a Task,
    pub segment: WeekSegment,
    /// Vertical slot within the row, 0 being the topmost.
    pub lane: usize,
}

/// Lay out every multi-day task that touches `week_days` without overlaps.
///
/// Bars are ordered by start column, longer spans first, then task id, and
/// each takes the lowest lane that is free across its columns.
pub fn layout_week_bars<'a>(tasks: &'a [Task], week_days: &[NaiveDate; 7]) -> Vec<WeekBar<'a>> {
    let mut placed: Vec<(&Task, WeekSegment)> = tasks
        .iter()
        .filter(|task| task.is_multi_day())
        .filter_map(|task| layout_for_week(task, week_days).map(|segment| (task, segment)))
        .collect();

    placed.sort_by_key(|(task, segment)| (segment.start_col, Reverse(segment.span()), task.id));

    // Last occupied column per lane.
    let mut lane_ends: Vec<usize> = Vec::new();
    placed
        .into_iter()
        .map(|(task, segment)| {
            let lane = match lane_ends.iter().position(|end| *end < segment.start_col) {
                Some(free) => {
                    lane_ends[free] = segment.end_col;
                    free
                }
                None => {
                    lane_ends.push(segment.end_col);
                    lane_ends.len() - 1
                }
            };
            WeekBar { task, segment, lane }
        })
        .collect()
}

/// Number of lanes needed to draw `bars`.
pub fn lane_count(bars: &[WeekBar<'_>]) -> usize {
    bars.iter().map(|bar| bar.lane + 1).max().unwrap_or(0)
}
