//! Time-of-day positioning for day and week time grids.
//!
//! Offsets are measured in pixels from midnight at the top of a day column.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

use crate::models::settings::CalendarSettings;
use crate::models::task::Task;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// An hour and minute within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { hour, minute })
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse an `HH:MM` string or a full timestamp into a time of day.
///
/// Timestamps keep the wall-clock time they were written with. Returns
/// `None` for anything unparseable.
pub fn parse_time(raw: &str) -> Option<TimeOfDay> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in ["%H:%M", "%H:%M:%S"] {
        if let Ok(time) = NaiveTime::parse_from_str(raw, format) {
            return Some(time.into());
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_local().time().into());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp.time().into());
        }
    }

    None
}

/// Vertical offset of `time` in a grid where one hour is `hour_height_px` tall.
pub fn position(time: TimeOfDay, hour_height_px: f32) -> f32 {
    time.hour as f32 * hour_height_px + (time.minute as f32 / 60.0) * hour_height_px
}

/// Placement of a timed task inside a day column.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedBlock {
    pub task: Task,
    pub top_px: f32,
    pub height_px: f32,
}

/// Compute the block for a timed single-day task.
///
/// All-day, multi-day, undated and start-less tasks have no block. An
/// unparseable start is drawn from the top of the day; a missing,
/// unparseable or non-increasing end falls back to `default_event_minutes`.
pub fn timed_block(task: &Task, settings: &CalendarSettings) -> Option<TimedBlock> {
    if !task.is_timed() {
        return None;
    }

    let hour_height = settings.hour_height_px;
    let start = parse_time(task.start_time.as_deref()?);
    let start_minutes = start.map(|t| t.minutes_since_midnight()).unwrap_or(0);
    let top_px = start.map(|t| position(t, hour_height)).unwrap_or(0.0);

    let end_minutes = task
        .end_time
        .as_deref()
        .and_then(parse_time)
        .map(|t| t.minutes_since_midnight())
        .filter(|end| *end > start_minutes)
        .unwrap_or_else(|| start_minutes.saturating_add(settings.default_event_minutes))
        .min(MINUTES_PER_DAY);

    let height_px = (end_minutes - start_minutes) as f32 / 60.0 * hour_height;

    Some(TimedBlock {
        task: task.clone(),
        top_px,
        height_px,
    })
}
