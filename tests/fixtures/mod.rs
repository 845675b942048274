// Test fixtures - reusable test data
// Provides consistent task records across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use task_calendar::models::recurrence::Recurrence;
use task_calendar::models::task::{Priority, Task};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Returns Jan 1, 2025
    pub fn jan_1_2025() -> NaiveDate {
        ymd(2025, 1, 1)
    }

    /// Returns Mon Jun 2, 2025 (start of a Monday-anchored week)
    pub fn mon_jun_2_2025() -> NaiveDate {
        ymd(2025, 6, 2)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample tasks for testing
pub mod tasks {
    use super::*;

    /// Rent due on the first of every month
    pub fn monthly_rent() -> Task {
        Task::builder(1)
            .title("Pay rent")
            .due(dates::jan_1_2025())
            .recurrence(Recurrence::Monthly)
            .priority(Priority::High)
            .build()
            .unwrap()
    }

    /// Timed weekday standup repeating daily
    pub fn daily_standup() -> Task {
        Task::builder(2)
            .title("Standup")
            .due(dates::mon_jun_2_2025())
            .times("09:15", "09:30")
            .recurrence(Recurrence::Daily)
            .category(10)
            .build()
            .unwrap()
    }

    /// Conference crossing the Jun 8/9 week boundary
    pub fn conference() -> Task {
        Task::builder(3)
            .title("RustConf")
            .range(dates::ymd(2025, 6, 5), dates::ymd(2025, 6, 12))
            .all_day(true)
            .build()
            .unwrap()
    }

    /// Five-day trip at the beginning of June
    pub fn trip() -> Task {
        Task::builder(4)
            .title("Hiking trip")
            .range(dates::ymd(2025, 6, 1), dates::ymd(2025, 6, 5))
            .all_day(true)
            .build()
            .unwrap()
    }

    /// One-off dentist appointment
    pub fn dentist() -> Task {
        Task::builder(5)
            .title("Dentist")
            .due(dates::ymd(2025, 6, 3))
            .times("14:00", "15:00")
            .build()
            .unwrap()
    }

    /// Undated inbox item
    pub fn inbox_item() -> Task {
        Task::new(6, "Read that book")
    }

    pub fn all() -> Vec<Task> {
        vec![
            monthly_rent(),
            daily_standup(),
            conference(),
            trip(),
            dentist(),
            inbox_item(),
        ]
    }
}
