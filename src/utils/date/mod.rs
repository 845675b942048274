//! Calendar date arithmetic.
//!
//! All helpers work on wall-clock (naive local) values so results never
//! depend on the host time zone. Weeks are Monday-anchored.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Number of week rows in a month grid.
pub const MONTH_GRID_WEEKS: usize = 6;

/// Normalize a date to `00:00:00.000`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Normalize a date to `23:59:59.999`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // NaiveTime arithmetic wraps, so this is the last millisecond before midnight.
    date.and_time(NaiveTime::MIN - Duration::milliseconds(1))
}

/// Monday on or before `date`. Sunday belongs to the week that began six days earlier.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// End of the Sunday that closes the week containing `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDateTime {
    end_of_day(start_of_week(date) + Duration::days(6))
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// End of the last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDateTime {
    let last_day = add_months(start_of_month(date), 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date);
    end_of_day(last_day)
}

/// Compare year, month and day only.
pub fn is_same_day(a: impl Datelike, b: impl Datelike) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Compare year and month only.
pub fn is_same_month(a: impl Datelike, b: impl Datelike) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    date + Duration::weeks(weeks)
}

/// Add calendar months with day-of-month rollover.
///
/// When the target month is shorter than the source day, the surplus days
/// spill into the following month (Jan 31 + 1 month = Mar 3 in 2025).
/// Returns `None` only when the result falls outside chrono's date range.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let total = date.year().checked_mul(12)? + date.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(date.day() as i64 - 1))
}

/// Add calendar years with the same rollover rule as [`add_months`] (Feb 29 + 1 year = Mar 1).
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    add_months(date, years.checked_mul(12)?)
}

/// The seven dates of the Monday-anchored week containing `date`.
pub fn build_week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = start_of_week(date);
    std::array::from_fn(|offset| add_days(monday, offset as i64))
}

/// A fixed 6 × 7 grid for the month containing `date`.
///
/// The grid starts on the Monday on or before the 1st and always spans 42
/// days, whether or not the month needs all six rows.
pub fn build_month_matrix(date: NaiveDate) -> [[NaiveDate; 7]; MONTH_GRID_WEEKS] {
    let grid_start = start_of_week(start_of_month(date));
    std::array::from_fn(|week| build_week_days(add_weeks(grid_start, week as i64)))
}
