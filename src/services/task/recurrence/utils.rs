use chrono::{Duration, NaiveDate};

use crate::models::recurrence::Recurrence;

/// Move `cursor` forward by whole recurrence steps until it is on or after
/// `target`. Returns `None` if the calendar overflows first.
///
/// Day-based rules jump directly; month and year rules step one at a time so
/// rollover accumulates the same way it does when iterating.
pub(super) fn fast_forward(
    cursor: NaiveDate,
    recurrence: Recurrence,
    target: NaiveDate,
) -> Option<NaiveDate> {
    if cursor >= target {
        return Some(cursor);
    }

    if let Some(step) = recurrence.step_days() {
        let behind = (target - cursor).num_days();
        let steps = (behind + step - 1) / step;
        return cursor.checked_add_signed(Duration::days(steps * step));
    }

    let mut current = cursor;
    while current < target {
        current = recurrence.advance(current)?;
    }
    Some(current)
}
