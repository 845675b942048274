// Property-based tests for occurrence expansion, day matching and grid layout
// Exercises the engine with random dates, windows and recurrence rules

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use task_calendar::models::recurrence::Recurrence;
use task_calendar::models::task::Task;
use task_calendar::services::layout::layout_for_week;
use task_calendar::services::task::queries::todos_for_date;
use task_calendar::services::task::recurrence::{generate_occurrences, MAX_OCCURRENCES_PER_TASK};
use task_calendar::utils::date::{build_month_matrix, build_week_days};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    // 2015-01-01 plus up to ~15 years
    (0i64..5500).prop_map(|offset| NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + Duration::days(offset))
}

fn recurrence_strategy() -> impl Strategy<Value = Recurrence> {
    prop_oneof![
        Just(Recurrence::Daily),
        Just(Recurrence::Weekly),
        Just(Recurrence::Monthly),
        Just(Recurrence::Yearly),
    ]
}

proptest! {
    /// Property: a non-recurring dated task expands to exactly itself
    #[test]
    fn prop_non_recurring_is_single_occurrence(
        due in date_strategy(),
        window_start in date_strategy(),
        window_days in 0i64..400,
    ) {
        let task = Task::builder(1).title("Once").due(due).build_unchecked();
        let window_end = window_start + Duration::days(window_days);

        let occurrences = generate_occurrences(&task, window_start, window_end);
        prop_assert_eq!(occurrences, vec![task]);
    }

    /// Property: recurring occurrences stay inside the window and under the cap
    #[test]
    fn prop_recurring_within_window_and_cap(
        due in date_strategy(),
        recurrence in recurrence_strategy(),
        window_start in date_strategy(),
        window_days in 0i64..4000,
    ) {
        let task = Task::builder(1).title("Repeat").due(due).recurrence(recurrence).build_unchecked();
        let window_end = window_start + Duration::days(window_days);

        let occurrences = generate_occurrences(&task, window_start, window_end);
        prop_assert!(occurrences.len() <= MAX_OCCURRENCES_PER_TASK);
        for occurrence in &occurrences {
            let date = occurrence.due_date.unwrap();
            prop_assert!(date >= window_start && date <= window_end);
            prop_assert!(date >= due);
        }
        prop_assert!(occurrences.windows(2).all(|w| w[0].due_date < w[1].due_date));
    }

    /// Property: expansion is deterministic and leaves its input untouched
    #[test]
    fn prop_expansion_is_idempotent(
        due in date_strategy(),
        recurrence in recurrence_strategy(),
        window_start in date_strategy(),
        window_days in 0i64..200,
    ) {
        let task = Task::builder(1).title("Repeat").due(due).recurrence(recurrence).build_unchecked();
        let before = task.clone();
        let window_end = window_start + Duration::days(window_days);

        let first = generate_occurrences(&task, window_start, window_end);
        let second = generate_occurrences(&task, window_start, window_end);
        prop_assert_eq!(first, second);
        prop_assert_eq!(task, before);
    }

    /// Property: a range matches exactly the days from its start to its end
    #[test]
    fn prop_range_matches_its_days(
        start in date_strategy(),
        length in 1i64..30,
        probe_offset in -5i64..40,
    ) {
        let end = start + Duration::days(length);
        let task = Task::builder(1).title("Range").range(start, end).build_unchecked();
        let probe = start + Duration::days(probe_offset);

        let matched = !todos_for_date(std::slice::from_ref(&task), probe).is_empty();
        prop_assert_eq!(matched, probe >= start && probe <= end);
    }

    /// Property: every month matrix is 6 consecutive Monday-first weeks
    #[test]
    fn prop_month_matrix_shape(date in date_strategy()) {
        let matrix = build_month_matrix(date);
        prop_assert_eq!(matrix.len(), 6);
        prop_assert_eq!(matrix[0][0].format("%a").to_string(), "Mon");
        let flat: Vec<NaiveDate> = matrix.iter().flatten().copied().collect();
        prop_assert_eq!(flat.len(), 42);
        prop_assert!(flat.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
    }

    /// Property: week segments cover exactly the range's days inside the week
    #[test]
    fn prop_segments_cover_range_days(
        start in date_strategy(),
        length in 1i64..40,
        week_offset in -7i64..50,
    ) {
        let end = start + Duration::days(length);
        let task = Task::builder(1).title("Range").range(start, end).build_unchecked();
        let week = build_week_days(start + Duration::days(week_offset));

        let covered: Vec<usize> = (0..7).filter(|&i| week[i] >= start && week[i] <= end).collect();
        match layout_for_week(&task, &week) {
            None => prop_assert!(covered.is_empty()),
            Some(segment) => {
                prop_assert_eq!(segment.start_col, *covered.first().unwrap());
                prop_assert_eq!(segment.end_col, *covered.last().unwrap());
                prop_assert_eq!(segment.is_start, week[segment.start_col] == start);
                prop_assert_eq!(segment.is_end, week[segment.end_col] == end);
            }
        }
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_and_non_leap_february_grids() {
        for date in [ymd(2024, 2, 1), ymd(2025, 2, 1)] {
            let matrix = build_month_matrix(date);
            assert_eq!(matrix.iter().map(|week| week.len()).sum::<usize>(), 42);
        }
    }

    #[test]
    fn test_daily_over_decade_hits_cap() {
        let task = Task::builder(1)
            .title("Water plants")
            .due(ymd(2015, 1, 1))
            .recurrence(Recurrence::Daily)
            .build_unchecked();
        let occurrences = generate_occurrences(&task, ymd(2015, 1, 1), ymd(2025, 1, 1));
        assert_eq!(occurrences.len(), MAX_OCCURRENCES_PER_TASK);
    }
}
