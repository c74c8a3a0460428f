//! Weekend and adjacency predicates.
//!
//! This module provides the pure calendar predicates consulted by the
//! assignment passes: anchor-day detection (Saturday), weekend-window
//! membership (Friday through Sunday), and the lookup of the most recently
//! fully elapsed weekend relative to a day.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::Schedule;

/// Returns true if the day is an anchor day (Saturday).
///
/// Anchor days are assigned before all other days and ranked on
/// anchor-specific load.
///
/// # Example
///
/// ```
/// use stable_scheduler::engine::is_anchor_day;
/// use chrono::NaiveDate;
///
/// // 2024-03-02 is a Saturday
/// assert!(is_anchor_day(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()));
/// assert!(!is_anchor_day(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()));
/// ```
pub fn is_anchor_day(day: NaiveDate) -> bool {
    day.weekday() == Weekday::Sat
}

/// Returns true if the day falls in a weekend window (Friday, Saturday, or Sunday).
pub fn in_weekend_window(day: NaiveDate) -> bool {
    matches!(
        day.weekday(),
        Weekday::Fri | Weekday::Sat | Weekday::Sun
    )
}

/// Returns the most recently fully elapsed weekend before `day`.
///
/// Looks backward to the nearest Sunday strictly before `day`, derives that
/// weekend's Friday/Saturday/Sunday triple, and drops any member falling on
/// or after `day` so a day not yet in the past is never consulted.
///
/// # Example
///
/// ```
/// use stable_scheduler::engine::last_elapsed_weekend;
/// use chrono::NaiveDate;
///
/// // 2024-03-06 is a Wednesday; the prior weekend is Mar 1-3.
/// let weekend = last_elapsed_weekend(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
/// assert_eq!(weekend[0], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(weekend[2], NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
/// ```
pub fn last_elapsed_weekend(day: NaiveDate) -> Vec<NaiveDate> {
    let mut sunday = day.pred_opt().expect("day has a predecessor");
    while sunday.weekday() != Weekday::Sun {
        sunday = sunday.pred_opt().expect("day has a predecessor");
    }

    let friday = sunday - Days::new(2);
    let saturday = sunday - Days::new(1);

    [friday, saturday, sunday]
        .into_iter()
        .filter(|weekend_day| *weekend_day < day)
        .collect()
}

/// Returns true if the person was assigned on any day of the most recently
/// fully elapsed weekend before `day`.
pub fn worked_last_weekend(schedule: &Schedule, person_id: &str, day: NaiveDate) -> bool {
    last_elapsed_weekend(day)
        .into_iter()
        .any(|weekend_day| schedule.assigned_person(weekend_day) == Some(person_id))
}
