//! Date range model and calendar day expansion.
//!
//! This module defines the [`DateRange`] type: an inclusive pair of whole
//! calendar days, and the expansion of that pair into the ordered day
//! sequence the assignment passes iterate over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of whole calendar days.
///
/// Both endpoints are timezone-naive calendar dates with no time-of-day
/// component; comparison and expansion are pure calendar-date arithmetic,
/// unaffected by daylight-saving transitions.
///
/// # Example
///
/// ```
/// use stable_scheduler::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// ).unwrap();
///
/// // Inclusive of both endpoints, leap day included.
/// assert_eq!(range.days().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start: NaiveDate,
    /// The last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a validated date range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] when `start` is after `end`.
    /// A range where `start == end` is valid and spans a single day.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Expands the range into its ordered sequence of calendar days.
    ///
    /// The sequence is strictly ascending, one entry per day, inclusive of
    /// both endpoints, and correct across month and year boundaries.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::with_capacity(self.day_count());
        let mut current = self.start;
        while current <= self.end {
            days.push(current);
            match current.succ_opt() {
                Some(next) => current = next,
                // NaiveDate::MAX, nothing after it to expand
                None => break,
            }
        }
        days
    }

    /// Returns the inclusive number of days in the range.
    pub fn day_count(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Checks whether a day falls within the range (inclusive).
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}
