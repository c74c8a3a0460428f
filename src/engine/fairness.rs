//! Fairness tracking for assignment tie-breaking.
//!
//! This module defines the per-person counters consulted inside both
//! assignment passes' candidate ordering. The tracker is the only place
//! counters change: the passes record assignments through it and read it
//! back when ranking candidates, and the final snapshot is returned to the
//! caller for display. Counters are zeroed at the start of every
//! generation run and never persisted across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Person;

/// Per-person assignment totals for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessCounters {
    /// Total days assigned to the person in this run.
    pub total_days: u32,
    /// Anchor days (Saturdays) assigned to the person in this run.
    pub anchor_days: u32,
}

/// Mutable per-person counter set driving tie-break ordering.
///
/// # Example
///
/// ```
/// use stable_scheduler::engine::FairnessTracker;
/// use stable_scheduler::models::Person;
///
/// let people = vec![Person {
///     id: "alice".to_string(),
///     name: "Alice".to_string(),
///     blocked_dates: Default::default(),
/// }];
/// let mut tracker = FairnessTracker::new(&people);
/// tracker.record_anchor_day("alice");
/// assert_eq!(tracker.total_days("alice"), 1);
/// assert_eq!(tracker.anchor_days("alice"), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FairnessTracker {
    counters: BTreeMap<String, FairnessCounters>,
}

impl FairnessTracker {
    /// Creates a tracker with zeroed counters for every roster member.
    pub fn new(people: &[Person]) -> Self {
        Self {
            counters: people
                .iter()
                .map(|person| (person.id.clone(), FairnessCounters::default()))
                .collect(),
        }
    }

    /// Total days assigned to the person so far in this run.
    pub fn total_days(&self, person_id: &str) -> u32 {
        self.counters
            .get(person_id)
            .map(|c| c.total_days)
            .unwrap_or(0)
    }

    /// Anchor days assigned to the person so far in this run.
    pub fn anchor_days(&self, person_id: &str) -> u32 {
        self.counters
            .get(person_id)
            .map(|c| c.anchor_days)
            .unwrap_or(0)
    }

    /// Records a fill-day assignment: increments the total-day counter only.
    pub fn record_day(&mut self, person_id: &str) {
        let counters = self.counters.entry(person_id.to_string()).or_default();
        counters.total_days += 1;
    }

    /// Records an anchor-day assignment: increments both counters.
    pub fn record_anchor_day(&mut self, person_id: &str) {
        let counters = self.counters.entry(person_id.to_string()).or_default();
        counters.total_days += 1;
        counters.anchor_days += 1;
    }

    /// Returns the final counters for display, keyed by person id.
    ///
    /// The snapshot is a copy; querying it never mutates the tracker.
    pub fn snapshot(&self) -> BTreeMap<String, FairnessCounters> {
        self.counters.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(ids: &[&str]) -> Vec<Person> {
        ids.iter()
            .map(|id| Person {
                id: id.to_string(),
                name: id.to_uppercase(),
                blocked_dates: Default::default(),
            })
            .collect()
    }

    #[test]
    fn test_new_tracker_starts_at_zero() {
        let tracker = FairnessTracker::new(&people(&["a", "b"]));
        assert_eq!(tracker.total_days("a"), 0);
        assert_eq!(tracker.anchor_days("a"), 0);
        assert_eq!(tracker.total_days("b"), 0);
    }

    #[test]
    fn test_record_day_touches_total_only() {
        let mut tracker = FairnessTracker::new(&people(&["a"]));
        tracker.record_day("a");
        tracker.record_day("a");
        assert_eq!(tracker.total_days("a"), 2);
        assert_eq!(tracker.anchor_days("a"), 0);
    }

    #[test]
    fn test_record_anchor_day_touches_both() {
        let mut tracker = FairnessTracker::new(&people(&["a"]));
        tracker.record_anchor_day("a");
        assert_eq!(tracker.total_days("a"), 1);
        assert_eq!(tracker.anchor_days("a"), 1);
    }

    #[test]
    fn test_unknown_person_reads_as_zero() {
        let tracker = FairnessTracker::new(&people(&["a"]));
        assert_eq!(tracker.total_days("ghost"), 0);
        assert_eq!(tracker.anchor_days("ghost"), 0);
    }

    #[test]
    fn test_snapshot_reflects_recorded_assignments() {
        let mut tracker = FairnessTracker::new(&people(&["a", "b"]));
        tracker.record_anchor_day("a");
        tracker.record_day("b");
        tracker.record_day("b");

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot["a"].total_days, 1);
        assert_eq!(snapshot["a"].anchor_days, 1);
        assert_eq!(snapshot["b"].total_days, 2);
        assert_eq!(snapshot["b"].anchor_days, 0);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut tracker = FairnessTracker::new(&people(&["a"]));
        let before = tracker.snapshot();
        tracker.record_day("a");
        assert_eq!(before["a"].total_days, 0);
        assert_eq!(tracker.total_days("a"), 1);
    }
}
