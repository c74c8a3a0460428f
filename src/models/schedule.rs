//! Schedule model.
//!
//! This module defines the [`Schedule`] mapping from calendar day to
//! [`Assignment`]. An explicitly unassigned day is distinct from a day the
//! engine has not processed yet: the former is present in the map with
//! [`Assignment::Unassigned`], the latter is an absent key.

use std::collections::BTreeMap;
use std::collections::btree_map;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The outcome recorded for a single calendar day.
///
/// Serializes as the person id string, or `null` for an unassigned day,
/// so a schedule renders as `{"2024-03-01": "alice", "2024-03-02": null}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// The day is covered by the person with this id.
    Person(String),
    /// No eligible candidate existed for the day; coverage is explicitly open.
    Unassigned,
}

impl Assignment {
    /// Returns the assigned person id, or `None` for an unassigned day.
    pub fn person_id(&self) -> Option<&str> {
        match self {
            Assignment::Person(id) => Some(id),
            Assignment::Unassigned => None,
        }
    }

    /// Returns true if the day is explicitly unassigned.
    pub fn is_unassigned(&self) -> bool {
        matches!(self, Assignment::Unassigned)
    }
}

impl Serialize for Assignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Assignment::Person(id) => serializer.serialize_some(id),
            Assignment::Unassigned => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Assignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(id) => Assignment::Person(id),
            None => Assignment::Unassigned,
        })
    }
}

/// A mapping from calendar day to assignment outcome.
///
/// The engine owns the schedule exclusively during generation and hands it
/// to the caller as a snapshot; the manual override cycler takes a schedule
/// by value and returns a new one rather than mutating shared state.
///
/// Day keys serialize as ISO `YYYY-MM-DD` strings.
///
/// # Example
///
/// ```
/// use stable_scheduler::models::{Assignment, Schedule};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let mut schedule = Schedule::new();
/// schedule.set(day, Assignment::Person("alice".to_string()));
/// assert_eq!(schedule.assigned_person(day), Some("alice"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: BTreeMap<NaiveDate, Assignment>,
}

impl Schedule {
    /// Creates an empty schedule with no processed days.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for a day, or `None` if the day was never processed.
    pub fn get(&self, day: NaiveDate) -> Option<&Assignment> {
        self.entries.get(&day)
    }

    /// Returns the assigned person id for a day.
    ///
    /// `None` covers both an explicitly unassigned day and an unprocessed
    /// day; use [`Schedule::get`] when the distinction matters.
    pub fn assigned_person(&self, day: NaiveDate) -> Option<&str> {
        self.entries.get(&day).and_then(Assignment::person_id)
    }

    /// Records the outcome for a day, replacing any previous entry.
    pub fn set(&mut self, day: NaiveDate, assignment: Assignment) {
        self.entries.insert(day, assignment);
    }

    /// Iterates over entries in ascending day order.
    pub fn iter(&self) -> btree_map::Iter<'_, NaiveDate, Assignment> {
        self.entries.iter()
    }

    /// Returns the number of processed days.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no day has been processed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = (&'a NaiveDate, &'a Assignment);
    type IntoIter = btree_map::Iter<'a, NaiveDate, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
