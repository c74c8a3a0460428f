//! Person model.
//!
//! This module defines the [`Person`] struct representing a roster member
//! with the set of calendar days on which they cannot be assigned.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a roster member subject to assignment.
///
/// The blocked-dates set is read-only input to the engine: it is edited by
/// the roster-editing collaborator, never by the assignment passes.
///
/// # Example
///
/// ```
/// use stable_scheduler::models::Person;
/// use chrono::NaiveDate;
///
/// let saturday = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
/// let person = Person {
///     id: "alice".to_string(),
///     name: "Alice".to_string(),
///     blocked_dates: [saturday].into_iter().collect(),
/// };
/// assert!(!person.is_available(saturday));
/// assert!(person.is_available(saturday.succ_opt().unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for the person.
    pub id: String,
    /// Display name used in event text.
    pub name: String,
    /// Calendar days on which this person cannot be assigned.
    #[serde(default)]
    pub blocked_dates: BTreeSet<NaiveDate>,
}

impl Person {
    /// Returns true if this person can be assigned on the given day.
    pub fn is_available(&self, day: NaiveDate) -> bool {
        !self.blocked_dates.contains(&day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn person_with_block(day: &str) -> Person {
        Person {
            id: "p1".to_string(),
            name: "Person One".to_string(),
            blocked_dates: [date(day)].into_iter().collect(),
        }
    }

    #[test]
    fn test_available_on_unblocked_day() {
        let person = person_with_block("2024-03-02");
        assert!(person.is_available(date("2024-03-03")));
    }

    #[test]
    fn test_unavailable_on_blocked_day() {
        let person = person_with_block("2024-03-02");
        assert!(!person.is_available(date("2024-03-02")));
    }

    #[test]
    fn test_empty_blocked_set_is_always_available() {
        let person = Person {
            id: "p1".to_string(),
            name: "Person One".to_string(),
            blocked_dates: BTreeSet::new(),
        };
        assert!(person.is_available(date("2024-02-29")));
    }

    #[test]
    fn test_blocked_dates_default_when_absent_from_json() {
        let json = r#"{"id": "p1", "name": "Person One"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.blocked_dates.is_empty());
    }

    #[test]
    fn test_person_serialization_round_trip() {
        let person = person_with_block("2024-03-02");
        let json = serde_json::to_string(&person).unwrap();
        let deserialized: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(person, deserialized);
    }
}
