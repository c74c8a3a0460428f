//! Calendar event model.
//!
//! This module defines the [`CalendarEvent`] input tuple consumed by the
//! calendar export serializer. Events are produced only for assigned
//! schedule entries; unassigned days yield no event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One exportable all-day event: a (date, person, event text) tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The calendar day the event covers.
    pub date: NaiveDate,
    /// Id of the assigned person; used in the event UID.
    pub person_id: String,
    /// Display name of the assigned person.
    pub display_name: String,
    /// The event title (SUMMARY line, escaped on serialization).
    pub title: String,
    /// The event description (DESCRIPTION line, escaped on serialization).
    pub description: String,
}
