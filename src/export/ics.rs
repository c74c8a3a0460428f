//! VCALENDAR serialization.
//!
//! Produces the byte-exact calendar document consumed by the file/email
//! packaging collaborator: CRLF terminators throughout, a fixed PRODID,
//! one all-day VEVENT per input event in input order, and a single shared
//! DTSTAMP per serialization call. The timestamp is injected so tests can
//! pin the output down to the byte.

use chrono::{DateTime, Days, Utc};

use crate::config::EventTemplates;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarEvent, Person, Schedule};

use super::text::{escape_text, fold_line};

/// Product identifier emitted in the calendar header.
const PROD_ID: &str = "-//Stable Scheduler//EN";

/// Serializes events into a VCALENDAR document with the given timestamp.
///
/// The same `dtstamp` value is reused for every event, so the output is
/// fully deterministic for identical input and a fixed clock. An empty
/// event list still yields a well-formed document with zero VEVENT blocks.
///
/// # Example
///
/// ```
/// use stable_scheduler::export::serialize_calendar;
/// use chrono::{TimeZone, Utc};
///
/// let stamp = Utc.with_ymd_and_hms(2023, 10, 1, 12, 0, 0).unwrap();
/// let document = serialize_calendar(&[], stamp);
/// assert!(document.starts_with("BEGIN:VCALENDAR\r\n"));
/// assert!(document.ends_with("END:VCALENDAR\r\n"));
/// assert!(!document.contains("BEGIN:VEVENT"));
/// ```
pub fn serialize_calendar(events: &[CalendarEvent], dtstamp: DateTime<Utc>) -> String {
    let stamp = dtstamp.format("%Y%m%dT%H%M%SZ").to_string();

    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PROD_ID),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    for event in events {
        let end = event
            .date
            .checked_add_days(Days::new(1))
            .expect("event date has a successor");

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("DTSTART;VALUE=DATE:{}", event.date.format("%Y%m%d")));
        lines.push(format!("DTEND;VALUE=DATE:{}", end.format("%Y%m%d")));
        lines.push(format!("DTSTAMP:{}", stamp));
        lines.push(format!(
            "UID:{}-{}@stablescheduler",
            event.date.format("%Y-%m-%d"),
            event.person_id
        ));
        lines.push(format!("SUMMARY:{}", escape_text(&event.title)));
        lines.push(format!("DESCRIPTION:{}", escape_text(&event.description)));
        lines.push("STATUS:CONFIRMED".to_string());
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());

    let mut document = String::new();
    for line in lines {
        document.push_str(&fold_line(&line));
        document.push_str("\r\n");
    }
    document
}

/// Serializes events with the current UTC time as DTSTAMP.
pub fn serialize_calendar_now(events: &[CalendarEvent]) -> String {
    serialize_calendar(events, Utc::now())
}

/// Builds the exportable event list for a schedule.
///
/// One event per assigned day, in ascending day order; unassigned and
/// unprocessed days produce no event. Event text comes from the configured
/// templates with the person's name and the ISO day substituted in.
///
/// # Errors
///
/// Returns [`EngineError::PersonNotFound`] when an assigned id is absent
/// from the roster.
pub fn events_for_schedule(
    schedule: &Schedule,
    people: &[Person],
    templates: &EventTemplates,
) -> EngineResult<Vec<CalendarEvent>> {
    let mut events = Vec::new();
    for (day, assignment) in schedule {
        let Some(person_id) = assignment.person_id() else {
            continue;
        };
        let person = people
            .iter()
            .find(|person| person.id == person_id)
            .ok_or_else(|| EngineError::PersonNotFound {
                id: person_id.to_string(),
            })?;

        events.push(CalendarEvent {
            date: *day,
            person_id: person.id.clone(),
            display_name: person.name.clone(),
            title: templates.render_summary(&person.name, *day),
            description: templates.render_description(&person.name, *day),
        });
    }
    Ok(events)
}
