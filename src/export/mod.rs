//! Calendar export serialization.
//!
//! This module turns a finished schedule into a standards-conformant
//! `VCALENDAR` document: event-list construction from the schedule and
//! roster, TEXT escaping, octet folding, and the byte-exact document
//! layout itself.

mod ics;
mod text;

pub use ics::{events_for_schedule, serialize_calendar, serialize_calendar_now};
pub use text::{escape_text, fold_line};
