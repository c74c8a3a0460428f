//! Core data models for the roster assignment engine.
//!
//! This module contains all the domain models used throughout the engine.

mod date_range;
mod event;
mod person;
mod schedule;

pub use date_range::DateRange;
pub use event::CalendarEvent;
pub use person::Person;
pub use schedule::{Assignment, Schedule};
