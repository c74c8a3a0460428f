//! Error types for the roster assignment engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during schedule generation,
//! configuration loading, and calendar export.
//!
//! Two failure modes are deliberately NOT errors: a day for which no
//! eligible candidate exists is recorded as an explicit unassigned entry
//! in the schedule, and a stale assignee encountered while cycling a day
//! falls through to the first eligible candidate.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the roster assignment engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use stable_scheduler::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: start 2024-03-10 is after end 2024-03-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The date range's start day falls after its end day.
    ///
    /// Fatal to the generation call; no partial schedule is returned.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The start day of the rejected range.
        start: NaiveDate,
        /// The end day of the rejected range.
        end: NaiveDate,
    },

    /// The roster contained inconsistent data.
    #[error("Invalid roster field '{field}': {message}")]
    InvalidRoster {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A schedule entry references a person absent from the roster.
    #[error("Person not found in roster: {id}")]
    PersonNotFound {
        /// The person id that was not found.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
