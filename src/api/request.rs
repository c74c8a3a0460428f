//! Request types for the roster scheduler API.
//!
//! This module defines the JSON request structures for the schedule
//! generation, cycling, and export endpoints. Each endpoint may carry its
//! own roster; when `people` is omitted the configured default roster is
//! used.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Person, Schedule};

/// Roster member information in an API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRequest {
    /// Unique identifier for the person.
    pub id: String,
    /// Display name used in event text.
    pub name: String,
    /// Calendar days on which this person cannot be assigned.
    #[serde(default)]
    pub blocked_dates: BTreeSet<NaiveDate>,
}

impl From<PersonRequest> for Person {
    fn from(req: PersonRequest) -> Self {
        Person {
            id: req.id,
            name: req.name,
            blocked_dates: req.blocked_dates,
        }
    }
}

/// Request body for the `POST /schedule` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Roster override; the configured default roster when omitted.
    #[serde(default)]
    pub people: Option<Vec<PersonRequest>>,
    /// Fixed tie-break seed for reproducible output; OS entropy when omitted.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Request body for the `POST /schedule/cycle` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleRequest {
    /// The schedule to correct.
    pub schedule: Schedule,
    /// The day whose assignment should advance.
    pub day: NaiveDate,
    /// Roster override; the configured default roster when omitted.
    #[serde(default)]
    pub people: Option<Vec<PersonRequest>>,
}

/// Request body for the `POST /schedule/export` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// The schedule to export.
    pub schedule: Schedule,
    /// Roster override; the configured default roster when omitted.
    #[serde(default)]
    pub people: Option<Vec<PersonRequest>>,
}
