//! Configuration types for the roster scheduler.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML roster file.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::Person;

/// Templates for the exported calendar event text.
///
/// Both fields support the `{name}` placeholder for the assigned person's
/// display name and the `{date}` placeholder for the ISO day.
#[derive(Debug, Clone, Deserialize)]
pub struct EventTemplates {
    /// Template for the event SUMMARY line.
    pub summary: String,
    /// Template for the event DESCRIPTION line.
    pub description: String,
}

impl EventTemplates {
    /// Renders the summary template for a person and day.
    pub fn render_summary(&self, name: &str, day: NaiveDate) -> String {
        render(&self.summary, name, day)
    }

    /// Renders the description template for a person and day.
    pub fn render_description(&self, name: &str, day: NaiveDate) -> String {
        render(&self.description, name, day)
    }
}

fn render(template: &str, name: &str, day: NaiveDate) -> String {
    template
        .replace("{name}", name)
        .replace("{date}", &day.format("%Y-%m-%d").to_string())
}

/// Root structure of the roster configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Calendar event text templates.
    pub calendar: EventTemplates,
    /// The default roster used when a request carries no people.
    pub roster: Vec<Person>,
}
