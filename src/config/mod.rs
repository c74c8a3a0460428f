//! Roster configuration loading.
//!
//! This module provides YAML configuration support for the default roster
//! and the calendar event text templates used by the export endpoint.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EventTemplates, RosterConfig};
